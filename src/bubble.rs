use snafu::prelude::*;

use crate::error::{InvalidBubbleIndexSnafu, MapError};
use crate::memory::{Address, SPRITE_RAM, SPRITE_REGION_END};

// Each bubble's top-left tile is one shadow-OAM entry: Y is the first byte
// of the entry and X the fourth.
pub const BUBBLE_COUNT: usize = 6;
pub const OBJECT_STRIDE: u16 = 4;
pub const X_OFFSET: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleCorner {
    pub y: Address,
    pub x: Address,
}

#[rustfmt::skip]
pub const BUBBLE_TOP_LEFT: [BubbleCorner; BUBBLE_COUNT] = [
    BubbleCorner { y: Address(0x0300), x: Address(0x0303) },
    BubbleCorner { y: Address(0x0304), x: Address(0x0307) },
    BubbleCorner { y: Address(0x0308), x: Address(0x030b) },
    BubbleCorner { y: Address(0x030c), x: Address(0x030f) },
    BubbleCorner { y: Address(0x0310), x: Address(0x0313) },
    BubbleCorner { y: Address(0x0314), x: Address(0x0317) },
];

const fn top_left_y(index: usize) -> Address {
    assert!(index < BUBBLE_COUNT);
    SPRITE_RAM.offset(index as u16 * OBJECT_STRIDE)
}

const fn top_left_x(index: usize) -> Address {
    top_left_y(index).offset(X_OFFSET)
}

impl BubbleCorner {
    const fn derive(index: usize) -> BubbleCorner {
        BubbleCorner {
            y: top_left_y(index),
            x: top_left_x(index),
        }
    }

    pub fn of(index: usize) -> Result<BubbleCorner, MapError> {
        BUBBLE_TOP_LEFT
            .get(index)
            .copied()
            .context(InvalidBubbleIndexSnafu { index })
    }
}

const _: () = {
    let mut i = 0;
    while i < BUBBLE_COUNT {
        let derived = BubbleCorner::derive(i);
        assert!(BUBBLE_TOP_LEFT[i].y.0 == derived.y.0);
        assert!(BUBBLE_TOP_LEFT[i].x.0 == derived.x.0);
        assert!(derived.x.0 < SPRITE_REGION_END.0);
        i += 1;
    }
};
