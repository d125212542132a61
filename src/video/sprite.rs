use bitflags::bitflags;
use snafu::prelude::*;

use crate::bubble::OBJECT_STRIDE;
use crate::error::{InvalidSpriteIndexSnafu, MapError};
use crate::memory::{SPRITE_RAM, SPRITE_SIZE};
use crate::snapshot::RamSnapshot;

pub const OAM_ENTRY_SIZE: u16 = 4;
pub const SHADOW_OAM_ENTRIES: usize = SPRITE_SIZE.0 as usize / OAM_ENTRY_SIZE as usize;

// Sprites at or below this line are parked off-screen
const HIDDEN_Y: u8 = 0xef;

const _: () = assert!(OBJECT_STRIDE == OAM_ENTRY_SIZE);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpriteAttributes: u8 {
        const PALETTE  = 0b0000_0011;
        const PRIORITY = 0b0010_0000;
        const FLIP_X   = 0b0100_0000;
        const FLIP_Y   = 0b1000_0000;
    }
}

impl From<u8> for SpriteAttributes {
    fn from(byte: u8) -> Self {
        Self::from_bits_truncate(byte)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub y: u8,
    pub tile_index: u8,
    pub attributes: SpriteAttributes,
    pub x: u8,
}

impl Sprite {
    pub fn from_shadow_oam(ram: &RamSnapshot, index: usize) -> Result<Self, MapError> {
        ensure!(index < SHADOW_OAM_ENTRIES, InvalidSpriteIndexSnafu { index });
        let sprite_addr = SPRITE_RAM.offset(index as u16 * OAM_ENTRY_SIZE);

        Ok(Sprite {
            y: ram.read(sprite_addr)?,
            tile_index: ram.read(sprite_addr.offset(1))?,
            attributes: ram.read_as(sprite_addr.offset(2))?,
            x: ram.read(sprite_addr.offset(3))?,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.y < HIDDEN_Y
    }

    pub fn palette(&self) -> u8 {
        (self.attributes & SpriteAttributes::PALETTE).bits()
    }
}
