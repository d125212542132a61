use crate::memory::{Address, Byte};

pub mod sprite;

// Ports are the high/low bytes pushed through PPUADDR before a VRAM transfer.
pub const BG_PORT: Byte = Byte(0x20);

pub const PALETTE_PORT: Byte = Byte(0x3f);
pub const PALETTE_SIZE: Byte = Byte(0x20);

pub const ATTR_HI_PORT: Byte = Byte(0x23);
pub const ATTR_LO_PORT: Byte = Byte(0xc0);
pub const ATTR_SIZE: Byte = Byte(0x40);

pub const BACKGROUND_ADDRESS: Address = Address::from_bytes(BG_PORT, Byte(0x00));
pub const PALETTE_ADDRESS: Address = Address::from_bytes(PALETTE_PORT, Byte(0x00));
pub const ATTRIBUTE_ADDRESS: Address = Address::from_bytes(ATTR_HI_PORT, ATTR_LO_PORT);

// ATTR_LO_PORT + ATTR_SIZE wraps to zero in 8 bits. Widened, it carries into
// the high byte and lands one past the attribute table, on the next nametable.
pub const ATTRIBUTE_END: Address =
    Address::from_bytes(ATTR_HI_PORT, Byte(0x00)).offset(ATTR_LO_PORT.widening_add(ATTR_SIZE));

pub const NAMETABLE_SIZE: u16 = 0x0400;

const _: () = {
    assert!(ATTR_LO_PORT.checked_add(ATTR_SIZE).is_none());
    assert!(ATTRIBUTE_END.0 == BACKGROUND_ADDRESS.0 + NAMETABLE_SIZE);
    assert!(PALETTE_ADDRESS.0 + PALETTE_SIZE.0 as u16 <= 0x3f20);
};
