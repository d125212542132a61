use std::fmt;

use crate::memory::registers::{OAMADDR, SPRITEDMA};

pub mod registers;

// A value written to a register, or one half of a PPU address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Byte(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub u16);

impl Byte {
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn checked_add(self, other: Byte) -> Option<Byte> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Byte(sum)),
            None => None,
        }
    }

    pub const fn widening_add(self, other: Byte) -> u16 {
        self.0 as u16 + other.0 as u16
    }
}

impl Address {
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    // The 6502 bus wraps at $ffff
    pub const fn offset(self, by: u16) -> Address {
        Address(self.0.wrapping_add(by))
    }

    pub const fn from_bytes(hi: Byte, lo: Byte) -> Address {
        Address(((hi.0 as u16) << 8) | lo.0 as u16)
    }

    pub const fn hi(self) -> Byte {
        Byte((self.0 >> 8) as u8)
    }

    pub const fn lo(self) -> Byte {
        Byte(self.0 as u8)
    }
}

impl fmt::Display for Byte {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${:02x}", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${:04x}", self.0)
    }
}

// 2 KiB of internal RAM, mirrored three times up to $1fff
pub const RAM_SIZE: usize = 0x0800;
pub const RAM_MIRROR_END: Address = Address(0x1fff);
pub const RAM_MIRROR_MASK: u16 = 0x07ff;

pub const STACK_PAGE: Address = Address(0x0100);
pub const STACK_PAGE_SIZE: u16 = 0x0100;
pub const STACK_INIT: Byte = Byte(0xff);

// Shadow OAM. The NMI handler DMAs this whole page into the PPU every frame.
pub const SPRITE_RAM: Address = Address(0x0300);
pub const SPRITE_SIZE: Byte = Byte(0x18);
pub const SPRITE_LOW: Byte = Byte(0x00);
pub const SPRITE_HI: Byte = Byte(0x03);
pub const NMI_LO_ADDR: Address = OAMADDR;
pub const NMI_HI_ADDR: Address = SPRITEDMA;

pub const SPRITE_REGION_END: Address = SPRITE_RAM.offset(SPRITE_SIZE.0 as u16);

const _: () = {
    // DMA source is given as a page number; the region has to start on one
    assert!(SPRITE_LOW.0 == 0);
    assert!(SPRITE_RAM.0 == Address::from_bytes(SPRITE_HI, SPRITE_LOW).0);
    assert!(SPRITE_RAM.lo().0 as u16 + SPRITE_SIZE.0 as u16 <= 0x100);

    assert!(SPRITE_REGION_END.0 as usize <= RAM_SIZE);
    assert!(STACK_PAGE.0 + STACK_PAGE_SIZE <= SPRITE_RAM.0);
    assert!(STACK_INIT.0 as u16 == STACK_PAGE_SIZE - 1);
};
