use bitflags::bitflags;

use crate::memory::{Address, Byte};

pub const PPUCTRL: Address = Address(0x2000);
pub const PPUMASK: Address = Address(0x2001);
pub const PPUSTATUS: Address = Address(0x2002);
pub const OAMADDR: Address = Address(0x2003);
pub const OAMDATA: Address = Address(0x2004);
pub const PPUSCROLL: Address = Address(0x2005);
pub const PPUADDR: Address = Address(0x2006);
pub const PPUDATA: Address = Address(0x2007);

pub const SPRITEDMA: Address = Address(0x4014);
pub const APU_STATUS: Address = Address(0x4015);
pub const JOYPAD1: Address = Address(0x4016);
pub const APU_FRAME_COUNTER: Address = Address(0x4017);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PpuControl: u8 {
        const NAMETABLE        = 0b0000_0011;
        const VRAM_INCREMENT   = 0b0000_0100;
        const SPRITE_TABLE     = 0b0000_1000;
        const BACKGROUND_TABLE = 0b0001_0000;
        const SPRITE_SIZE      = 0b0010_0000;
        const MASTER_SLAVE     = 0b0100_0000;
        const NMI_ENABLE       = 0b1000_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PpuMask: u8 {
        const GRAYSCALE         = 0b0000_0001;
        const SHOW_BG_LEFT      = 0b0000_0010;
        const SHOW_SPRITES_LEFT = 0b0000_0100;
        const SHOW_BG           = 0b0000_1000;
        const SHOW_SPRITES      = 0b0001_0000;
        const EMPHASIZE_RED     = 0b0010_0000;
        const EMPHASIZE_GREEN   = 0b0100_0000;
        const EMPHASIZE_BLUE    = 0b1000_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameCounter: u8 {
        const IRQ_INHIBIT = 0b0100_0000;
        const FIVE_STEP   = 0b1000_0000;
    }
}

impl From<u8> for PpuControl {
    fn from(byte: u8) -> Self {
        Self::from_bits_truncate(byte)
    }
}

impl From<u8> for FrameCounter {
    fn from(byte: u8) -> Self {
        Self::from_bits_truncate(byte)
    }
}

// Written to APU_FRAME_COUNTER at reset to silence the frame IRQ
pub const APU_RESET: Byte = Byte(0x40);

pub const NMI_ENABLE: PpuControl = PpuControl::NMI_ENABLE;

// Background and sprites on, including the leftmost 8 pixels
pub const SPRITE_ENABLE: PpuMask = PpuMask::from_bits_retain(0b0001_1110);

const _: () = assert!(APU_RESET.0 == FrameCounter::IRQ_INHIBIT.bits());
