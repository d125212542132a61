use bitflags::bitflags;

use crate::memory::Byte;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct JoypadRead: u8 {
        const DATA = 0b0000_0001;
    }
}

impl From<u8> for JoypadRead {
    fn from(byte: u8) -> Self {
        Self::from_bits_truncate(byte)
    }
}

// Strobe value for controller 1, written to JOYPAD1 before polling
pub const CTRL_1_PORT: Byte = Byte(0x01);

pub const BINARY_ONE: JoypadRead = JoypadRead::DATA;
