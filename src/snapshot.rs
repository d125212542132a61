use std::fs;
use std::path::Path;

use log::{debug, info};
use snafu::prelude::*;

use crate::bubble::{BubbleCorner, BUBBLE_COUNT};
use crate::error::{DumpTooSmallSnafu, IoSnafu, MapError, UnmappedAddressSnafu};
use crate::memory::{Address, RAM_MIRROR_END, RAM_MIRROR_MASK, RAM_SIZE, SPRITE_REGION_END};
use crate::video::sprite::{Sprite, SHADOW_OAM_ENTRIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubblePosition {
    pub x: u8,
    pub y: u8,
}

// Raw dump of CPU internal RAM, first byte at $0000
#[derive(Clone)]
pub struct RamSnapshot {
    memory: Vec<u8>,
}

impl RamSnapshot {
    pub fn from_bytes(mut memory: Vec<u8>) -> Result<RamSnapshot, MapError> {
        let required = SPRITE_REGION_END.value() as usize;
        ensure!(
            memory.len() >= required,
            DumpTooSmallSnafu {
                len: memory.len(),
                required
            }
        );

        if memory.len() > RAM_SIZE {
            debug!("Ignoring {} bytes past internal RAM", memory.len() - RAM_SIZE);
            memory.truncate(RAM_SIZE);
        }

        Ok(RamSnapshot { memory })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<RamSnapshot, MapError> {
        let path = path.as_ref();
        let memory = fs::read(path).context(IoSnafu { path })?;
        info!("Loaded {} byte RAM dump from {}", memory.len(), path.display());

        RamSnapshot::from_bytes(memory)
    }

    pub fn read(&self, addr: Address) -> Result<u8, MapError> {
        ensure!(
            addr <= RAM_MIRROR_END,
            UnmappedAddressSnafu { address: addr.value() }
        );

        self.memory
            .get((addr.value() & RAM_MIRROR_MASK) as usize)
            .copied()
            .context(UnmappedAddressSnafu { address: addr.value() })
    }

    pub fn read_as<T>(&self, addr: Address) -> Result<T, MapError>
    where
        T: From<u8>,
    {
        Ok(T::from(self.read(addr)?))
    }

    pub fn sprite(&self, index: usize) -> Result<Sprite, MapError> {
        Sprite::from_shadow_oam(self, index)
    }

    pub fn sprites(&self) -> Result<Vec<Sprite>, MapError> {
        (0..SHADOW_OAM_ENTRIES).map(|index| self.sprite(index)).collect()
    }

    pub fn bubble(&self, index: usize) -> Result<BubblePosition, MapError> {
        let corner = BubbleCorner::of(index)?;

        Ok(BubblePosition {
            x: self.read(corner.x)?,
            y: self.read(corner.y)?,
        })
    }

    pub fn bubbles(&self) -> Result<Vec<BubblePosition>, MapError> {
        (0..BUBBLE_COUNT).map(|index| self.bubble(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bubble::BUBBLE_TOP_LEFT;
    use crate::memory::SPRITE_RAM;

    fn dump_with_bubbles() -> Vec<u8> {
        let mut memory = vec![0u8; RAM_SIZE];
        for (i, corner) in BUBBLE_TOP_LEFT.iter().enumerate() {
            memory[corner.y.value() as usize] = 0x10 + i as u8;
            memory[corner.x.value() as usize] = 0x80 + i as u8;
        }
        memory
    }

    #[test]
    fn short_dump_is_rejected() {
        let err = RamSnapshot::from_bytes(vec![0; 0x0317]).err().unwrap();
        assert!(matches!(
            err,
            MapError::DumpTooSmall {
                len: 0x0317,
                required: 0x0318
            }
        ));
    }

    #[test]
    fn partial_dump_covering_shadow_oam_is_accepted() {
        let ram = RamSnapshot::from_bytes(vec![0; 0x0318]).unwrap();
        assert_eq!(ram.memory.len(), 0x0318);
        assert!(matches!(
            ram.read(Address(0x0400)),
            Err(MapError::UnmappedAddress { address: 0x0400 })
        ));
    }

    #[test]
    fn oversized_dump_is_truncated() {
        let ram = RamSnapshot::from_bytes(vec![0; 0x2000]).unwrap();
        assert_eq!(ram.memory.len(), RAM_SIZE);
    }

    #[test]
    fn reads_follow_ram_mirroring() {
        let mut memory = vec![0u8; RAM_SIZE];
        memory[0x0305] = 0xab;
        let ram = RamSnapshot::from_bytes(memory).unwrap();

        assert_eq!(ram.read(Address(0x0305)).unwrap(), 0xab);
        assert_eq!(ram.read(Address(0x0b05)).unwrap(), 0xab);
        assert_eq!(ram.read(Address(0x1b05)).unwrap(), 0xab);
        assert!(matches!(
            ram.read(Address(0x2000)),
            Err(MapError::UnmappedAddress { address: 0x2000 })
        ));
    }

    #[test]
    fn bubble_positions_come_from_corner_addresses() {
        let ram = RamSnapshot::from_bytes(dump_with_bubbles()).unwrap();
        let bubbles = ram.bubbles().unwrap();

        assert_eq!(bubbles.len(), BUBBLE_COUNT);
        for (i, bubble) in bubbles.iter().enumerate() {
            assert_eq!(*bubble, BubblePosition { x: 0x80 + i as u8, y: 0x10 + i as u8 });
        }
        assert!(ram.bubble(BUBBLE_COUNT).is_err());
    }

    #[test]
    fn bubbles_match_their_sprite_entries() {
        let ram = RamSnapshot::from_bytes(dump_with_bubbles()).unwrap();
        let sprites = ram.sprites().unwrap();

        for (sprite, bubble) in sprites.iter().zip(ram.bubbles().unwrap()) {
            assert_eq!(sprite.x, bubble.x);
            assert_eq!(sprite.y, bubble.y);
        }
        assert_eq!(ram.read(SPRITE_RAM).unwrap(), 0x10);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RamSnapshot::load("/nonexistent/ram.bin").err().unwrap();
        assert!(err.to_string().contains("/nonexistent/ram.bin"));
    }
}
