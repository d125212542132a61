pub mod bubble;
pub mod error;
pub mod joypad;
pub mod map;
pub mod memory;
pub mod snapshot;
pub mod video;
