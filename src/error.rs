use snafu::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum MapError {
    #[snafu(display("Failed to read RAM dump {}", path.display()))]
    Io { source: std::io::Error, path: PathBuf },
    #[snafu(display("RAM dump is {} bytes, at least {} required", len, required))]
    DumpTooSmall { len: usize, required: usize },
    #[snafu(display("Address ${:04x} is not backed by the RAM dump", address))]
    UnmappedAddress { address: u16 },
    #[snafu(display("Invalid bubble index: {}", index))]
    InvalidBubbleIndex { index: usize },
    #[snafu(display("Invalid sprite index: {}", index))]
    InvalidSpriteIndex { index: usize },
}
