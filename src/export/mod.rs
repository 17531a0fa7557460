//! Binary export formats for the target display pipeline.
//!
//! Two streams are produced, both headerless:
//!
//! - **Tile stream** (`.bin`): tiles concatenated tile-row-major, each
//!   tile's rows top-to-bottom, no padding between tiles.
//! - **Palette stream** (`.pal`): two bytes per color with 4-bit channels,
//!   `(g4 << 4) | b4` then `r4`.
//!
//! Write failures surface immediately; a partially written stream is
//! invalid and the caller is expected to discard it.

pub mod palette;
pub mod tiles;

pub use palette::{encode_palette, write_palette};
pub use tiles::write_tiles;

use thiserror::Error;

/// Common error type for export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error while writing a stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
