//! Tile stream serialization.

use std::io::Write;

use crate::encode::Tile;

use super::ExportError;

/// Write encoded tiles to a binary sink, tile-row-major, no padding.
pub fn write_tiles<W: Write>(sink: &mut W, tiles: &[Tile]) -> Result<(), ExportError> {
    for tile in tiles {
        sink.write_all(tile)?;
    }
    Ok(())
}
