//! Palette normalization pipeline.
//!
//! Runs quantize -> detect duplicates -> remap pixels -> compact palette,
//! in that order. The ordering is a hard invariant: remapping is what
//! leaves duplicate slots unreferenced, and compaction is what removes
//! them, so compacting first would retain duplicate-but-still-referenced
//! slots.
//!
//! The sprite's image and palette are mutated in place. There is no
//! rollback: callers needing transactional behavior snapshot the sprite
//! before invoking [`normalize`].

pub mod compact;
pub mod dedup;
pub mod quantize;
pub mod remap;

pub use compact::compact_palette;
pub use dedup::{detect_duplicates, DuplicateMap};
pub use quantize::quantize_palette;
pub use remap::{build_remap_table, remap_pixels};

use thiserror::Error;

use crate::models::Sprite;

/// Error type for palette normalization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The sprite carries no palette to normalize
    #[error("sprite '{0}' has no palette")]
    MissingPalette(String),
}

/// Summary of what a normalization run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Indices merged into a representative by quantization
    pub merged: usize,
    /// Palette slots dropped by compaction
    pub removed: usize,
    /// Palette length after compaction
    pub palette_len: usize,
}

/// Quantize the sprite's palette to 4-bit precision, merge colors the
/// quantization collapsed, and compact away the freed slots.
///
/// After a successful run every pixel index is below the new palette
/// length and no two palette colors are channel-wise identical.
pub fn normalize(sprite: &mut Sprite) -> Result<NormalizeReport, NormalizeError> {
    let palette = sprite
        .palette
        .as_mut()
        .ok_or_else(|| NormalizeError::MissingPalette(sprite.name.clone()))?;

    quantize_palette(palette);
    let dups = detect_duplicates(palette);
    remap_pixels(&mut sprite.image, palette.len(), &dups);

    let before = palette.len();
    let compacted = compact_palette(&mut sprite.image, palette);
    let report = NormalizeReport {
        merged: dups.merged_count(),
        removed: before - compacted.len(),
        palette_len: compacted.len(),
    };
    *palette = compacted;
    Ok(report)
}
