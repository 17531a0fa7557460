//! Structural validation for sprite export.
//!
//! Gatekeeps that a sprite satisfies the preconditions the tile encoder
//! relies on. Checks run in a fixed order and stop at the first violation;
//! validation has no side effects.

use thiserror::Error;

use crate::models::{ColorDepth, ColorMode, PixelGrid, Sprite, TileGeometry};

/// A violated export precondition. At most one is reported per run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// Not exactly one drawable cel
    #[error("sprite must have exactly one cel, found {0}")]
    Structure(usize),
    /// Pixels are not stored as palette indices
    #[error("sprite must use indexed color mode, found {0}")]
    ColorMode(ColorMode),
    /// Image dimensions don't divide evenly into tiles
    #[error("sprite size {width}x{height} is not a multiple of tile size {geometry}")]
    Geometry { width: u32, height: u32, geometry: TileGeometry },
    /// A pixel index exceeds the color ceiling for the selected depth
    #[error("pixel index {index} at ({x}, {y}) exceeds the {max} color limit for {depth}")]
    Range { x: u32, y: u32, index: u8, max: usize, depth: ColorDepth },
}

/// Check that `sprite` can be encoded at the given geometry and depth.
///
/// Checks, in order, short-circuiting on the first failure:
/// 1. exactly one drawable cel,
/// 2. indexed color mode,
/// 3. width/height divisible by tile width/height,
/// 4. every pixel index below the depth's color ceiling.
pub fn validate(
    sprite: &Sprite,
    geometry: TileGeometry,
    depth: ColorDepth,
) -> Result<(), ValidateError> {
    if sprite.cels.len() != 1 {
        return Err(ValidateError::Structure(sprite.cels.len()));
    }

    if sprite.mode != ColorMode::Indexed {
        return Err(ValidateError::ColorMode(sprite.mode));
    }

    let (width, height) = (sprite.image.width(), sprite.image.height());
    if width % geometry.tile_width() != 0 || height % geometry.tile_height() != 0 {
        return Err(ValidateError::Geometry { width, height, geometry });
    }

    let max = depth.max_colors();
    for y in 0..height {
        for x in 0..width {
            let index = sprite.image.index_at(x, y);
            if index as usize >= max {
                return Err(ValidateError::Range { x, y, index, max, depth });
            }
        }
    }

    Ok(())
}
