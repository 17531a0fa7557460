//! Tile geometry, color depth, and cel region types.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Tile dimensions supported by the target display pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum TileGeometry {
    /// 8x8 tiles
    #[default]
    #[serde(rename = "8x8")]
    #[value(name = "8x8")]
    Square8,
    /// 16x16 tiles
    #[serde(rename = "16x16")]
    #[value(name = "16x16")]
    Square16,
    /// 8x16 tiles (tall)
    #[serde(rename = "8x16")]
    #[value(name = "8x16")]
    Tall8x16,
    /// 16x8 tiles (wide)
    #[serde(rename = "16x8")]
    #[value(name = "16x8")]
    Wide16x8,
}

impl TileGeometry {
    /// Tile width in pixels.
    pub fn tile_width(&self) -> u32 {
        match self {
            TileGeometry::Square8 | TileGeometry::Tall8x16 => 8,
            TileGeometry::Square16 | TileGeometry::Wide16x8 => 16,
        }
    }

    /// Tile height in pixels.
    pub fn tile_height(&self) -> u32 {
        match self {
            TileGeometry::Square8 | TileGeometry::Wide16x8 => 8,
            TileGeometry::Square16 | TileGeometry::Tall8x16 => 16,
        }
    }
}

impl std::fmt::Display for TileGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.tile_width(), self.tile_height())
    }
}

/// Bits used to encode one pixel's palette index.
///
/// The depth caps the palette at `2^bits` colors (2, 4, 16, 256).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ColorDepth {
    /// 1 bit per pixel, 2 colors
    #[serde(rename = "1")]
    #[value(name = "1")]
    Bpp1,
    /// 2 bits per pixel, 4 colors
    #[serde(rename = "2")]
    #[value(name = "2")]
    Bpp2,
    /// 4 bits per pixel, 16 colors
    #[default]
    #[serde(rename = "4")]
    #[value(name = "4")]
    Bpp4,
    /// 8 bits per pixel, 256 colors
    #[serde(rename = "8")]
    #[value(name = "8")]
    Bpp8,
}

impl ColorDepth {
    /// Bits per pixel.
    pub fn bits_per_pixel(&self) -> u32 {
        match self {
            ColorDepth::Bpp1 => 1,
            ColorDepth::Bpp2 => 2,
            ColorDepth::Bpp4 => 4,
            ColorDepth::Bpp8 => 8,
        }
    }

    /// Maximum palette size representable at this depth.
    pub fn max_colors(&self) -> usize {
        1 << self.bits_per_pixel()
    }

    /// Bytes emitted per tile row of `tile_width` pixels.
    pub fn bytes_per_tile_row(&self, tile_width: u32) -> usize {
        (tile_width as usize * self.bits_per_pixel() as usize).div_ceil(8)
    }
}

impl std::fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bpp", self.bits_per_pixel())
    }
}

/// Axis-aligned rectangle identifying the pixels of a cel that hold data.
///
/// Pixels inside the tile grid but outside the region encode as index 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Region covering an entire image.
    pub fn covering(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Whether the image-space point (x, y) falls inside this region.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}
