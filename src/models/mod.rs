//! Data model types shared across the crate.

pub mod geometry;
pub mod image;
pub mod palette;
pub mod sprite;

pub use geometry::{ColorDepth, Region, TileGeometry};
pub use image::{IndexedImage, PixelGrid};
pub use palette::{Palette, Rgb};
pub use sprite::{ColorMode, Sprite, SpriteDoc};
