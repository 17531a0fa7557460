//! Sprite document and runtime sprite model.
//!
//! A sprite arrives as a JSON document ([`SpriteDoc`]); the parser checks it
//! and builds the runtime [`Sprite`] that the validator, encoder, and
//! palette pipeline operate on.

use serde::{Deserialize, Serialize};

use super::geometry::Region;
use super::image::IndexedImage;
use super::palette::Palette;

/// How pixel data is stored in the source sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Pixels are palette indices
    #[default]
    Indexed,
    /// Pixels are direct RGB values
    Rgb,
    /// Pixels are gray levels
    Grayscale,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Indexed => write!(f, "indexed"),
            ColorMode::Rgb => write!(f, "rgb"),
            ColorMode::Grayscale => write!(f, "grayscale"),
        }
    }
}

/// Raw sprite document as it appears on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpriteDoc {
    #[serde(default)]
    pub name: String,
    /// Image size as [width, height]
    pub size: [u32; 2],
    #[serde(default)]
    pub mode: ColorMode,
    /// Palette colors as hex strings ("#RGB" or "#RRGGBB")
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub palette: Option<Vec<String>>,
    /// Drawable cel bounds as [x, y, width, height].
    /// Defaults to a single cel covering the whole image.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cels: Option<Vec<[u32; 4]>>,
    /// Row-major pixel index rows, `height` rows of `width` entries
    pub pixels: Vec<Vec<u8>>,
}

/// A parsed sprite ready for validation and export.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub mode: ColorMode,
    pub palette: Option<Palette>,
    pub cels: Vec<Region>,
    pub image: IndexedImage,
}

impl Sprite {
    /// The single drawable cel, when there is exactly one.
    pub fn cel(&self) -> Option<Region> {
        match self.cels.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}
