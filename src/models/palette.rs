//! Palette and color types.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// An ordered sequence of colors; position = palette index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at palette index `i`, or None past the end.
    pub fn color(&self, i: usize) -> Option<Rgb> {
        self.colors.get(i).copied()
    }

    /// Overwrite the color at palette index `i`.
    ///
    /// Out-of-range indices are ignored; the pipeline only writes indices it
    /// previously read.
    pub fn set_color(&mut self, i: usize, color: Rgb) {
        if let Some(slot) = self.colors.get_mut(i) {
            *slot = color;
        }
    }

    /// Replace the entire color table, e.g. after compaction.
    pub fn replace(&mut self, colors: Vec<Rgb>) {
        self.colors = colors;
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }
}
