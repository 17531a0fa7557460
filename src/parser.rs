//! Sprite document parsing.
//!
//! Turns a JSON sprite document into a runtime [`Sprite`], checking the
//! document's own consistency (row counts, row lengths, palette hex syntax,
//! cel bounds). Structural export preconditions are checked separately by
//! [`validate`](crate::validate::validate).

use std::path::Path;

use thiserror::Error;

use crate::color::{parse_color, ColorError};
use crate::models::{IndexedImage, Palette, Region, Sprite, SpriteDoc};

/// Error type for sprite document parsing
#[derive(Debug, Error)]
pub enum ParseError {
    /// File could not be read
    #[error("cannot read sprite file: {0}")]
    Io(#[from] std::io::Error),
    /// Document is not valid JSON or has the wrong shape
    #[error("invalid sprite document: {0}")]
    Json(#[from] serde_json::Error),
    /// A palette entry is not a valid hex color
    #[error("palette entry {index} ('{value}'): {source}")]
    Color { index: usize, value: String, source: ColorError },
    /// Declared size has a zero dimension
    #[error("sprite size must be non-zero, got {0}x{1}")]
    EmptySize(u32, u32),
    /// Number of pixel rows doesn't match the declared height
    #[error("expected {expected} pixel rows, found {found}")]
    RowCount { expected: u32, found: usize },
    /// A pixel row doesn't match the declared width
    #[error("pixel row {row} has {found} entries, expected {expected}")]
    RowLength { row: usize, expected: u32, found: usize },
    /// A cel extends past the image bounds
    #[error("cel {index} ({x}, {y}, {width}, {height}) exceeds image bounds")]
    CelOutOfBounds { index: usize, x: u32, y: u32, width: u32, height: u32 },
}

/// Parse a sprite document from a JSON string.
pub fn parse_sprite_str(s: &str) -> Result<Sprite, ParseError> {
    let doc: SpriteDoc = serde_json::from_str(s)?;
    sprite_from_doc(doc)
}

/// Parse a sprite document from a file.
pub fn parse_sprite_file(path: &Path) -> Result<Sprite, ParseError> {
    let contents = std::fs::read_to_string(path)?;
    parse_sprite_str(&contents)
}

/// Check a document's internal consistency and build the runtime sprite.
pub fn sprite_from_doc(doc: SpriteDoc) -> Result<Sprite, ParseError> {
    let [width, height] = doc.size;
    if width == 0 || height == 0 {
        return Err(ParseError::EmptySize(width, height));
    }

    if doc.pixels.len() != height as usize {
        return Err(ParseError::RowCount { expected: height, found: doc.pixels.len() });
    }
    for (row, pixels) in doc.pixels.iter().enumerate() {
        if pixels.len() != width as usize {
            return Err(ParseError::RowLength { row, expected: width, found: pixels.len() });
        }
    }

    let palette = match &doc.palette {
        Some(entries) => {
            let mut colors = Vec::with_capacity(entries.len());
            for (index, value) in entries.iter().enumerate() {
                let color = parse_color(value).map_err(|source| ParseError::Color {
                    index,
                    value: value.clone(),
                    source,
                })?;
                colors.push(color);
            }
            Some(Palette::new(colors))
        }
        None => None,
    };

    let cels = match &doc.cels {
        Some(bounds) => {
            let mut cels = Vec::with_capacity(bounds.len());
            for (index, &[x, y, w, h]) in bounds.iter().enumerate() {
                let x_end = x.checked_add(w);
                let y_end = y.checked_add(h);
                if x_end.map_or(true, |end| end > width) || y_end.map_or(true, |end| end > height) {
                    return Err(ParseError::CelOutOfBounds {
                        index,
                        x,
                        y,
                        width: w,
                        height: h,
                    });
                }
                cels.push(Region::new(x, y, w, h));
            }
            cels
        }
        None => vec![Region::covering(width, height)],
    };

    Ok(Sprite {
        name: doc.name,
        mode: doc.mode,
        palette,
        cels,
        image: IndexedImage::from_rows(width, height, &doc.pixels),
    })
}
