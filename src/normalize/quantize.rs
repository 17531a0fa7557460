//! Palette color quantization: 8-bit channels reduced to 4-bit precision.

use crate::color::channel_to_4bit;
use crate::models::{Palette, Rgb};

/// Round every palette color to 4-bit channel precision, in place.
///
/// Each channel becomes `floor(c * 15 / 255) * 17`, the exact 4-bit value
/// re-expanded to full range (0 stays 0, 255 stays 255). Lossy: previously
/// distinct colors may collapse onto the same value, which is what lets the
/// duplicate detector merge them afterwards.
pub fn quantize_palette(palette: &mut Palette) {
    for i in 0..palette.len() {
        if let Some(color) = palette.color(i) {
            palette.set_color(i, quantize_color(color));
        }
    }
}

fn quantize_color(color: Rgb) -> Rgb {
    Rgb::new(
        channel_to_4bit(color.r) * 17,
        channel_to_4bit(color.g) * 17,
        channel_to_4bit(color.b) * 17,
    )
}
