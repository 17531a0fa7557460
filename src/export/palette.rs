//! Palette stream serialization.

use std::io::Write;

use crate::color::channel_to_4bit;
use crate::models::{ColorDepth, Palette};

use super::ExportError;

/// Serialize the first `min(max_colors, palette.len())` colors to the
/// target's two-byte color format.
///
/// Per color: `byte0 = (g4 << 4) | b4`, `byte1 = r4` with the low nibble
/// of byte1 zero. Red sits alone in its own byte while green and blue
/// share one; the asymmetry is what the target hardware expects and must
/// not be normalized away.
pub fn encode_palette(palette: &Palette, depth: ColorDepth) -> Vec<u8> {
    let color_count = depth.max_colors().min(palette.len());
    let mut out = Vec::with_capacity(color_count * 2);
    for i in 0..color_count {
        if let Some(color) = palette.color(i) {
            let r4 = channel_to_4bit(color.r);
            let g4 = channel_to_4bit(color.g);
            let b4 = channel_to_4bit(color.b);
            out.push((g4 << 4) | b4);
            out.push(r4);
        }
    }
    out
}

/// Encode and write a palette to a binary sink.
pub fn write_palette<W: Write>(
    sink: &mut W,
    palette: &Palette,
    depth: ColorDepth,
) -> Result<(), ExportError> {
    sink.write_all(&encode_palette(palette, depth))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;

    #[test]
    fn test_encode_palette_pure_red() {
        let palette = Palette::new(vec![Rgb::new(255, 0, 0)]);
        let bytes = encode_palette(&palette, ColorDepth::Bpp4);
        assert_eq!(bytes, vec![0x00, 0x0F]);
    }

    #[test]
    fn test_encode_palette_channel_layout() {
        // g4=15 -> 0xF0, b4=15 -> 0x0F
        let palette = Palette::new(vec![Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]);
        let bytes = encode_palette(&palette, ColorDepth::Bpp4);
        assert_eq!(bytes, vec![0xF0, 0x00, 0x0F, 0x00]);
    }

    #[test]
    fn test_encode_palette_white() {
        let palette = Palette::new(vec![Rgb::new(255, 255, 255)]);
        assert_eq!(encode_palette(&palette, ColorDepth::Bpp4), vec![0xFF, 0x0F]);
    }

    #[test]
    fn test_encode_palette_truncates_at_depth_ceiling() {
        let colors: Vec<Rgb> = (0..10).map(|i| Rgb::new(i * 20, 0, 0)).collect();
        let palette = Palette::new(colors);
        // 2 bpp caps at 4 colors -> 8 bytes
        assert_eq!(encode_palette(&palette, ColorDepth::Bpp2).len(), 8);
    }

    #[test]
    fn test_encode_palette_short_palette() {
        let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
        // 8 bpp allows 256 but only 2 exist -> 4 bytes
        assert_eq!(encode_palette(&palette, ColorDepth::Bpp8).len(), 4);
    }

    #[test]
    fn test_write_palette_to_sink() {
        let palette = Palette::new(vec![Rgb::new(255, 0, 0)]);
        let mut out = Vec::new();
        write_palette(&mut out, &palette, ColorDepth::Bpp1).unwrap();
        assert_eq!(out, vec![0x00, 0x0F]);
    }
}
