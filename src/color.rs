//! Hex color parsing and channel precision reduction.
//!
//! Sprite palettes use `#RGB` or `#RRGGBB` hex strings. This module also
//! holds the 8-bit to 4-bit channel reduction shared by the palette
//! quantizer and the palette exporter.

use thiserror::Error;

use crate::models::Rgb;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3 or 6 hex chars after #)
    #[error("invalid color length {0}, expected 3 or 6")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a hex color string (`#RGB` or `#RRGGBB`) into an [`Rgb`].
///
/// 3-digit colors double each digit (`#F00` -> red), matching CSS shorthand.
///
/// # Errors
///
/// Returns `ColorError` if the input is empty, unprefixed, the wrong
/// length, or contains non-hex characters.
pub fn parse_color(s: &str) -> Result<Rgb, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    match hex.len() {
        3 => {
            let mut chars = hex.chars();
            let r = parse_hex_digit(next_digit(&mut chars))? * 17;
            let g = parse_hex_digit(next_digit(&mut chars))? * 17;
            let b = parse_hex_digit(next_digit(&mut chars))? * 17;
            Ok(Rgb::new(r, g, b))
        }
        6 => {
            let mut chars = hex.chars();
            let r = parse_hex_pair(&mut chars)?;
            let g = parse_hex_pair(&mut chars)?;
            let b = parse_hex_pair(&mut chars)?;
            Ok(Rgb::new(r, g, b))
        }
        len => Err(ColorError::InvalidLength(len)),
    }
}

/// Reduce an 8-bit channel to its 4-bit value: `floor(c * 15 / 255)`.
///
/// Re-expansion back to 8 bits multiplies by 17 (the exact 4-bit replication
/// factor, so 0 maps to 0 and 15 maps to 255).
pub fn channel_to_4bit(c: u8) -> u8 {
    (c as u16 * 15 / 255) as u8
}

fn next_digit(chars: &mut std::str::Chars<'_>) -> char {
    // Length was checked by the caller
    chars.next().unwrap_or('\0')
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

/// Parse the next two hex digits to u8 (0-255)
fn parse_hex_pair(chars: &mut std::str::Chars<'_>) -> Result<u8, ColorError> {
    let high = parse_hex_digit(next_digit(chars))?;
    let low = parse_hex_digit(next_digit(chars))?;
    Ok(high * 16 + low)
}
