//! Palette compaction: drop unreferenced slots and renumber densely.

use std::collections::BTreeMap;

use crate::models::{Palette, PixelGrid, Rgb};

/// Remove palette slots no pixel references, renumbering the rest densely
/// in their original ascending order.
///
/// Rewrites every pixel through the new numbering and returns the compacted
/// palette; the caller installs it in place of the old one. Must run after
/// remapping, which is what leaves duplicate slots unreferenced.
pub fn compact_palette(image: &mut impl PixelGrid, palette: &Palette) -> Palette {
    // Pass 1: which indices are actually referenced
    let mut referenced = vec![false; palette.len().max(1)];
    for y in 0..image.height() {
        for x in 0..image.width() {
            let index = image.index_at(x, y) as usize;
            if index < referenced.len() {
                referenced[index] = true;
            }
        }
    }

    // Dense renumbering in ascending original order
    let mut mapping = BTreeMap::new();
    let mut next = 0usize;
    for (old, &used) in referenced.iter().enumerate().take(palette.len()) {
        if used {
            mapping.insert(old, next);
            next += 1;
        }
    }

    // Pass 2: rewrite pixels through the mapping
    for y in 0..image.height() {
        for x in 0..image.width() {
            let old = image.index_at(x, y) as usize;
            if let Some(&new) = mapping.get(&old) {
                if new != old {
                    image.set_index(x, y, new as u8);
                }
            }
        }
    }

    // Copy surviving colors into their new positions
    let mut colors = vec![Rgb::default(); next];
    for (&old, &new) in &mapping {
        if let Some(color) = palette.color(old) {
            colors[new] = color;
        }
    }
    Palette::new(colors)
}
