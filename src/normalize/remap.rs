//! Pixel remapping through duplicate-color representatives.

use crate::models::PixelGrid;

use super::dedup::DuplicateMap;

/// Build a flat remap table from a duplicate map.
///
/// `table[i]` is the representative index for `i`; indices outside any
/// duplicate group map to themselves.
pub fn build_remap_table(palette_len: usize, dups: &DuplicateMap) -> Vec<usize> {
    let mut table: Vec<usize> = (0..palette_len).collect();
    for (rep, absorbed) in dups.groups() {
        for &i in absorbed {
            table[i] = rep;
        }
    }
    table
}

/// Rewrite every pixel index to its duplicate-free representative, in place.
///
/// Palette entries are left untouched; duplicate slots stay allocated but
/// unreferenced until compaction removes them.
pub fn remap_pixels(image: &mut impl PixelGrid, palette_len: usize, dups: &DuplicateMap) {
    if dups.is_empty() {
        return;
    }
    let table = build_remap_table(palette_len, dups);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let index = image.index_at(x, y) as usize;
            if index < table.len() && table[index] != index {
                image.set_index(x, y, table[index] as u8);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IndexedImage, Palette, Rgb};
    use crate::normalize::dedup::detect_duplicates;

    #[test]
    fn test_build_remap_table_identity_without_duplicates() {
        let palette = Palette::new(vec![Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)]);
        let dups = detect_duplicates(&palette);
        assert_eq!(build_remap_table(palette.len(), &dups), vec![0, 1]);
    }

    #[test]
    fn test_build_remap_table_maps_to_representative() {
        let a = Rgb::new(3, 3, 3);
        let palette = Palette::new(vec![a, Rgb::new(0, 0, 0), a, a]);
        let dups = detect_duplicates(&palette);
        assert_eq!(build_remap_table(palette.len(), &dups), vec![0, 1, 0, 0]);
    }

    #[test]
    fn test_remap_pixels_rewrites_duplicates_only() {
        let a = Rgb::new(3, 3, 3);
        let palette = Palette::new(vec![a, Rgb::new(0, 0, 0), a]);
        let dups = detect_duplicates(&palette);

        let mut image = IndexedImage::new(2, 2);
        image.set_index(0, 0, 2); // duplicate of 0
        image.set_index(1, 0, 1); // unique, stays
        remap_pixels(&mut image, palette.len(), &dups);

        assert_eq!(image.index_at(0, 0), 0);
        assert_eq!(image.index_at(1, 0), 1);
        assert_eq!(image.index_at(0, 1), 0);
    }

    #[test]
    fn test_remap_pixels_noop_without_duplicates() {
        let palette = Palette::new(vec![Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)]);
        let dups = detect_duplicates(&palette);
        let mut image = IndexedImage::new(2, 1);
        image.set_index(1, 0, 1);
        let before = image.clone();
        remap_pixels(&mut image, palette.len(), &dups);
        assert_eq!(image, before);
    }
}
