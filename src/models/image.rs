//! Pixel grid access for indexed images.
//!
//! The host application's live image is modeled behind the [`PixelGrid`]
//! trait; [`IndexedImage`] is the in-memory implementation used by the CLI
//! and tests.

/// Read/write access to per-pixel palette indices over a rectangular grid.
///
/// Coordinates are bounds-checked by the caller; implementations may panic
/// on out-of-bounds access.
pub trait PixelGrid {
    /// Grid width in pixels.
    fn width(&self) -> u32;

    /// Grid height in pixels.
    fn height(&self) -> u32;

    /// Palette index stored at (x, y).
    fn index_at(&self, x: u32, y: u32) -> u8;

    /// Overwrite the palette index at (x, y).
    fn set_index(&mut self, x: u32, y: u32, index: u8);
}

/// An in-memory indexed image: a dense row-major buffer of palette indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl IndexedImage {
    /// Create a zero-filled image (every pixel at palette index 0).
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, data: vec![0; width as usize * height as usize] }
    }

    /// Build an image from row-major rows of indices.
    ///
    /// Rows must all have length `width` and there must be `height` of them;
    /// the parser enforces this before constructing the image.
    pub fn from_rows(width: u32, height: u32, rows: &[Vec<u8>]) -> Self {
        let mut image = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &index) in row.iter().enumerate() {
                image.set_index(x as u32, y as u32, index);
            }
        }
        image
    }

    /// Raw row-major index buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl PixelGrid for IndexedImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn index_at(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    fn set_index(&mut self, x: u32, y: u32, index: u8) {
        self.data[y as usize * self.width as usize + x as usize] = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_is_zero_filled() {
        let image = IndexedImage::new(4, 3);
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert!(image.as_slice().iter().all(|&i| i == 0));
    }

    #[test]
    fn test_set_and_get_index() {
        let mut image = IndexedImage::new(4, 4);
        image.set_index(2, 1, 7);
        assert_eq!(image.index_at(2, 1), 7);
        assert_eq!(image.index_at(1, 2), 0);
    }

    #[test]
    fn test_from_rows_row_major() {
        let rows = vec![vec![1, 2], vec![3, 4]];
        let image = IndexedImage::from_rows(2, 2, &rows);
        assert_eq!(image.index_at(0, 0), 1);
        assert_eq!(image.index_at(1, 0), 2);
        assert_eq!(image.index_at(0, 1), 3);
        assert_eq!(image.index_at(1, 1), 4);
        assert_eq!(image.as_slice(), &[1, 2, 3, 4]);
    }
}
