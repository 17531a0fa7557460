//! Tile encoder: packs pixel indices into fixed-bit-depth tile bytes.
//!
//! Tiles are produced row-major over the tile grid; within a tile, pixel
//! rows top-to-bottom and columns left-to-right. Pixels pack
//! most-significant-first into a byte accumulator, and every tile row
//! flushes at its last column, so a tile row always occupies
//! `ceil(tile_width * bpp / 8)` bytes regardless of what came before it.

use crate::models::{ColorDepth, PixelGrid, Region, TileGeometry};

/// One encoded tile: its rows' bytes concatenated top-to-bottom.
pub type Tile = Vec<u8>;

/// Encode `image` into tiles at the given geometry and depth.
///
/// Pixels outside `region` (but inside the tile grid) encode as index 0.
/// Indices at or above the depth's color ceiling are reduced modulo
/// `max_colors`; inputs that passed [`validate`](crate::validate::validate)
/// never take that branch.
///
/// The image is not mutated.
pub fn encode_tiles(
    image: &impl PixelGrid,
    region: Region,
    geometry: TileGeometry,
    depth: ColorDepth,
) -> Vec<Tile> {
    let tile_w = geometry.tile_width();
    let tile_h = geometry.tile_height();
    let bpp = depth.bits_per_pixel();
    let max = depth.max_colors();

    let tiles_across = image.width() / tile_w;
    let tiles_down = image.height() / tile_h;
    let tile_len = tile_h as usize * depth.bytes_per_tile_row(tile_w);

    let mut tiles = Vec::with_capacity((tiles_across * tiles_down) as usize);
    for tile_row in 0..tiles_down {
        for tile_col in 0..tiles_across {
            let mut tile = Vec::with_capacity(tile_len);
            for row in 0..tile_h {
                let y = tile_row * tile_h + row;
                let mut acc: u16 = 0;
                let mut held: u32 = 0;
                for col in 0..tile_w {
                    let x = tile_col * tile_w + col;
                    let value = if region.contains(x, y) {
                        (image.index_at(x, y) as usize % max) as u16
                    } else {
                        0
                    };
                    acc = (acc << bpp) | value;
                    held += bpp;
                    // Flush on a full byte, and unconditionally at the last
                    // column: a tile row never carries bits past its boundary.
                    if held >= 8 || col == tile_w - 1 {
                        tile.push(acc as u8);
                        acc = 0;
                        held %= 8;
                    }
                }
            }
            tiles.push(tile);
        }
    }
    tiles
}

/// Total byte length of the encoded stream for an image of the given size.
pub fn encoded_len(width: u32, height: u32, geometry: TileGeometry, depth: ColorDepth) -> usize {
    let tiles_across = (width / geometry.tile_width()) as usize;
    let tiles_down = (height / geometry.tile_height()) as usize;
    tiles_across
        * tiles_down
        * geometry.tile_height() as usize
        * depth.bytes_per_tile_row(geometry.tile_width())
}
