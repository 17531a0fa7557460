//! Info command implementation.

use std::path::Path;
use std::process::ExitCode;

use crate::encode::encoded_len;
use crate::models::{ColorDepth, PixelGrid, TileGeometry};

use super::export::load_sprite;
use super::EXIT_SUCCESS;

/// Execute the info command
pub fn run_info(input: &Path, geometry: TileGeometry, depth: ColorDepth, json: bool) -> ExitCode {
    let sprite = match load_sprite(input) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let (width, height) = (sprite.image.width(), sprite.image.height());
    let tiles_across = width / geometry.tile_width();
    let tiles_down = height / geometry.tile_height();
    let bytes_per_tile =
        geometry.tile_height() as usize * depth.bytes_per_tile_row(geometry.tile_width());
    let stream_len = encoded_len(width, height, geometry, depth);
    let palette_len = sprite.palette.as_ref().map(|p| p.len()).unwrap_or(0);
    let palette_bytes = 2 * depth.max_colors().min(palette_len);

    if json {
        let output = serde_json::json!({
            "name": sprite.name,
            "size": [width, height],
            "mode": sprite.mode.to_string(),
            "cels": sprite.cels.len(),
            "palette_len": palette_len,
            "geometry": geometry.to_string(),
            "depth_bpp": depth.bits_per_pixel(),
            "tiles": [tiles_across, tiles_down],
            "bytes_per_tile": bytes_per_tile,
            "tile_stream_bytes": stream_len,
            "palette_stream_bytes": palette_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&output).expect("JSON value serialization"));
    } else {
        println!("{} ({}x{}, {})", sprite.name, width, height, sprite.mode);
        println!("  palette: {} color(s)", palette_len);
        println!("  cels: {}", sprite.cels.len());
        println!("  {} tiles at {}, {}: {}x{}", tiles_across * tiles_down, geometry, depth, tiles_across, tiles_down);
        println!("  tile stream: {} bytes ({} per tile)", stream_len, bytes_per_tile);
        println!("  palette stream: {} bytes", palette_bytes);
    }
    ExitCode::from(EXIT_SUCCESS)
}
