//! Export command implementations (tiles, palette, export).

use std::path::Path;
use std::process::ExitCode;

use crate::encode::encode_tiles;
use crate::export::{encode_palette, write_tiles};
use crate::models::{ColorDepth, Sprite, TileGeometry};
use crate::normalize::normalize;
use crate::output::{generate_output_path, write_binary};
use crate::parser::parse_sprite_file;
use crate::validate::validate;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the tiles command
pub fn run_tiles(
    input: &Path,
    output: Option<&Path>,
    geometry: TileGeometry,
    depth: ColorDepth,
) -> ExitCode {
    let sprite = match load_sprite(input) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let bytes = match encode_sprite_tiles(&sprite, geometry, depth) {
        Ok(b) => b,
        Err(code) => return code,
    };

    let path = generate_output_path(input, "bin", output);
    if let Err(e) = write_binary(&path, &bytes) {
        eprintln!("Error: cannot write '{}': {}", path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Wrote {} bytes to {}", bytes.len(), path.display());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the palette command
pub fn run_palette(
    input: &Path,
    output: Option<&Path>,
    depth: ColorDepth,
    raw: bool,
) -> ExitCode {
    let mut sprite = match load_sprite(input) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let bytes = match export_sprite_palette(&mut sprite, depth, raw) {
        Ok(b) => b,
        Err(code) => return code,
    };

    let path = generate_output_path(input, "pal", output);
    if let Err(e) = write_binary(&path, &bytes) {
        eprintln!("Error: cannot write '{}': {}", path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Wrote {} colors to {}", bytes.len() / 2, path.display());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the export command (tile stream + palette)
pub fn run_export(
    input: &Path,
    out_dir: &Path,
    geometry: TileGeometry,
    depth: ColorDepth,
    raw: bool,
) -> ExitCode {
    let mut sprite = match load_sprite(input) {
        Ok(s) => s,
        Err(code) => return code,
    };

    // Validate before normalization so a rejected export leaves the sprite
    // untouched; normalize before encoding so the tile stream carries the
    // rewritten indices.
    if let Err(e) = validate(&sprite, geometry, depth) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }
    let palette_bytes = match export_sprite_palette(&mut sprite, depth, raw) {
        Ok(b) => b,
        Err(code) => return code,
    };
    let tile_bytes = match encode_sprite_tiles(&sprite, geometry, depth) {
        Ok(b) => b,
        Err(code) => return code,
    };

    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let bin_path = out_dir.join(format!("{}.bin", stem));
    let pal_path = out_dir.join(format!("{}.pal", stem));
    for (path, bytes) in [(&bin_path, &tile_bytes), (&pal_path, &palette_bytes)] {
        if let Err(e) = write_binary(path, bytes) {
            eprintln!("Error: cannot write '{}': {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    }
    println!(
        "Wrote {} ({} bytes) and {} ({} colors)",
        bin_path.display(),
        tile_bytes.len(),
        pal_path.display(),
        palette_bytes.len() / 2
    );
    ExitCode::from(EXIT_SUCCESS)
}

/// Parse a sprite file, reporting errors to stderr.
pub(super) fn load_sprite(input: &Path) -> Result<Sprite, ExitCode> {
    parse_sprite_file(input).map_err(|e| {
        eprintln!("Error: {}: {}", input.display(), e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Validate and encode the sprite's tile stream.
fn encode_sprite_tiles(
    sprite: &Sprite,
    geometry: TileGeometry,
    depth: ColorDepth,
) -> Result<Vec<u8>, ExitCode> {
    validate(sprite, geometry, depth).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })?;
    // validate() guarantees exactly one cel
    let region = sprite.cel().ok_or_else(|| ExitCode::from(EXIT_ERROR))?;
    let tiles = encode_tiles(&sprite.image, region, geometry, depth);
    let mut bytes = Vec::new();
    write_tiles(&mut bytes, &tiles).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })?;
    Ok(bytes)
}

/// Normalize (unless raw) and serialize the sprite's palette.
fn export_sprite_palette(
    sprite: &mut Sprite,
    depth: ColorDepth,
    raw: bool,
) -> Result<Vec<u8>, ExitCode> {
    if !raw {
        match normalize(sprite) {
            Ok(report) => {
                if report.merged > 0 || report.removed > 0 {
                    eprintln!(
                        "Normalized palette: merged {} color(s), removed {} slot(s), {} remain",
                        report.merged, report.removed, report.palette_len
                    );
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return Err(ExitCode::from(EXIT_ERROR));
            }
        }
    }
    match &sprite.palette {
        Some(palette) => Ok(encode_palette(palette, depth)),
        None => {
            eprintln!("Error: sprite '{}' has no palette", sprite.name);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}
