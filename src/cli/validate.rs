//! Validate command implementation.

use std::path::Path;
use std::process::ExitCode;

use crate::models::{ColorDepth, TileGeometry};
use crate::validate::validate;

use super::export::load_sprite;
use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the validate command
pub fn run_validate(
    input: &Path,
    geometry: TileGeometry,
    depth: ColorDepth,
    json: bool,
) -> ExitCode {
    let sprite = match load_sprite(input) {
        Ok(s) => s,
        Err(code) => return code,
    };

    match validate(&sprite, geometry, depth) {
        Ok(()) => {
            if json {
                let output = serde_json::json!({ "valid": true });
                println!("{}", output);
            } else {
                println!("{}: OK ({}, {})", input.display(), geometry, depth);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            if json {
                let output = serde_json::json!({
                    "valid": false,
                    "error": e.to_string(),
                });
                println!("{}", output);
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}
