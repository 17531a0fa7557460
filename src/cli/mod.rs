//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod export;
mod info;
mod validate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config;
use crate::models::{ColorDepth, TileGeometry};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Tilepak - pack indexed sprites into retro-console tile and palette binaries
#[derive(Parser)]
#[command(name = "tpak")]
#[command(about = "Tilepak - pack indexed sprite definitions into tile (.bin) and palette (.pal) binaries")]
#[command(version)]
pub struct Cli {
    /// Path to tilepak.toml (default: discovered by walking up from cwd)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a sprite's pixels into a tile binary stream
    Tiles {
        /// Input sprite definition (.json)
        input: PathBuf,

        /// Output file or directory (default: {input_stem}.bin next to input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Tile geometry (default: from tilepak.toml, else 8x8)
        #[arg(short, long)]
        geometry: Option<TileGeometry>,

        /// Color depth in bits per pixel (default: from tilepak.toml, else 4)
        #[arg(short, long)]
        depth: Option<ColorDepth>,
    },
    /// Export a sprite's palette as a reduced-precision color binary
    Palette {
        /// Input sprite definition (.json)
        input: PathBuf,

        /// Output file or directory (default: {input_stem}.pal next to input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Color depth in bits per pixel (default: from tilepak.toml, else 4)
        #[arg(short, long)]
        depth: Option<ColorDepth>,

        /// Export the palette as-is, skipping quantize/merge/compact
        #[arg(long)]
        raw: bool,
    },
    /// Export both the tile stream and the palette in one run
    Export {
        /// Input sprite definition (.json)
        input: PathBuf,

        /// Output directory (default: [project.out] from tilepak.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Tile geometry (default: from tilepak.toml, else 8x8)
        #[arg(short, long)]
        geometry: Option<TileGeometry>,

        /// Color depth in bits per pixel (default: from tilepak.toml, else 4)
        #[arg(short, long)]
        depth: Option<ColorDepth>,

        /// Export the palette as-is, skipping quantize/merge/compact
        #[arg(long)]
        raw: bool,
    },
    /// Check a sprite against the export preconditions without writing output
    Validate {
        /// Input sprite definition (.json)
        input: PathBuf,

        /// Tile geometry to validate against
        #[arg(short, long)]
        geometry: Option<TileGeometry>,

        /// Color depth to validate against
        #[arg(short, long)]
        depth: Option<ColorDepth>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show sprite and export stream information
    Info {
        /// Input sprite definition (.json)
        input: PathBuf,

        /// Tile geometry for size calculations
        #[arg(short, long)]
        geometry: Option<TileGeometry>,

        /// Color depth for size calculations
        #[arg(short, long)]
        depth: Option<ColorDepth>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse arguments, load configuration, and dispatch to the command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let defaults = config.defaults;

    match cli.command {
        Commands::Tiles { input, output, geometry, depth } => export::run_tiles(
            &input,
            output.as_deref(),
            geometry.unwrap_or(defaults.geometry),
            depth.unwrap_or(defaults.depth),
        ),
        Commands::Palette { input, output, depth, raw } => export::run_palette(
            &input,
            output.as_deref(),
            depth.unwrap_or(defaults.depth),
            raw || !defaults.normalize,
        ),
        Commands::Export { input, output, geometry, depth, raw } => export::run_export(
            &input,
            output.as_deref().unwrap_or(&config.project.out),
            geometry.unwrap_or(defaults.geometry),
            depth.unwrap_or(defaults.depth),
            raw || !defaults.normalize,
        ),
        Commands::Validate { input, geometry, depth, json } => validate::run_validate(
            &input,
            geometry.unwrap_or(defaults.geometry),
            depth.unwrap_or(defaults.depth),
            json,
        ),
        Commands::Info { input, geometry, depth, json } => info::run_info(
            &input,
            geometry.unwrap_or(defaults.geometry),
            depth.unwrap_or(defaults.depth),
            json,
        ),
    }
}
