//! Tilepak - Library for packing indexed pixel art into retro-console binaries
//!
//! This library provides functionality to:
//! - Parse JSON sprite definitions (palette + pixel index grid)
//! - Validate sprites against tile geometry and color depth preconditions
//! - Encode pixels into a packed fixed-bit-depth tile stream
//! - Normalize palettes (4-bit quantization, duplicate merge, compaction)
//! - Serialize tile and palette binaries for the target display pipeline

pub mod cli;
pub mod color;
pub mod config;
pub mod encode;
pub mod export;
pub mod models;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod validate;
