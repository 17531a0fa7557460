//! Configuration schema for `tilepak.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{ColorDepth, TileGeometry};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TilepakConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Project-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Project name (informational)
    #[serde(default)]
    pub name: String,
    /// Output directory for export streams
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { name: String::new(), out: default_out() }
    }
}

fn default_out() -> PathBuf {
    PathBuf::from("build")
}

/// Default export parameters, overridable per-invocation by CLI flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Tile geometry ("8x8", "16x16", "8x16", "16x8")
    #[serde(default)]
    pub geometry: TileGeometry,
    /// Color depth in bits per pixel ("1", "2", "4", "8")
    #[serde(default)]
    pub depth: ColorDepth,
    /// Normalize the palette before exporting it
    #[serde(default = "default_true")]
    pub normalize: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            geometry: TileGeometry::default(),
            depth: ColorDepth::default(),
            normalize: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = TilepakConfig::default();
        assert_eq!(config.project.out, PathBuf::from("build"));
        assert_eq!(config.defaults.geometry, TileGeometry::Square8);
        assert_eq!(config.defaults.depth, ColorDepth::Bpp4);
        assert!(config.defaults.normalize);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[project]
name = "my-game"
out = "dist"

[defaults]
geometry = "16x16"
depth = "2"
normalize = false
"#;
        let config: TilepakConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.project.name, "my-game");
        assert_eq!(config.project.out, PathBuf::from("dist"));
        assert_eq!(config.defaults.geometry, TileGeometry::Square16);
        assert_eq!(config.defaults.depth, ColorDepth::Bpp2);
        assert!(!config.defaults.normalize);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config: TilepakConfig = toml::from_str("[project]\nname = \"x\"").unwrap();
        assert_eq!(config.defaults.geometry, TileGeometry::Square8);
        assert!(config.defaults.normalize);
    }
}
