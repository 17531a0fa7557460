//! Configuration loading and discovery for `tilepak.toml`.

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::TilepakConfig;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("failed to parse tilepak.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Find `tilepak.toml` by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find `tilepak.toml` by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let config_path = current.join("tilepak.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a `tilepak.toml` file.
///
/// With an explicit path, the file must exist. Otherwise the file is
/// discovered via [`find_config`], and a default configuration is returned
/// when none is found.
pub fn load_config(path: Option<&Path>) -> Result<TilepakConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            let contents = std::fs::read_to_string(&p)?;
            Ok(toml::from_str(&contents)?)
        }
        None => Ok(TilepakConfig::default()),
    }
}
