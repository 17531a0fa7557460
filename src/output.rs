//! Binary output and file path generation.

use std::io;
use std::path::{Path, PathBuf};

/// Write bytes to a file, creating parent directories if needed.
pub fn write_binary(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)
}

/// Generate the output path for an export stream.
///
/// With `-o output` the argument is used directly (a trailing `/` or an
/// existing directory means `dir/{input_stem}.{ext}`); otherwise the output
/// lands next to the input as `{input_stem}.{ext}`.
pub fn generate_output_path(input: &Path, extension: &str, output_arg: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    match output_arg {
        Some(output) => {
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(format!("{}.{}", stem, extension))
            } else {
                output.to_path_buf()
            }
        }
        None => {
            let parent = input.parent().unwrap_or(Path::new(""));
            if parent.as_os_str().is_empty() {
                PathBuf::from(format!("{}.{}", stem, extension))
            } else {
                parent.join(format!("{}.{}", stem, extension))
            }
        }
    }
}
