//! Tilepak - Command-line tool for packing indexed sprites into tile binaries

use std::process::ExitCode;

use tilepak::cli;

fn main() -> ExitCode {
    cli::run()
}
