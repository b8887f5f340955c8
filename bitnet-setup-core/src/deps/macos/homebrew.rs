//! Homebrew package manager integration for macOS

use crate::deps::constants;
use crate::runner::CommandLine;

/// Toolchain packages: Go and GCC
pub const PACKAGES: &[&str] = &["go", "gcc"];

/// `which brew` succeeds when Homebrew is on the search path
pub fn presence_check() -> CommandLine {
    CommandLine::new("which", ["brew"])
}

/// Fetches and runs the official Homebrew install script
///
/// The outer shell performs the `$(curl ...)` substitution so the inner
/// bash receives the script text itself.
pub fn bootstrap_command() -> CommandLine {
    CommandLine::new(
        "/bin/bash",
        [
            "-c".to_string(),
            format!(
                "/bin/bash -c \"$(curl -fsSL {})\"",
                constants::HOMEBREW_INSTALL
            ),
        ],
    )
}

/// `brew install <package>`
pub fn install_command(package: &str) -> CommandLine {
    CommandLine::new("brew", ["install", package])
}
