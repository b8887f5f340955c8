//! Chocolatey package manager integration

use crate::deps::constants;
use crate::runner::CommandLine;

/// Toolchain packages: Go and MinGW (which ships gcc)
pub const PACKAGES: &[&str] = &["golang", "mingw"];

/// `choco --version` succeeds when Chocolatey is installed
pub fn presence_check() -> CommandLine {
    CommandLine::new("choco", ["--version"])
}

/// Lifts the execution policy for this process, then runs the vendor install script
pub fn bootstrap_command() -> CommandLine {
    CommandLine::new(
        "powershell",
        [
            "Set-ExecutionPolicy",
            "Bypass",
            "-Scope",
            "Process",
            "-Force",
            ";",
            "iwr",
            constants::CHOCOLATEY_INSTALL,
            "-UseBasicParsing",
            "|",
            "iex",
        ],
    )
}

/// `choco install <package>`
pub fn install_command(package: &str) -> CommandLine {
    CommandLine::new("choco", ["install", package])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_check() {
        assert_eq!(presence_check().to_string(), "choco --version");
    }

    #[test]
    fn test_bootstrap_command_sequence() {
        assert_eq!(
            bootstrap_command().to_string(),
            "powershell Set-ExecutionPolicy Bypass -Scope Process -Force ; iwr https://chocolatey.org/install.ps1 -UseBasicParsing | iex"
        );
    }

    #[test]
    fn test_mingw_provides_gcc() {
        assert!(PACKAGES.contains(&"mingw"));
        assert_eq!(install_command("mingw").to_string(), "choco install mingw");
    }
}
