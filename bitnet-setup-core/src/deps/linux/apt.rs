//! APT package manager integration (Debian, Ubuntu)

use crate::runner::CommandLine;

/// Toolchain packages: Go and the GNU C compiler
pub const PACKAGES: &[&str] = &["golang", "gcc"];

/// `sudo apt install <package>`
///
/// apt is assumed to be present and the user to hold sudo rights,
/// so there is no presence check or bootstrap.
pub fn install_command(package: &str) -> CommandLine {
    CommandLine::new("sudo", ["apt", "install", package])
}
