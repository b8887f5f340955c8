//! Per-package installation
//!
//! A failed package never aborts the run: it is reported and the next
//! package is attempted.

use super::{ensure_package_manager, PackageManager};
use crate::error::SetupError;
use crate::platform::Platform;
use crate::progress::ProgressReporter;
use crate::runner::{CommandLine, CommandRunner};

/// One package to install with an already-resolved manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageRequest<'a> {
    pub name: &'a str,
    pub manager: PackageManager,
}

impl<'a> PackageRequest<'a> {
    pub fn new(name: &'a str, manager: PackageManager) -> Self {
        Self { name, manager }
    }

    pub fn command(&self) -> CommandLine {
        self.manager.install_command(self.name)
    }
}

/// Outcome of installing a platform's toolchain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub manager: PackageManager,
    /// Package name and whether its install command succeeded, in install order
    pub results: Vec<(String, bool)>,
}

impl InstallReport {
    pub fn all_installed(&self) -> bool {
        self.results.iter().all(|(_, ok)| *ok)
    }

    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| name.as_str())
    }
}

/// Installs one package, returning whether the install command exited 0
pub fn install_package(
    name: &str,
    manager: PackageManager,
    runner: &mut dyn CommandRunner,
    reporter: &ProgressReporter,
) -> bool {
    let request = PackageRequest::new(name, manager);
    let command = request.command();

    reporter.report(&format!("Attempting to install {}...", name));

    let installed = match runner.run(&command) {
        Ok(outcome) if outcome.success() => true,
        Ok(outcome) => {
            log::warn!("`{}` returned {}", command, outcome);
            false
        }
        Err(e) => {
            log::warn!("Failed to execute `{}`: {}", command, e);
            false
        }
    };

    if installed {
        log::info!("{} installed with {}", name, manager);
    } else {
        reporter.report(&format!(
            "Failed to install {}. Please check your installation settings and permissions.",
            name
        ));
    }

    installed
}

/// Resolves the package manager once, then installs each toolchain package in order
pub fn install_toolchain(
    platform: Platform,
    runner: &mut dyn CommandRunner,
    reporter: &ProgressReporter,
) -> Result<InstallReport, SetupError> {
    let manager = ensure_package_manager(platform, runner, reporter)?;
    log::info!("Using {} on {}", manager, platform);

    let mut results = Vec::new();
    for package in manager.toolchain() {
        let ok = install_package(package, manager, runner, reporter);
        results.push((package.to_string(), ok));
    }

    Ok(InstallReport { manager, results })
}
