use std::fmt;

use crate::error::SetupError;
use crate::platform::Platform;
use crate::progress::ProgressReporter;
use crate::runner::{CommandLine, CommandRunner};

// Package-manager command vocabularies, compiled on every host so the
// per-platform branching can be exercised anywhere
mod linux;
mod macos;
mod windows;
mod installer;

pub use installer::{install_package, install_toolchain, InstallReport, PackageRequest};

// Constants for external URLs
mod constants {
    /// Package manager installation URLs
    pub const HOMEBREW_INSTALL: &str =
        "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";
    pub const CHOCOLATEY_INSTALL: &str = "https://chocolatey.org/install.ps1";
}

/// Package manager selected for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// `sudo apt`, assumed present on Linux
    Apt,
    Homebrew,
    Chocolatey,
}

impl PackageManager {
    /// Command used to check whether the manager is installed.
    /// `None` for managers that are assumed present.
    pub fn presence_check(&self) -> Option<CommandLine> {
        match self {
            PackageManager::Apt => None,
            PackageManager::Homebrew => Some(macos::homebrew::presence_check()),
            PackageManager::Chocolatey => Some(windows::chocolatey::presence_check()),
        }
    }

    /// Remote installer for the manager itself
    pub fn bootstrap_command(&self) -> Option<CommandLine> {
        match self {
            PackageManager::Apt => None,
            PackageManager::Homebrew => Some(macos::homebrew::bootstrap_command()),
            PackageManager::Chocolatey => Some(windows::chocolatey::bootstrap_command()),
        }
    }

    pub fn install_command(&self, package: &str) -> CommandLine {
        match self {
            PackageManager::Apt => linux::apt::install_command(package),
            PackageManager::Homebrew => macos::homebrew::install_command(package),
            PackageManager::Chocolatey => windows::chocolatey::install_command(package),
        }
    }

    /// Packages providing the Go runtime and a C compiler for this manager
    pub fn toolchain(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Apt => linux::apt::PACKAGES,
            PackageManager::Homebrew => macos::homebrew::PACKAGES,
            PackageManager::Chocolatey => windows::chocolatey::PACKAGES,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageManager::Apt => "apt",
            PackageManager::Homebrew => "Homebrew",
            PackageManager::Chocolatey => "Chocolatey",
        };
        f.write_str(name)
    }
}

/// Resolves the package manager for `platform`, bootstrapping it when missing
///
/// # Returns
/// * `Ok(manager)` once the manager is usable
/// * `Err(SetupError::UnsupportedPlatform)` for [`Platform::Other`]
/// * `Err(SetupError::BootstrapFailed)` if the remote installer failed
pub fn ensure_package_manager(
    platform: Platform,
    runner: &mut dyn CommandRunner,
    reporter: &ProgressReporter,
) -> Result<PackageManager, SetupError> {
    let manager = match platform {
        Platform::Linux => return Ok(PackageManager::Apt),
        Platform::MacOs => PackageManager::Homebrew,
        Platform::Windows => PackageManager::Chocolatey,
        Platform::Other => return Err(SetupError::UnsupportedPlatform),
    };

    if is_installed(manager, runner) {
        log::info!("{} already installed", manager);
        return Ok(manager);
    }

    bootstrap(manager, runner, reporter)?;
    Ok(manager)
}

/// Runs the presence check; a spawn failure counts as not installed
fn is_installed(manager: PackageManager, runner: &mut dyn CommandRunner) -> bool {
    let Some(check) = manager.presence_check() else {
        return true;
    };

    match runner.run(&check) {
        Ok(outcome) => {
            log::debug!("`{}` returned {}", check, outcome);
            outcome.success()
        }
        Err(e) => {
            log::debug!("`{}` could not be run: {}", check, e);
            false
        }
    }
}

fn bootstrap(
    manager: PackageManager,
    runner: &mut dyn CommandRunner,
    reporter: &ProgressReporter,
) -> Result<(), SetupError> {
    let Some(command) = manager.bootstrap_command() else {
        return Ok(());
    };

    reporter.report(&format!("Installing {}...", manager));

    let failure = match runner.run(&command) {
        Ok(outcome) if outcome.success() => {
            log::info!("{} installed", manager);
            return Ok(());
        }
        Ok(outcome) => outcome.to_string(),
        Err(e) => e.to_string(),
    };

    log::error!("`{}` failed: {}", command, failure);
    reporter.report(&format!("Failed to install {}.", manager));
    Err(SetupError::BootstrapFailed {
        manager,
        outcome: failure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::capture;
    use crate::runner::fake::{Reply, ScriptedRunner};

    #[test]
    fn test_linux_uses_apt_without_checks() {
        let mut runner = ScriptedRunner::new();
        let (reporter, lines) = capture::reporter();

        let manager = ensure_package_manager(Platform::Linux, &mut runner, &reporter).unwrap();

        assert_eq!(manager, PackageManager::Apt);
        assert!(runner.calls.is_empty());
        assert!(lines.borrow().is_empty());
    }

    #[test]
    fn test_other_platform_is_unsupported() {
        let mut runner = ScriptedRunner::new();
        let reporter = ProgressReporter::new(Some(Box::new(|_: &str| {})));

        let result = ensure_package_manager(Platform::Other, &mut runner, &reporter);

        assert!(matches!(result, Err(SetupError::UnsupportedPlatform)));
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn test_present_homebrew_is_not_bootstrapped() {
        let mut runner = ScriptedRunner::new().reply("which brew", Reply::Exit(0));
        let (reporter, lines) = capture::reporter();

        let manager = ensure_package_manager(Platform::MacOs, &mut runner, &reporter).unwrap();

        assert_eq!(manager, PackageManager::Homebrew);
        assert_eq!(runner.rendered(), vec!["which brew"]);
        assert!(lines.borrow().is_empty());
    }

    #[test]
    fn test_missing_homebrew_is_bootstrapped() {
        let mut runner = ScriptedRunner::new().reply("which brew", Reply::Exit(1));
        let (reporter, lines) = capture::reporter();

        let manager = ensure_package_manager(Platform::MacOs, &mut runner, &reporter).unwrap();

        assert_eq!(manager, PackageManager::Homebrew);
        assert_eq!(runner.calls.len(), 2);
        assert_eq!(runner.calls[1], macos::homebrew::bootstrap_command());
        assert_eq!(*lines.borrow(), vec!["Installing Homebrew..."]);
    }

    #[test]
    fn test_failed_homebrew_bootstrap_is_fatal() {
        let mut runner = ScriptedRunner::new()
            .reply("which brew", Reply::Exit(1))
            .reply("/bin/bash", Reply::Exit(1));
        let (reporter, lines) = capture::reporter();

        let result = ensure_package_manager(Platform::MacOs, &mut runner, &reporter);

        assert!(matches!(
            result,
            Err(SetupError::BootstrapFailed {
                manager: PackageManager::Homebrew,
                ..
            })
        ));
        assert_eq!(
            *lines.borrow(),
            vec!["Installing Homebrew...", "Failed to install Homebrew."]
        );
    }

    #[test]
    fn test_unrunnable_choco_check_triggers_bootstrap() {
        let mut runner = ScriptedRunner::new().reply("choco --version", Reply::SpawnError);
        let (reporter, lines) = capture::reporter();

        let manager = ensure_package_manager(Platform::Windows, &mut runner, &reporter).unwrap();

        assert_eq!(manager, PackageManager::Chocolatey);
        assert_eq!(runner.calls[0], windows::chocolatey::presence_check());
        assert_eq!(runner.calls[1], windows::chocolatey::bootstrap_command());
        assert_eq!(*lines.borrow(), vec!["Installing Chocolatey..."]);
    }

    #[test]
    fn test_chocolatey_bootstrap_spawn_failure_is_fatal() {
        let mut runner = ScriptedRunner::new()
            .reply("choco --version", Reply::Exit(1))
            .reply("powershell", Reply::SpawnError);
        let (reporter, lines) = capture::reporter();

        let result = ensure_package_manager(Platform::Windows, &mut runner, &reporter);

        assert!(matches!(result, Err(SetupError::BootstrapFailed { .. })));
        assert_eq!(lines.borrow().last().map(String::as_str), Some("Failed to install Chocolatey."));
    }

    #[test]
    fn test_toolchains_cover_go_and_a_c_compiler() {
        assert_eq!(PackageManager::Apt.toolchain(), &["golang", "gcc"]);
        assert_eq!(PackageManager::Homebrew.toolchain(), &["go", "gcc"]);
        assert_eq!(PackageManager::Chocolatey.toolchain(), &["golang", "mingw"]);
    }
}
