//! Toolchain bootstrap and build orchestration for the Bitnet node
//!
//! Two independent operations:
//! * [`prepare_environment`] resolves the host platform, makes sure its
//!   package manager is present and installs the Go and C toolchains.
//! * [`build`] clears the Go build cache and builds the `bitnet` binary.
//!
//! All external processes run through a [`CommandRunner`].

mod build;
mod deps;
mod deps_check;
mod error;
mod platform;
mod progress;
mod runner;

// Re-export public types
pub use build::{build, BuildConfig, BuildOutcome, DEFAULT_DRIVER, DEFAULT_TARGET};
pub use deps::{
    ensure_package_manager, install_package, install_toolchain, InstallReport, PackageManager,
    PackageRequest,
};
pub use deps_check::{check_toolchain, print_toolchain_status, Tool, TOOLS};
pub use error::{BuildError, SetupError};
pub use platform::{host_identifier, resolve_platform, Platform};
pub use progress::{ProgressCallback, ProgressReporter};
pub use runner::{CommandLine, CommandOutcome, CommandRunner, DryRunRunner, SystemRunner};

/// Installs the build toolchain for the host described by `host_id`
///
/// # Arguments
/// * `host_id` - Host identifier such as `linux`, `darwin` or `win32`
///
/// # Returns
/// * `Ok(report)` with the per-package results; failed packages are not an error
/// * `Err(SetupError)` if the platform is unsupported or the package manager
///   could not be bootstrapped
pub fn prepare_environment(
    host_id: &str,
    runner: &mut dyn CommandRunner,
    reporter: &ProgressReporter,
) -> Result<InstallReport, SetupError> {
    let platform = resolve_platform(host_id);
    log::info!("Host identifier {:?} resolved to {}", host_id, platform);

    let result = install_toolchain(platform, runner, reporter);
    if matches!(result, Err(SetupError::UnsupportedPlatform)) {
        reporter.report("Unsupported operating system.");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::capture;
    use crate::runner::fake::ScriptedRunner;

    #[test]
    fn test_unsupported_host_reports_and_fails() {
        let mut runner = ScriptedRunner::new();
        let (reporter, lines) = capture::reporter();

        let result = prepare_environment("freebsd13", &mut runner, &reporter);

        assert!(matches!(result, Err(SetupError::UnsupportedPlatform)));
        assert_eq!(*lines.borrow(), vec!["Unsupported operating system."]);
        assert!(runner.calls.is_empty());
    }

    #[test]
    fn test_linux_host_installs_golang_then_gcc() {
        let mut runner = ScriptedRunner::new();
        let (reporter, lines) = capture::reporter();

        let report = prepare_environment("linux", &mut runner, &reporter).unwrap();

        assert_eq!(report.manager, PackageManager::Apt);
        assert_eq!(
            *lines.borrow(),
            vec!["Attempting to install golang...", "Attempting to install gcc..."]
        );
    }
}
