//! Bitnet build orchestration
//!
//! Clears the Go build cache, then runs `build/ci.go install` for one target.
//! The two steps fail differently: a failed cache clean surfaces as a
//! [`BuildError`] carrying the child's status, while a failed build is a
//! handled [`BuildOutcome::Failed`] with its own message and exit code 1.

use crate::error::BuildError;
use crate::progress::ProgressReporter;
use crate::runner::{CommandLine, CommandRunner};

pub const DEFAULT_DRIVER: &str = "go";
pub const DEFAULT_TARGET: &str = "bitnet";

/// Build driver and target for a build run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Build driver executable
    pub driver: String,
    /// Name of the directory under `./cmd/` to build
    pub target: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            driver: DEFAULT_DRIVER.to_string(),
            target: DEFAULT_TARGET.to_string(),
        }
    }
}

impl BuildConfig {
    /// `<driver> clean -cache`
    pub fn clean_command(&self) -> CommandLine {
        CommandLine::new(self.driver.as_str(), ["clean", "-cache"])
    }

    /// `<driver> run build/ci.go install ./cmd/<target>`
    pub fn build_command(&self) -> CommandLine {
        CommandLine::new(
            self.driver.as_str(),
            [
                "run".to_string(),
                "build/ci.go".to_string(),
                "install".to_string(),
                format!("./cmd/{}", self.target),
            ],
        )
    }
}

/// Result of a build that got past the cache clean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failed,
}

impl BuildOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildOutcome::Success => 0,
            BuildOutcome::Failed => 1,
        }
    }
}

/// Cleans the build cache and builds the configured target
pub fn build(
    config: &BuildConfig,
    runner: &mut dyn CommandRunner,
    reporter: &ProgressReporter,
) -> Result<BuildOutcome, BuildError> {
    reporter.report("Starting to build Bitnet...");
    clean_cache(config, runner, reporter)?;

    let command = config.build_command();
    let outcome = runner.run(&command).map_err(|source| BuildError::Build {
        command: command.clone(),
        source,
    })?;

    if !outcome.success() {
        log::error!("`{}` returned {}", command, outcome);
        reporter.report("Error: Script failed to build Bitnet.");
        return Ok(BuildOutcome::Failed);
    }

    reporter.report("Build finished successfully.");
    Ok(BuildOutcome::Success)
}

fn clean_cache(
    config: &BuildConfig,
    runner: &mut dyn CommandRunner,
    reporter: &ProgressReporter,
) -> Result<(), BuildError> {
    reporter.report("Cleaning build cache...");

    let command = config.clean_command();
    let outcome = runner.run(&command).map_err(|source| BuildError::CacheClean {
        command: command.clone(),
        source,
    })?;

    if !outcome.success() {
        return Err(BuildError::CacheCleanExit { command, outcome });
    }
    Ok(())
}
