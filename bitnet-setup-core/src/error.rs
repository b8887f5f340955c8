//! Error types for environment preparation and builds

use crate::deps::PackageManager;
use crate::runner::{CommandLine, CommandOutcome};
use thiserror::Error;

/// Fatal failures of the preparation step
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Unsupported operating system.")]
    UnsupportedPlatform,

    #[error("Failed to install {manager}: {outcome}")]
    BootstrapFailed {
        manager: PackageManager,
        outcome: String,
    },
}

/// Failures of the build step that are not turned into a handled exit
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to start `{command}`")]
    CacheClean {
        command: CommandLine,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` returned non-zero {outcome}")]
    CacheCleanExit {
        command: CommandLine,
        outcome: CommandOutcome,
    },

    #[error("Failed to start `{command}`")]
    Build {
        command: CommandLine,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// Status the process should exit with: the child's own code when it has one
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::CacheCleanExit { outcome, .. } => match outcome.code {
                Some(code) if code != 0 => code,
                _ => 1,
            },
            BuildError::CacheClean { .. } | BuildError::Build { .. } => 1,
        }
    }
}
