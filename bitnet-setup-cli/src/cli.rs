use bitnet_setup_core::{CommandRunner, DryRunRunner, SystemRunner};
use clap::Args;

/// Flags shared by both entry points
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Run in dry-run mode (print commands without running them)
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CommonArgs {
    /// Initialize logger with appropriate level based on verbose flag
    pub fn init_logging(&self) {
        if std::env::var("RUST_LOG").is_err() {
            if self.verbose {
                std::env::set_var("RUST_LOG", "debug");
            } else {
                std::env::set_var("RUST_LOG", "info");
            }
        }
        env_logger::init();

        if self.dry_run {
            log::info!("Running in DRY-RUN mode - no commands will be executed");
        }
    }

    pub fn runner(&self) -> Box<dyn CommandRunner> {
        if self.dry_run {
            Box::new(DryRunRunner)
        } else {
            Box::new(SystemRunner)
        }
    }
}
