use anyhow::Result;
use bitnet_setup_core::{build, BuildConfig, ProgressReporter, DEFAULT_DRIVER, DEFAULT_TARGET};
use clap::Parser;

mod cli;

/// Cleans the Go build cache and builds the bitnet binary
#[derive(Parser, Debug)]
#[command(name = "bitnet-build")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Builds the bitnet binary with build/ci.go", long_about = None)]
struct Args {
    /// Build driver executable
    #[arg(long = "driver", env = "BITNET_BUILD_DRIVER", default_value = DEFAULT_DRIVER)]
    driver: String,

    /// Target under ./cmd/ to build
    #[arg(long = "target", env = "BITNET_BUILD_TARGET", default_value = DEFAULT_TARGET)]
    target: String,

    #[command(flatten)]
    common: cli::CommonArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.common.init_logging();

    let config = BuildConfig {
        driver: args.driver,
        target: args.target,
    };
    let mut runner = args.common.runner();
    let reporter = ProgressReporter::stdout();

    match build(&config, runner.as_mut(), &reporter) {
        Ok(outcome) => {
            let code = outcome.exit_code();
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        // Cache-clean and spawn failures exit with the child's own status
        Err(e) => {
            let code = e.exit_code();
            log::error!("{:#}", anyhow::Error::from(e));
            std::process::exit(code);
        }
    }
}
