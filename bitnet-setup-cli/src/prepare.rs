use anyhow::Result;
use bitnet_setup_core::{host_identifier, prepare_environment, ProgressReporter};
use clap::Parser;

mod cli;

/// Installs the Go and C toolchains needed to build Bitnet
#[derive(Parser, Debug)]
#[command(name = "bitnet-prepare")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Installs the toolchain needed to build Bitnet (administrative access required)", long_about = None)]
struct Args {
    /// Host identifier to use instead of the running OS (linux, darwin, win32)
    #[arg(long = "platform", env = "BITNET_HOST_PLATFORM", value_name = "ID")]
    platform: Option<String>,

    /// Check toolchain status without installing
    #[arg(long = "check")]
    check: bool,

    #[command(flatten)]
    common: cli::CommonArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.common.init_logging();

    if args.check {
        bitnet_setup_core::print_toolchain_status();
        return Ok(());
    }

    let host_id = args.platform.as_deref().unwrap_or(host_identifier());
    let mut runner = args.common.runner();
    let reporter = ProgressReporter::stdout();

    match prepare_environment(host_id, runner.as_mut(), &reporter) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
