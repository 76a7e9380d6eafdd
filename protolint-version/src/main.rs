use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use protolint_version::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match protolint_version::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to stamp release version: {}", e);
            ExitCode::FAILURE
        }
    }
}
