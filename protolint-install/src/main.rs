use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use protolint_install::cli::Args;
use protolint_install::installer::Installer;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG wins; otherwise show progress messages
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Failed to install protolint: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    if args.verbose {
        tracing::info!("Running protolint-install with verbose output");
    }

    let installer = Installer::new(args)?;
    let outcome = installer.run().await?;

    Ok(installer.exit_policy().exit_code(&outcome))
}
