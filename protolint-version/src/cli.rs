use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "protolint-version",
    version,
    about = "Write the git-derived release version into package metadata",
    long_about = None
)]
pub struct Args {
    /// Repository to describe
    #[clap(long, default_value = ".")]
    pub repo: PathBuf,

    /// Use this tag text instead of running git describe
    #[clap(short, long, env = "PROTOLINT_RELEASE_TAG")]
    pub tag: Option<String>,

    /// JSON package manifest to update
    #[clap(long, default_value = "package.json")]
    pub manifest: PathBuf,

    /// Print the resulting version without writing the manifest
    #[clap(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[clap(long)]
    pub verbose: bool,
}
