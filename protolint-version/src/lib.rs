//! # protolint-version
//!
//! Derives the release version from the nearest git tag and writes it into the
//! package manifest before publishing, so the installer downloads the matching
//! release assets.
//!
//! ```bash
//! # Stamp package.json from `git describe --tags`
//! protolint-version --manifest bdist/js/package.json
//!
//! # Use an explicit tag
//! protolint-version --tag v0.50.2 --dry-run
//! ```

/// Command-line interface definitions
pub mod cli;

/// Error types and error handling utilities
pub mod error;

/// Package manifest rewriting
pub mod manifest;

/// Tag discovery and version coercion
pub mod version;

use crate::cli::Args;
use crate::error::Result;

/// Resolve the version and, unless this is a dry run, stamp it into the manifest
pub fn run(args: &Args) -> Result<String> {
    let described = match &args.tag {
        Some(tag) => tag.clone(),
        None => version::describe_tag(&args.repo)?,
    };
    tracing::debug!("Describing {} gave {}", args.repo.display(), described);

    let version = version::coerce_version(&described).inspect_err(|e| {
        tracing::error!("{}", e);
    })?;
    tracing::info!("Preparing to publish {}", version);

    if args.dry_run {
        println!("{version}");
        return Ok(version);
    }

    manifest::stamp_manifest(&args.manifest, &version)?;
    tracing::info!(
        "Successfully written version {} to {}",
        version,
        args.manifest.display()
    );
    Ok(version)
}
