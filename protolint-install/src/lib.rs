//! # protolint-install
//!
//! Fetches the prebuilt protolint executables for the running platform from a
//! release host and installs them into a local directory.
//!
//! ## Overview
//!
//! `protolint-install` is meant to run as a package manager hook. It resolves
//! the release asset URL from the platform, the requested version and optional
//! mirror settings, downloads the `.tar.gz` archive through an optional proxy,
//! and extracts `protolint` and `protoc-gen-protolint` into the install
//! directory.
//!
//! ## Features
//!
//! - Platform and architecture detection mapped to release asset names
//! - Mirror host, path and basic-auth credentials
//! - `PROTOLINT_PROXY` override with `HTTPS_PROXY`/`HTTP_PROXY` fallback
//! - Bounded redirects and retries for transient network errors
//! - Graceful exit on download failure, with an opt-in strict mode
//!
//! ## Usage
//!
//! ```bash
//! # Install the version recorded by the package manager
//! npm_package_version=0.50.2 protolint-install
//!
//! # Install from a mirror
//! PROTOLINT_MIRROR_HOST=https://mirror.example.com \
//! PROTOLINT_MIRROR_REMOTE_PATH=protolint/releases \
//!     protolint-install --release-version 0.50.2
//! ```
//!
//! ## Configuration
//!
//! Defaults can be specified in `.config/protolint-install.toml` in the
//! working directory or `~/.config/protolint-install.toml`.

/// Command-line interface and environment configuration
pub mod cli;

/// Configuration file handling
pub mod config;

/// Error types and error handling utilities
pub mod error;

/// Selective extraction of the executables from the release archive
pub mod extractor;

/// HTTP download of release archives
pub mod fetcher;

/// Install orchestration and exit policy
pub mod installer;

/// Platform naming used by release assets
pub mod platform;

/// Proxy selection
pub mod proxy;

/// Release coordinates and download URL construction
pub mod release;

/// Network retry logic with exponential backoff
pub mod retry;

pub mod shim;
