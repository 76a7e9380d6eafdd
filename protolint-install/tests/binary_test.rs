//! Exit status of the built `protolint-install` binary against a local release host.

mod common;

use common::{release_archive, MockReleaseHost, MockResponse};
use protolint_install::extractor::ExtractionManifest;
use protolint_install::platform::PlatformKey;
use protolint_install::release::ReleaseCoordinates;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;
use tokio::process::Command;

const VERSION: &str = "1.2.3";

fn asset_path() -> String {
    let coordinates = ReleaseCoordinates::new("http://unused", "", Some(VERSION)).unwrap();
    format!(
        "/releases/v{VERSION}/{}",
        coordinates.asset_name(PlatformKey::current())
    )
}

async fn run_installer(host: &str, workdir: &Path, version: &str, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_protolint-install"))
        .current_dir(workdir)
        .args(["--release-version", version, "--mirror-host", host])
        .args(["--mirror-path", "releases", "--no-retry", "--timeout", "10"])
        .arg("--config")
        .arg(workdir.join("none.toml"))
        .args(extra)
        .env_remove("PROTOLINT_PROXY")
        .env_remove("HTTPS_PROXY")
        .env_remove("HTTP_PROXY")
        .env_remove("PROTOLINT_INSTALL_STRICT")
        .env_remove("PROTOLINT_MIRROR_USERNAME")
        .env_remove("PROTOLINT_MIRROR_PASSWORD")
        .output()
        .await
        .expect("Failed to execute protolint-install")
}

#[tokio::test]
async fn test_binary_installs_and_exits_zero() {
    let manifest = ExtractionManifest::for_platform(PlatformKey::current());
    let archive = release_archive(&[
        (manifest.primary.as_str(), "primary"),
        (manifest.plugin.as_str(), "plugin"),
    ]);
    let server = MockReleaseHost::start(vec![(asset_path(), MockResponse::Archive(archive))]).await;
    let workdir = TempDir::new().unwrap();

    let output = run_installer(&server.address(), workdir.path(), VERSION, &[]).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(workdir.path().join("bin").join(&manifest.primary).is_file());
    assert!(workdir.path().join("bin").join(&manifest.plugin).is_file());
}

#[tokio::test]
async fn test_binary_not_found_exits_zero() {
    let server = MockReleaseHost::start(vec![]).await;
    let workdir = TempDir::new().unwrap();

    let output = run_installer(&server.address(), workdir.path(), VERSION, &[]).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(!workdir.path().join("bin").exists());
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_binary_missing_entry_exits_zero() {
    let manifest = ExtractionManifest::for_platform(PlatformKey::current());
    let archive = release_archive(&[(manifest.primary.as_str(), "only one")]);
    let server = MockReleaseHost::start(vec![(asset_path(), MockResponse::Archive(archive))]).await;
    let workdir = TempDir::new().unwrap();

    let output = run_installer(&server.address(), workdir.path(), VERSION, &[]).await;

    assert_eq!(output.status.code(), Some(0));
}

#[tokio::test]
async fn test_binary_not_found_in_strict_mode_exits_one() {
    let server = MockReleaseHost::start(vec![]).await;
    let workdir = TempDir::new().unwrap();

    let output = run_installer(&server.address(), workdir.path(), VERSION, &["--strict"]).await;

    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test]
async fn test_binary_malformed_version_exits_one() {
    let server = MockReleaseHost::start(vec![]).await;
    let workdir = TempDir::new().unwrap();

    let output = run_installer(&server.address(), workdir.path(), "undefined", &[]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(server.requests().is_empty());
}
