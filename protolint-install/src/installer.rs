use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use tempfile::NamedTempFile;

use crate::cli::Args;
use crate::config::Config;
use crate::error::{InstallError, Result};
use crate::extractor::{ExtractionManifest, Extractor, InstallOutcome};
use crate::fetcher::Fetcher;
use crate::platform::PlatformKey;
use crate::release::ReleaseCoordinates;

/// Progress of a single install run
#[derive(Debug)]
pub enum InstallState {
    Start,
    Downloading,
    Extracting(NamedTempFile),
    Done(InstallOutcome),
}

/// How a finished run maps to a process exit code.
///
/// Expected download and extraction failures exit 0 unless strict mode is on,
/// so a failed fetch never blocks the package manager invoking the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPolicy {
    Lenient,
    Strict,
}

impl ExitPolicy {
    pub fn exit_code(self, outcome: &InstallOutcome) -> ExitCode {
        self.code(outcome).into()
    }

    pub fn code(self, outcome: &InstallOutcome) -> u8 {
        match (outcome.is_success(), self) {
            (true, _) | (false, ExitPolicy::Lenient) => 0,
            (false, ExitPolicy::Strict) => 1,
        }
    }
}

pub struct Installer {
    args: Args,
    coordinates: ReleaseCoordinates,
    platform: PlatformKey,
    fetcher: Fetcher,
}

impl Installer {
    /// Prepare a run. Errors here are setup errors and are fatal.
    pub fn new(args: Args) -> Result<Self> {
        Self::with_platform(args, PlatformKey::current().clone())
    }

    pub fn with_platform(mut args: Args, platform: PlatformKey) -> Result<Self> {
        let config_path = if args.config.exists() || args.config != default_config_path() {
            args.config.clone()
        } else {
            Config::user_path()
        };
        let config = Config::load(&config_path)?;
        config.merge_with_args(&mut args);

        let coordinates = args.coordinates()?;
        let fetcher = Fetcher::new(args.transport_config())?;

        Ok(Self {
            args,
            coordinates,
            platform,
            fetcher,
        })
    }

    pub fn exit_policy(&self) -> ExitPolicy {
        if self.args.strict {
            ExitPolicy::Strict
        } else {
            ExitPolicy::Lenient
        }
    }

    pub fn download_url(&self) -> String {
        self.coordinates.download_url(&self.platform)
    }

    pub fn install_dir(&self) -> PathBuf {
        self.args.install_dir()
    }

    /// Run download and extraction to completion.
    ///
    /// Expected failures come back as an unsuccessful outcome; `Err` is kept
    /// for conditions the installer cannot recover from.
    pub async fn run(&self) -> Result<InstallOutcome> {
        let url = self.download_url();
        let install_dir = self.install_dir();
        let manifest = ExtractionManifest::for_platform(&self.platform);

        let mut state = InstallState::Start;
        let outcome = loop {
            tracing::debug!("Install state: {:?}", state);
            state = match state {
                InstallState::Start => {
                    tracing::info!("Fetching protolint executable from {}", url);
                    InstallState::Downloading
                }
                InstallState::Downloading => match self.fetcher.fetch(&url).await {
                    Some(archive) => {
                        ensure_dir(&install_dir)?;
                        InstallState::Extracting(archive)
                    }
                    None => {
                        tracing::warn!("Could not find downloaded protolint archive.");
                        InstallState::Done(InstallOutcome::failed())
                    }
                },
                InstallState::Extracting(archive) => {
                    let outcome = Extractor::extract(archive.path(), &manifest, &install_dir).await;
                    InstallState::Done(outcome)
                }
                InstallState::Done(outcome) => break outcome,
            };
        };

        if outcome.is_success() {
            tracing::info!(
                "Protolint installed successfully. protolint: {}, protoc-gen-protolint: {}",
                path_text(&outcome.primary),
                path_text(&outcome.plugin)
            );
        } else {
            tracing::warn!("Failed to download protolint. See previous messages for details");
        }

        Ok(outcome)
    }
}

fn default_config_path() -> PathBuf {
    PathBuf::from(".config/protolint-install.toml")
}

/// Create the install directory if absent; existing contents are left alone
fn ensure_dir(dir: &std::path::Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| InstallError::InstallDir {
        path: dir.display().to_string(),
        source,
    })
}

fn path_text(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}
