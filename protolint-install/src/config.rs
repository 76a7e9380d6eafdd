use crate::error::{InstallError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DefaultConfig {
    #[serde(default = "default_install_dir")]
    pub install_dir: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub strict: bool,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            install_dir: default_install_dir(),
            timeout: default_timeout(),
            strict: false,
        }
    }
}

fn default_install_dir() -> String {
    crate::cli::DEFAULT_INSTALL_DIR.to_string()
}

fn default_timeout() -> u64 {
    crate::cli::DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Load configuration from file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| InstallError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Get the user-wide configuration file path
    pub fn user_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("protolint-install.toml"))
            .unwrap_or_else(|| PathBuf::from("~/.config/protolint-install.toml"))
    }

    /// Merge configuration with command line arguments
    pub fn merge_with_args(&self, args: &mut crate::cli::Args) {
        if args.install_dir == crate::cli::DEFAULT_INSTALL_DIR
            && self.default.install_dir != crate::cli::DEFAULT_INSTALL_DIR
        {
            args.install_dir = self.default.install_dir.clone();
        }

        if args.timeout.is_none() {
            args.timeout = Some(self.default.timeout);
        }

        if !args.strict && self.default.strict {
            args.strict = true;
        }
    }
}
