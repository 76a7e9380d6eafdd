use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::fetcher::{Credentials, TransportConfig, MAX_REDIRECTS};
use crate::proxy::ProxySettings;
use crate::release::{ReleaseCoordinates, DEFAULT_HOST, DEFAULT_PATH_TEMPLATE};
use crate::retry::RetryConfig;

pub const DEFAULT_INSTALL_DIR: &str = "bin";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Every option can also come from the environment, which is how package
/// manager hooks configure the installer.
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "protolint-install",
    version,
    about = "Download and install prebuilt protolint executables",
    long_about = None
)]
pub struct Args {
    /// Release version to install (e.g., 0.50.2)
    #[clap(long, env = "npm_package_version")]
    pub release_version: Option<String>,

    /// Release host origin
    #[clap(long, env = "PROTOLINT_MIRROR_HOST", default_value = DEFAULT_HOST)]
    pub mirror_host: String,

    /// Path on the release host under which versioned releases live
    #[clap(long, env = "PROTOLINT_MIRROR_REMOTE_PATH", default_value = DEFAULT_PATH_TEMPLATE)]
    pub mirror_path: String,

    /// Basic-auth username for the mirror
    #[clap(long, env = "PROTOLINT_MIRROR_USERNAME")]
    pub mirror_username: Option<String>,

    /// Basic-auth password for the mirror
    #[clap(long, env = "PROTOLINT_MIRROR_PASSWORD", hide_env_values = true)]
    pub mirror_password: Option<String>,

    /// Proxy address, takes precedence over HTTPS_PROXY/HTTP_PROXY
    #[clap(long, env = "PROTOLINT_PROXY")]
    pub proxy: Option<String>,

    #[clap(long, env = "HTTPS_PROXY", hide = true)]
    pub https_proxy: Option<String>,

    #[clap(long, env = "HTTP_PROXY", hide = true)]
    pub http_proxy: Option<String>,

    /// Directory receiving the executables
    #[clap(short = 'd', long, default_value = DEFAULT_INSTALL_DIR)]
    pub install_dir: String,

    /// Overall download timeout in seconds
    #[clap(long)]
    pub timeout: Option<u64>,

    /// Maximum number of retries for transient network errors
    #[clap(long, default_value_t = 2)]
    pub max_retries: u32,

    /// Disable retries
    #[clap(long)]
    pub no_retry: bool,

    /// Exit non-zero when the download or extraction fails
    #[clap(
        long,
        env = "PROTOLINT_INSTALL_STRICT",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub strict: bool,

    /// Configuration file path
    #[clap(long, default_value = ".config/protolint-install.toml")]
    pub config: PathBuf,

    /// Enable verbose output
    #[clap(long)]
    pub verbose: bool,
}

impl Args {
    /// Release coordinates; fails when the version is missing or malformed
    pub fn coordinates(&self) -> Result<ReleaseCoordinates> {
        ReleaseCoordinates::new(
            &self.mirror_host,
            &self.mirror_path,
            self.release_version.as_deref(),
        )
    }

    pub fn proxy_settings(&self) -> ProxySettings {
        ProxySettings {
            explicit: self.proxy.clone(),
            https: self.https_proxy.clone(),
            http: self.http_proxy.clone(),
        }
    }

    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(
            self.mirror_username.as_deref(),
            self.mirror_password.as_deref(),
        )
    }

    pub fn retry_config(&self) -> RetryConfig {
        if self.no_retry {
            RetryConfig::disabled()
        } else {
            RetryConfig {
                max_retries: self.max_retries,
                ..Default::default()
            }
        }
    }

    /// Transport for this run; the proxy is resolved against the mirror host
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            max_redirects: MAX_REDIRECTS,
            proxy: self.proxy_settings().resolve(&self.mirror_host),
            basic_auth: self.credentials(),
            timeout: Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            retry: self.retry_config(),
        }
    }

    /// Get the installation directory as PathBuf, expanding ~
    pub fn install_dir(&self) -> PathBuf {
        let path = &self.install_dir;
        if path.starts_with('~') {
            if let Some(home) =
                directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
            {
                let rest = path.strip_prefix('~').unwrap_or(path);
                let rest = rest.strip_prefix('/').unwrap_or(rest);
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }
}
