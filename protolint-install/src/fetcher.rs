use crate::error::{InstallError, Result};
use crate::proxy::build_proxy;
use crate::retry::{with_retry, RetryConfig};
use futures_util::StreamExt;
use reqwest::{redirect, Client};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Redirects followed before a request is abandoned
pub const MAX_REDIRECTS: usize = 3;

/// Basic-auth credentials for an authenticated mirror
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Credentials are only sent when at least one part is non-empty.
    pub fn from_parts(username: Option<&str>, password: Option<&str>) -> Option<Self> {
        let username = username.unwrap_or_default();
        let password = password.unwrap_or_default();
        if username.is_empty() && password.is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// How requests reach the release host. Built once per run.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub max_redirects: usize,
    pub proxy: Option<String>,
    pub basic_auth: Option<Credentials>,
    pub timeout: Duration,
    pub retry: RetryConfig,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_redirects: MAX_REDIRECTS,
            proxy: None,
            basic_auth: None,
            timeout: Duration::from_secs(120),
            retry: RetryConfig::default(),
        }
    }
}

pub struct Fetcher {
    http_client: Client,
    config: TransportConfig,
}

impl Fetcher {
    pub fn new(config: TransportConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!("protolint-install/", env!("CARGO_PKG_VERSION")))
            .redirect(redirect::Policy::limited(config.max_redirects))
            .timeout(config.timeout);

        // The resolver is the only source of proxy settings
        builder = match &config.proxy {
            Some(address) => {
                tracing::debug!("Routing downloads through proxy {}", address);
                builder.proxy(build_proxy(address)?)
            }
            None => builder.no_proxy(),
        };

        Ok(Self {
            http_client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Download `url` into a fresh temporary file.
    ///
    /// Every failure is logged here and reported as `None`; the returned file
    /// has been written and synced in full.
    pub async fn fetch(&self, url: &str) -> Option<NamedTempFile> {
        match self.download(url).await {
            Ok(file) => {
                tracing::info!("Protolint saved to {}", file.path().display());
                Some(file)
            }
            Err(e @ InstallError::DownloadFailed { .. }) => {
                tracing::error!("{}", e);
                None
            }
            Err(e) => {
                tracing::error!("Failed to download {}: {}", url, e);
                None
            }
        }
    }

    /// Download `url`, retrying transient failures
    pub async fn download(&self, url: &str) -> Result<NamedTempFile> {
        let operation_name = format!("Downloading {url}");
        with_retry(&operation_name, &self.config.retry, || self.download_once(url)).await
    }

    async fn download_once(&self, url: &str) -> Result<NamedTempFile> {
        let mut request = self.http_client.get(url);
        if let Some(credentials) = &self.config.basic_auth {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InstallError::DownloadFailed {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }

        let mut temp_file = tempfile::Builder::new()
            .prefix("protolint-")
            .suffix("_protolint.tar.gz")
            .tempfile()?;
        let path = temp_file.path().display().to_string();
        let save_error = |source| InstallError::Save {
            path: path.clone(),
            source,
        };

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            temp_file.write_all(&chunk).map_err(save_error)?;
        }
        temp_file.flush().map_err(save_error)?;
        temp_file.as_file().sync_all().map_err(save_error)?;

        Ok(temp_file)
    }
}
