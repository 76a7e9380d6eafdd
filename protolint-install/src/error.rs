use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No release version configured. Set npm_package_version or pass --release-version")]
    MissingVersion,

    #[error("Failed to parse version '{input}': {reason}. Expected format: MAJOR.MINOR.PATCH (e.g., 1.2.3)")]
    VersionParse { input: String, reason: String },

    #[error("Configuration error at {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid proxy address '{address}': {reason}")]
    Proxy { address: String, reason: String },

    #[error("Failed to download {url}. Got status: {status}")]
    DownloadFailed { url: String, status: u16 },

    #[error("Failed to save downloaded file {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive extraction failed for {file}: {reason}")]
    ArchiveExtraction { file: String, reason: String },

    #[error("Entry '{name}' not found in archive {archive}")]
    EntryNotFound { name: String, archive: String },

    #[error("Failed to prepare install directory {path}: {source}")]
    InstallDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    /// Whether another attempt at the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            // Retry on timeout, connection errors, and 5xx status codes
            InstallError::Http(err) => {
                err.is_timeout()
                    || err.is_connect()
                    || err
                        .status()
                        .map(|s| s.is_server_error() || s.as_u16() == 429)
                        .unwrap_or(err.is_body() || err.is_request())
            }
            InstallError::DownloadFailed { status, .. } => *status >= 500 || *status == 429,
            InstallError::Io(err) | InstallError::Save { source: err, .. } => {
                use std::io::ErrorKind;
                matches!(
                    err.kind(),
                    ErrorKind::ConnectionAborted
                        | ErrorKind::ConnectionReset
                        | ErrorKind::ConnectionRefused
                        | ErrorKind::TimedOut
                        | ErrorKind::Interrupted
                        | ErrorKind::UnexpectedEof
                )
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;
