use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Cannot parse '{input}' to a valid version")]
    VersionParse { input: String },

    #[error("Invalid package manifest {path}: {message}")]
    Manifest { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, VersionError>;
