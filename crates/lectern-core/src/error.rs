use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LecternError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File handle is stale, reopen {0} manually")]
    StaleHandle(PathBuf),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Response has no readable body")]
    EmptyBody,

    #[error("Config error: {0}")]
    Config(String),

    #[error("No config or data directory available on this platform")]
    NoPlatformDir,
}

pub type Result<T> = std::result::Result<T, LecternError>;
