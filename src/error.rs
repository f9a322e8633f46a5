use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading adverts or configuration
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid word list '{list}': {message}")]
    InvalidWordList { list: String, message: String },
}

pub type DecoderResult<T> = Result<T, DecoderError>;
