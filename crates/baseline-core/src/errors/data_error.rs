//! Compatibility data errors.

use std::path::PathBuf;

use super::error_code::{self, BaselineErrorCode};

/// Errors that can occur while loading the compatibility data table.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Failed to read compatibility data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode compatibility data: {message}")]
    Decode { message: String },
}

impl BaselineErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_ERROR
    }
}
