//! Detection errors.

use super::error_code::{self, BaselineErrorCode};

/// Errors that can occur while running a detector over a context.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Detector {id} panicked on {file}: {message}")]
    DetectorPanic {
        id: String,
        file: String,
        message: String,
    },
}

impl BaselineErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
