//! BaselineErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// that the integration layer can match on without parsing messages.
pub trait BaselineErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const PARTIAL_PARSE: &str = "PARTIAL_PARSE";
pub const UNSUPPORTED_EXTENSION: &str = "UNSUPPORTED_EXTENSION";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DATA_ERROR: &str = "DATA_ERROR";
