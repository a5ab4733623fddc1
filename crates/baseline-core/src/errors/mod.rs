//! Error handling for the Baseline scanner.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod data_error;
pub mod detection_error;
pub mod error_code;
pub mod parse_error;

pub use config_error::ConfigError;
pub use data_error::DataError;
pub use detection_error::DetectionError;
pub use error_code::BaselineErrorCode;
pub use parse_error::ParseError;
