//! # baseline-core
//!
//! Foundation crate for the Baseline feature scanner.
//! Defines the shared value types, errors, config, and tracing setup.
//! The analysis crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::BaselineConfig;
pub use errors::error_code::BaselineErrorCode;
pub use types::feature::{DetectedFeature, SourceKind};
