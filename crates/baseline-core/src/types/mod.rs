//! Shared value types passed between the detection, classification,
//! and reporting stages.

pub mod feature;
pub mod policy;

pub use feature::{DetectedFeature, SourceKind};
pub use policy::{Severity, TargetPolicy};
