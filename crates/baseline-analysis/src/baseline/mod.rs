//! Baseline classification: the compatibility table, the name → ID mapping,
//! the classifier, and the target policy filter.

pub mod classifier;
pub mod filter;
pub mod mapping;
pub mod status;
pub mod table;

pub use classifier::{dedupe, BaselineClassifier, FeatureAnalysis, Resolution};
pub use filter::{filter_by_policy, is_reported};
pub use mapping::{mapped_feature_id, FEATURE_MAPPING};
pub use status::{BaselineStatus, MaturityStatus};
pub use table::{BaselineTier, FeatureRecord, FeatureTable, Redirect};
