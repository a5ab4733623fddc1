//! Detection engine: contexts handed to detectors, the tree walk they share,
//! and the orchestrator that routes a file to the right detectors.

pub mod context;
pub mod orchestrator;
pub mod walk;

pub use context::{DetectionContext, ProgramContext, StylesheetContext};
pub use orchestrator::{detect_features, FeatureScanner, ScanOptions};
pub use walk::walk_tree;
