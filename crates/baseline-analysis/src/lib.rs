//! # baseline-analysis
//!
//! Detection and classification engine for the Baseline feature scanner.
//! Parses program and style sheet sources, runs the registered feature
//! detectors, classifies each occurrence against web-features Baseline data,
//! and renders the grouped report.

pub mod baseline;
pub mod detectors;
pub mod engine;
pub mod parsers;
pub mod pipeline;
pub mod report;
pub mod scanner;

pub use baseline::{BaselineClassifier, BaselineStatus, FeatureAnalysis, FeatureTable, MaturityStatus};
pub use detectors::{builtin_registry, DetectorRegistry, FeatureDetector};
pub use engine::{detect_features, DetectionContext, FeatureScanner};
pub use pipeline::{BaselinePipeline, SourceFile};
pub use report::{format_report, format_summary, CheckStatus, ScanOutcome};
