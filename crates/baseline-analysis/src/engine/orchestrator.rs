//! Routes one source file to the detectors of its kind.

use std::path::Path;

use baseline_core::config::ScanConfig;
use baseline_core::types::{DetectedFeature, SourceKind};

use super::context::DetectionContext;
use crate::detectors::program::LegacyProgramScanner;
use crate::detectors::registry::run_isolated;
use crate::detectors::stylesheet::LegacyStylesheetScanner;
use crate::detectors::{builtin_registry, DetectorRegistry};
use crate::parsers::{parse_program, parse_stylesheet};
use crate::scanner::SourceLanguage;

/// Per-scan knobs that affect parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Use partial program trees instead of dropping files with syntax errors.
    pub tolerate_parse_errors: bool,
}

impl ScanOptions {
    pub fn from_config(scan: &ScanConfig) -> Self {
        Self {
            tolerate_parse_errors: scan.effective_tolerate_parse_errors(),
        }
    }
}

/// Runs the registered detectors plus the residual scanners over a file.
#[derive(Debug, Clone, Copy)]
pub struct FeatureScanner<'r> {
    registry: &'r DetectorRegistry,
    options: ScanOptions,
}

impl<'r> FeatureScanner<'r> {
    pub fn new(registry: &'r DetectorRegistry) -> Self {
        Self {
            registry,
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &'r DetectorRegistry {
        self.registry
    }

    /// Detect every feature occurrence in `code`.
    ///
    /// Unrecognized extensions yield nothing without parsing. Parse failures
    /// are logged and yield nothing. Occurrences keep detector order, then
    /// source order within each detector.
    pub fn detect(&self, code: &str, filename: &str) -> Vec<DetectedFeature> {
        let language = match SourceLanguage::resolve(filename) {
            Ok(language) => language,
            Err(e) => {
                tracing::trace!(file = filename, error = %e, "skipping file");
                return Vec::new();
            }
        };

        let features = match language.kind() {
            SourceKind::Program => self.detect_program(code, filename, language),
            SourceKind::Stylesheet => self.detect_stylesheet(code, filename, language),
        };

        tracing::debug!(file = filename, count = features.len(), "detection complete");
        features
    }

    fn detect_program(&self, code: &str, filename: &str, language: SourceLanguage) -> Vec<DetectedFeature> {
        let tree = match parse_program(code, Path::new(filename), language, self.options.tolerate_parse_errors) {
            Ok(tree) => tree,
            Err(e) => {
                tracing::warn!(file = filename, error = %e, "failed to parse program");
                return Vec::new();
            }
        };

        let ctx = DetectionContext::program(code, filename, &tree);
        let mut features = self.registry.run(&ctx);
        features.extend(run_isolated(&LegacyProgramScanner::new(), &ctx));
        features
    }

    fn detect_stylesheet(&self, code: &str, filename: &str, language: SourceLanguage) -> Vec<DetectedFeature> {
        let tree = match parse_stylesheet(code, Path::new(filename), language) {
            Ok(tree) => tree,
            Err(e) => {
                tracing::warn!(file = filename, error = %e, "failed to parse stylesheet");
                return Vec::new();
            }
        };

        let ctx = DetectionContext::stylesheet(code, filename, &tree);
        let mut features = self.registry.run(&ctx);
        features.extend(run_isolated(&LegacyStylesheetScanner::new(), &ctx));
        features
    }
}

/// Detect features in one file with the built-in registry and default options.
pub fn detect_features(code: &str, filename: &str) -> Vec<DetectedFeature> {
    FeatureScanner::new(builtin_registry()).detect(code, filename)
}
