//! Batch pipeline: detect → classify → filter → format.

use baseline_core::config::BaselineConfig;
use baseline_core::errors::DataError;
use baseline_core::types::DetectedFeature;
use rayon::prelude::*;

use crate::baseline::{filter_by_policy, BaselineClassifier, FeatureAnalysis, FeatureTable};
use crate::detectors::{builtin_registry, DetectorRegistry};
use crate::engine::{FeatureScanner, ScanOptions};
use crate::report::{format_report, format_summary, CheckStatus, ScanOutcome};

/// A changed file handed over by the integration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A registry, a compatibility table, and a config bound together.
#[derive(Debug)]
pub struct BaselinePipeline<'r> {
    registry: &'r DetectorRegistry,
    table: FeatureTable,
    config: BaselineConfig,
}

impl<'r> BaselinePipeline<'r> {
    pub fn new(registry: &'r DetectorRegistry, table: FeatureTable, config: BaselineConfig) -> Self {
        Self {
            registry,
            table,
            config,
        }
    }

    pub fn config(&self) -> &BaselineConfig {
        &self.config
    }

    pub fn table(&self) -> &FeatureTable {
        &self.table
    }

    /// Detect across files in parallel. Files outside the configured patterns
    /// are skipped. Output keeps file order, then per-file occurrence order.
    pub fn detect_batch(&self, files: &[SourceFile]) -> Vec<DetectedFeature> {
        let scanner = FeatureScanner::new(self.registry)
            .with_options(ScanOptions::from_config(&self.config.scan));

        let per_file: Vec<Vec<DetectedFeature>> = files
            .par_iter()
            .map(|file| {
                if !self.config.scan.matches_path(&file.path) {
                    tracing::debug!(file = %file.path, "skipping file outside configured patterns");
                    return Vec::new();
                }
                scanner.detect(&file.content, &file.path)
            })
            .collect();

        per_file.into_iter().flatten().collect()
    }

    /// Dedupe and classify raw occurrences.
    pub fn classify(&self, features: &[DetectedFeature]) -> Vec<FeatureAnalysis> {
        BaselineClassifier::new(&self.table).analyze(features)
    }

    /// Run the whole pipeline over a batch.
    pub fn run(&self, files: &[SourceFile]) -> ScanOutcome {
        let policy = self.config.scan.effective_target();
        let severity = self.config.scan.effective_severity();

        let features = self.detect_batch(files);
        tracing::info!(files = files.len(), count = features.len(), "detected features");

        let issues = filter_by_policy(self.classify(&features), policy);
        let status = CheckStatus::decide(issues.len(), severity);
        tracing::info!(
            issues = issues.len(),
            target = %policy,
            status = %status,
            "baseline check complete"
        );

        ScanOutcome {
            issue_count: issues.len(),
            status,
            summary: format_summary(&issues),
            report: format_report(policy, &issues),
            features_detected: features,
        }
    }
}

impl BaselinePipeline<'static> {
    /// Pipeline over the built-in registry and the configured dataset.
    pub fn from_config(config: BaselineConfig) -> Result<Self, DataError> {
        let table = FeatureTable::load(&config.data)?;
        Ok(Self::new(builtin_registry(), table, config))
    }
}
