//! Report rendering and the machine-readable scan outcome.

pub mod markdown;
pub mod outcome;
pub mod summary;

pub use markdown::format_report;
pub use outcome::{CheckStatus, ScanOutcome};
pub use summary::format_summary;

use crate::baseline::{FeatureAnalysis, MaturityStatus};

/// Analyses grouped by status, each bucket in input order.
#[derive(Debug, Default)]
pub(crate) struct StatusBuckets<'a> {
    pub limited: Vec<&'a FeatureAnalysis>,
    pub newly: Vec<&'a FeatureAnalysis>,
    pub unknown: Vec<&'a FeatureAnalysis>,
    pub widely: Vec<&'a FeatureAnalysis>,
}

impl<'a> StatusBuckets<'a> {
    pub fn group(analyses: &'a [FeatureAnalysis]) -> Self {
        let mut buckets = Self::default();
        for analysis in analyses {
            match analysis.baseline.status {
                MaturityStatus::Limited => buckets.limited.push(analysis),
                MaturityStatus::Newly => buckets.newly.push(analysis),
                MaturityStatus::Unknown => buckets.unknown.push(analysis),
                MaturityStatus::Widely => buckets.widely.push(analysis),
            }
        }
        buckets
    }
}
