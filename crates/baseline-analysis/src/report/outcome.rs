//! Machine-readable results consumed by the hosting integration.

use baseline_core::types::{DetectedFeature, Severity};
use serde::{Deserialize, Serialize};

/// Pass/fail decision for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    /// `Fail` iff there is at least one issue and severity is `fail`.
    pub fn decide(issue_count: usize, severity: Severity) -> Self {
        if issue_count > 0 && severity == Severity::Fail {
            Self::Fail
        } else {
            Self::Pass
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a scan produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    /// Number of analyses surviving the policy filter.
    pub issue_count: usize,
    pub status: CheckStatus,
    /// Every raw occurrence, before dedup and filtering.
    pub features_detected: Vec<DetectedFeature>,
    pub summary: String,
    pub report: String,
}

impl ScanOutcome {
    /// The raw occurrences as a JSON array of `{ name, kind, file, line? }`.
    pub fn features_detected_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.features_detected)
    }

    pub fn is_failure(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}
