//! Target policy filter.

use baseline_core::types::TargetPolicy;

use super::classifier::FeatureAnalysis;
use super::status::MaturityStatus;

/// Whether `status` is reported under `policy`.
pub fn is_reported(policy: TargetPolicy, status: MaturityStatus) -> bool {
    match policy {
        TargetPolicy::All => true,
        TargetPolicy::Widely => status != MaturityStatus::Widely,
        TargetPolicy::Newly => matches!(status, MaturityStatus::Limited | MaturityStatus::Unknown),
    }
}

/// Keep the analyses reported under `policy`, in order.
pub fn filter_by_policy(analyses: Vec<FeatureAnalysis>, policy: TargetPolicy) -> Vec<FeatureAnalysis> {
    analyses
        .into_iter()
        .filter(|a| is_reported(policy, a.baseline.status))
        .collect()
}
