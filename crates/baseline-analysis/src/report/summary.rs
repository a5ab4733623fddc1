//! One-line issue summary.

use super::StatusBuckets;
use crate::baseline::FeatureAnalysis;

/// `Limited: N, Newly: N, Unknown: N`. Widely available issues are not counted.
pub fn format_summary(issues: &[FeatureAnalysis]) -> String {
    let buckets = StatusBuckets::group(issues);
    format!(
        "Limited: {}, Newly: {}, Unknown: {}",
        buckets.limited.len(),
        buckets.newly.len(),
        buckets.unknown.len()
    )
}
