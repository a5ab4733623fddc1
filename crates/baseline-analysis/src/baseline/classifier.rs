//! Deduplicates occurrences and classifies them against the compatibility
//! table.

use baseline_core::types::DetectedFeature;
use rustc_hash::FxHashSet;
use serde::Serialize;

use super::mapping::mapped_feature_id;
use super::status::BaselineStatus;
use super::table::{BaselineTier, FeatureRecord, FeatureTable, Redirect};

/// Redirect hops followed before a record is treated as unusable.
const MAX_REDIRECTS: usize = 4;

/// How an occurrence name was resolved to a feature ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Found in the hand-maintained mapping.
    Direct,
    /// Found by case-insensitive substring search over the table IDs.
    Fallback,
    /// No ID could be found.
    Unresolved,
}

/// One classified occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureAnalysis {
    pub feature: DetectedFeature,
    pub baseline: BaselineStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<String>,
    pub resolution: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Keep the first occurrence of each `(name, file)` pair, in input order.
pub fn dedupe(features: &[DetectedFeature]) -> Vec<DetectedFeature> {
    let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
    features
        .iter()
        .filter(|f| seen.insert((f.name.as_str(), f.file.as_str())))
        .cloned()
        .collect()
}

/// Classifies occurrences against a borrowed compatibility table.
#[derive(Debug, Clone, Copy)]
pub struct BaselineClassifier<'t> {
    table: &'t FeatureTable,
}

impl<'t> BaselineClassifier<'t> {
    pub fn new(table: &'t FeatureTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t FeatureTable {
        self.table
    }

    /// Resolve an occurrence name to a feature ID.
    ///
    /// The direct mapping wins. Otherwise the first table ID (in table
    /// iteration order) that is a substring of the lowercased name, or that
    /// contains it, is taken. When several IDs match, which one wins depends
    /// only on that order: stable for a given table, but not a ranking.
    pub fn resolve_feature_id(&self, name: &str) -> (Option<String>, Resolution) {
        if let Some(id) = mapped_feature_id(name) {
            return (Some(id.to_string()), Resolution::Direct);
        }

        let lowered = name.to_lowercase();
        match self
            .table
            .ids()
            .find(|id| lowered.contains(id) || id.contains(lowered.as_str()))
        {
            Some(id) => (Some(id.to_string()), Resolution::Fallback),
            None => (None, Resolution::Unresolved),
        }
    }

    /// Status of a feature ID.
    ///
    /// `high` → widely (both dates), `low` → newly (low date), any other
    /// record → limited, no record → unknown. Moved and split records are
    /// followed to their target.
    pub fn baseline_status(&self, id: &str) -> BaselineStatus {
        let Some(record) = self.table.get(id) else {
            return BaselineStatus::unknown();
        };
        let Some(record) = self.follow_redirects(record) else {
            return BaselineStatus::limited();
        };

        match record.tier {
            Some(BaselineTier::High) => {
                BaselineStatus::widely(record.low_date.clone(), record.high_date.clone())
            }
            Some(BaselineTier::Low) => BaselineStatus::newly(record.low_date.clone()),
            _ => BaselineStatus::limited(),
        }
    }

    /// Human-readable description of a feature ID, if the table has one.
    pub fn description(&self, id: &str) -> Option<String> {
        let record = self.follow_redirects(self.table.get(id)?)?;
        record.display_text().map(str::to_string)
    }

    /// Dedupe, resolve, and classify.
    pub fn analyze(&self, features: &[DetectedFeature]) -> Vec<FeatureAnalysis> {
        dedupe(features)
            .into_iter()
            .map(|feature| {
                let (feature_id, resolution) = self.resolve_feature_id(&feature.name);
                let (baseline, description) = match feature_id.as_deref() {
                    Some(id) => (self.baseline_status(id), self.description(id)),
                    None => (BaselineStatus::unknown(), None),
                };
                FeatureAnalysis {
                    feature,
                    baseline,
                    feature_id,
                    resolution,
                    description,
                }
            })
            .collect()
    }

    fn follow_redirects(&self, mut record: &'t FeatureRecord) -> Option<&'t FeatureRecord> {
        let mut hops = 0;
        loop {
            let target = match &record.redirect {
                None => return Some(record),
                Some(Redirect::Moved(target)) => target.as_str(),
                Some(Redirect::Split(targets)) => targets.first()?.as_str(),
            };
            if hops == MAX_REDIRECTS {
                tracing::debug!(feature_id = %record.id, "redirect chain too long");
                return None;
            }
            hops += 1;
            record = self.table.get(target)?;
        }
    }
}
