//! Read-only compatibility table in the web-features `data.json` shape.
//!
//! Records are decoded one at a time from `serde_json::Value`, so a single
//! malformed record degrades to an uninterpretable entry instead of failing
//! the whole table.

use std::collections::BTreeMap;
use std::path::Path;

use baseline_core::config::DataConfig;
use baseline_core::errors::DataError;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;

/// Curated subset of web-features shipped with the crate.
const BUNDLED_DATA: &str = include_str!("../../data/web-features.json");

/// The `status.baseline` value of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaselineTier {
    /// `"high"`
    High,
    /// `"low"`
    Low,
    /// `false`
    NotBaseline,
    /// Missing, or not one of the values above.
    Unrecognized,
}

/// Where a retired feature ID now points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// `kind: "moved"`: the feature was renamed.
    Moved(String),
    /// `kind: "split"`: the feature was divided into several.
    Split(Vec<String>),
}

/// One decoded compatibility record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureRecord {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub description_html: Option<String>,
    /// `None` when the record carries no `status` object at all.
    pub tier: Option<BaselineTier>,
    pub low_date: Option<String>,
    pub high_date: Option<String>,
    pub spec_urls: Vec<String>,
    pub caniuse: Vec<String>,
    pub redirect: Option<Redirect>,
}

impl FeatureRecord {
    /// Human-readable text: name, then description, then description HTML.
    pub fn display_text(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.description.as_deref().filter(|s| !s.is_empty()))
            .or(self.description_html.as_deref().filter(|s| !s.is_empty()))
    }

    fn malformed(id: &str) -> Self {
        Self {
            id: id.to_string(),
            tier: Some(BaselineTier::Unrecognized),
            ..Self::default()
        }
    }

    fn decode(id: &str, value: Value) -> Self {
        let raw = match serde_json::from_value::<RawRecord>(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(feature_id = id, error = %e, "malformed compatibility record");
                return Self::malformed(id);
            }
        };

        let redirect = match raw.kind.as_deref() {
            Some("moved") => raw.redirect_target.map(Redirect::Moved),
            Some("split") => raw.redirect_targets.map(Redirect::Split),
            _ => None,
        };

        let (tier, low_date, high_date) = match raw.status {
            None => (None, None, None),
            Some(Value::Object(status)) => {
                let tier = match status.get("baseline") {
                    Some(Value::String(s)) if s == "high" => BaselineTier::High,
                    Some(Value::String(s)) if s == "low" => BaselineTier::Low,
                    Some(Value::Bool(false)) => BaselineTier::NotBaseline,
                    _ => BaselineTier::Unrecognized,
                };
                let date = |key: &str| status.get(key).and_then(Value::as_str).map(str::to_string);
                (Some(tier), date("baseline_low_date"), date("baseline_high_date"))
            }
            Some(_) => (Some(BaselineTier::Unrecognized), None, None),
        };

        Self {
            id: id.to_string(),
            name: raw.name,
            description: raw.description,
            description_html: raw.description_html,
            tier,
            low_date,
            high_date,
            spec_urls: raw.spec.map(OneOrMany::into_vec).unwrap_or_default(),
            caniuse: raw.caniuse.map(OneOrMany::into_vec).unwrap_or_default(),
            redirect,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawRecord {
    kind: Option<String>,
    name: Option<String>,
    description: Option<String>,
    description_html: Option<String>,
    status: Option<Value>,
    spec: Option<OneOrMany>,
    caniuse: Option<OneOrMany>,
    redirect_target: Option<String>,
    redirect_targets: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

/// Feature ID → record, iterated in lexicographic ID order.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    records: Vec<FeatureRecord>,
    index: FxHashMap<String, usize>,
}

impl FeatureTable {
    /// Decode a web-features document. Accepts `{ "features": { ... } }` or
    /// a bare `{ "<id>": record }` map.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let document: Value = serde_json::from_str(json).map_err(|e| DataError::Decode {
            message: e.to_string(),
        })?;

        let features = match document {
            Value::Object(mut root) => match root.remove("features") {
                Some(Value::Object(features)) => features,
                Some(_) => {
                    return Err(DataError::Decode {
                        message: "\"features\" is not an object".to_string(),
                    })
                }
                None => root,
            },
            _ => {
                return Err(DataError::Decode {
                    message: "top-level value is not an object".to_string(),
                })
            }
        };

        let ordered: BTreeMap<String, Value> = features.into_iter().collect();
        Ok(Self::from_records(
            ordered.into_iter().map(|(id, value)| FeatureRecord::decode(&id, value)),
        ))
    }

    /// Read and decode a `data.json` file.
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), count = table.len(), "loaded compatibility data");
        Ok(table)
    }

    /// The curated dataset compiled into the crate.
    pub fn bundled() -> Result<Self, DataError> {
        Self::from_json_str(BUNDLED_DATA)
    }

    /// The configured dataset, or the bundled one when no path is set.
    pub fn load(config: &DataConfig) -> Result<Self, DataError> {
        match config.features_path.as_deref() {
            Some(path) => Self::from_path(Path::new(path)),
            None => Self::bundled(),
        }
    }

    /// Build a table from records. Later records replace earlier ones with
    /// the same ID; order is normalized to lexicographic ID order.
    pub fn from_records(records: impl IntoIterator<Item = FeatureRecord>) -> Self {
        let ordered: BTreeMap<String, FeatureRecord> =
            records.into_iter().map(|r| (r.id.clone(), r)).collect();
        let records: Vec<FeatureRecord> = ordered.into_values().collect();
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Self { records, index }
    }

    pub fn get(&self, id: &str) -> Option<&FeatureRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// IDs in iteration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
