//! Compatibility data configuration.

use serde::{Deserialize, Serialize};

/// Where the compatibility table comes from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Path to a web-features `data.json`. Default: the bundled dataset.
    pub features_path: Option<String>,
}
