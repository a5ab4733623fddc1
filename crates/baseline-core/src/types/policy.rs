//! Target policy and severity.

use serde::{Deserialize, Serialize};

/// Which Baseline statuses are surfaced in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPolicy {
    /// Report anything that is not widely available.
    #[default]
    Widely,
    /// Report only limited and unknown features.
    Newly,
    /// Report everything.
    All,
}

impl TargetPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Widely => "widely",
            Self::Newly => "newly",
            Self::All => "all",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "widely" => Some(Self::Widely),
            "newly" => Some(Self::Newly),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Heading label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Widely => "Widely Available",
            Self::Newly => "Newly Available",
            Self::All => "All Features",
        }
    }
}

impl std::fmt::Display for TargetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a non-empty issue list affects the check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fail,
    #[default]
    Warn,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Warn => "warn",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Some(Self::Fail),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
