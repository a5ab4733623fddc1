//! Maturity status derived from compatibility data.

use serde::{Deserialize, Serialize};

/// The four-way Baseline classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityStatus {
    /// Baseline "high": interoperable for at least 30 months.
    Widely,
    /// Baseline "low": interoperable in current browsers.
    Newly,
    /// Not Baseline, or the record could not be interpreted.
    Limited,
    /// No compatibility record could be found.
    Unknown,
}

impl MaturityStatus {
    pub const ALL: [MaturityStatus; 4] = [Self::Widely, Self::Newly, Self::Limited, Self::Unknown];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Widely => "widely",
            Self::Newly => "newly",
            Self::Limited => "limited",
            Self::Unknown => "unknown",
        }
    }

    /// Capitalized name shown in report tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Widely => "Widely",
            Self::Newly => "Newly",
            Self::Limited => "Limited",
            Self::Unknown => "Unknown",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Widely => "✅",
            Self::Newly => "🟡",
            Self::Limited => "🔴",
            Self::Unknown => "⚪",
        }
    }
}

impl std::fmt::Display for MaturityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A status plus the dates the feature entered the newly and widely tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineStatus {
    pub status: MaturityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_date: Option<String>,
}

impl BaselineStatus {
    pub fn widely(low_date: Option<String>, high_date: Option<String>) -> Self {
        Self {
            status: MaturityStatus::Widely,
            low_date,
            high_date,
        }
    }

    pub fn newly(low_date: Option<String>) -> Self {
        Self {
            status: MaturityStatus::Newly,
            low_date,
            high_date: None,
        }
    }

    pub fn limited() -> Self {
        Self {
            status: MaturityStatus::Limited,
            low_date: None,
            high_date: None,
        }
    }

    pub fn unknown() -> Self {
        Self {
            status: MaturityStatus::Unknown,
            low_date: None,
            high_date: None,
        }
    }
}
