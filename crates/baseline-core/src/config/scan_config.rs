//! Scan configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Severity, TargetPolicy};

/// File patterns scanned when none are configured.
pub const DEFAULT_FILE_PATTERNS: &[&str] =
    &["*.js", "*.jsx", "*.ts", "*.tsx", "*.css", "*.scss"];

/// Configuration for detection and policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Target policy: "widely", "newly", or "all". Default: "widely".
    pub target: Option<String>,
    /// Severity when issues are found: "fail" or "warn". Default: "warn".
    pub severity: Option<String>,
    /// Patterns selecting which files are scanned, matched by extension.
    /// Default: [`DEFAULT_FILE_PATTERNS`]. An explicit empty list is invalid.
    pub file_patterns: Option<Vec<String>>,
    /// Use partial program trees that contain syntax errors. Default: false.
    pub tolerate_parse_errors: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective target policy, defaulting to `widely`.
    /// Unrecognized values fall back to the default; `validate` rejects them.
    pub fn effective_target(&self) -> TargetPolicy {
        self.target
            .as_deref()
            .and_then(TargetPolicy::parse_str)
            .unwrap_or_default()
    }

    /// Returns the effective severity, defaulting to `warn`.
    pub fn effective_severity(&self) -> Severity {
        self.severity
            .as_deref()
            .and_then(Severity::parse_str)
            .unwrap_or_default()
    }

    /// Returns the configured file patterns, or the defaults when unset.
    pub fn effective_file_patterns(&self) -> Vec<String> {
        self.file_patterns
            .clone()
            .unwrap_or_else(|| DEFAULT_FILE_PATTERNS.iter().map(|p| p.to_string()).collect())
    }

    /// Returns whether partial program trees are accepted, defaulting to false.
    pub fn effective_tolerate_parse_errors(&self) -> bool {
        self.tolerate_parse_errors.unwrap_or(false)
    }

    /// Whether `path` is selected by the effective file patterns.
    ///
    /// A pattern selects a path when the path's extension equals the text
    /// after the pattern's last `.` (`"src/**/*.ts"` selects `a/b.ts`).
    pub fn matches_path(&self, path: &str) -> bool {
        let Some(ext) = Path::new(path).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.effective_file_patterns().iter().any(|pattern| {
            pattern
                .trim()
                .rsplit('.')
                .next()
                .is_some_and(|pattern_ext| pattern_ext == ext)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patterns_select_scannable_files() {
        let config = ScanConfig::default();
        assert!(config.matches_path("src/app.tsx"));
        assert!(config.matches_path("styles/site.scss"));
        assert!(!config.matches_path("README.md"));
        assert!(!config.matches_path("Makefile"));
    }

    #[test]
    fn custom_patterns_match_by_extension() {
        let config = ScanConfig {
            file_patterns: Some(vec![" src/**/*.ts ".into()]),
            ..Default::default()
        };
        assert!(config.matches_path("lib/other.ts"));
        assert!(!config.matches_path("lib/other.js"));
    }
}
