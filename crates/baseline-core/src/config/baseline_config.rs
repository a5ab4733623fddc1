//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DataConfig, ScanConfig};
use crate::errors::ConfigError;
use crate::types::{Severity, TargetPolicy};

/// Name of the project config file looked up in the scan root.
pub const PROJECT_CONFIG_FILE: &str = "baseline.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`BASELINE_*`)
/// 3. Project config (`baseline.toml` in the scan root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BaselineConfig {
    pub scan: ScanConfig,
    pub data: DataConfig,
}

/// Override values supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub target: Option<TargetPolicy>,
    pub severity: Option<Severity>,
    pub file_patterns: Option<Vec<String>>,
    pub features_path: Option<String>,
}

impl BaselineConfig {
    /// Load configuration with layered resolution from `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_env(root, overrides, |key| std::env::var(key).ok())
    }

    /// Like [`BaselineConfig::load`] but reads environment values through `env`.
    pub fn load_with_env(
        root: &Path,
        overrides: Option<&ConfigOverrides>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            tracing::debug!(path = %project_config_path.display(), "loading project config");
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config, env);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &BaselineConfig) -> Result<(), ConfigError> {
        if let Some(ref target) = config.scan.target {
            if TargetPolicy::parse_str(target).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.target".to_string(),
                    message: format!("unknown target '{target}', expected widely, newly, or all"),
                });
            }
        }
        if let Some(ref severity) = config.scan.severity {
            if Severity::parse_str(severity).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.severity".to_string(),
                    message: format!("unknown severity '{severity}', expected fail or warn"),
                });
            }
        }
        if let Some(ref patterns) = config.scan.file_patterns {
            if patterns.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.file_patterns".to_string(),
                    message: "at least one pattern is required".to_string(),
                });
            }
            if patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.file_patterns".to_string(),
                    message: "patterns must not be empty".to_string(),
                });
            }
        }
        if let Some(ref path) = config.data.features_path {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "data.features_path".to_string(),
                    message: "path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut BaselineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BaselineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it holds a value.
    fn merge(base: &mut BaselineConfig, other: &BaselineConfig) {
        if other.scan.target.is_some() {
            base.scan.target = other.scan.target.clone();
        }
        if other.scan.severity.is_some() {
            base.scan.severity = other.scan.severity.clone();
        }
        if other.scan.file_patterns.is_some() {
            base.scan.file_patterns = other.scan.file_patterns.clone();
        }
        if other.scan.tolerate_parse_errors.is_some() {
            base.scan.tolerate_parse_errors = other.scan.tolerate_parse_errors;
        }
        if other.data.features_path.is_some() {
            base.data.features_path = other.data.features_path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BASELINE_TARGET`, `BASELINE_SEVERITY`, `BASELINE_FILE_PATTERNS`,
    /// `BASELINE_DATA_PATH`. A set but empty `BASELINE_FILE_PATTERNS` is kept
    /// as an empty list so validation rejects it.
    fn apply_env_overrides(config: &mut BaselineConfig, env: impl Fn(&str) -> Option<String>) {
        if let Some(val) = env("BASELINE_TARGET") {
            config.scan.target = Some(val);
        }
        if let Some(val) = env("BASELINE_SEVERITY") {
            config.scan.severity = Some(val);
        }
        if let Some(val) = env("BASELINE_FILE_PATTERNS") {
            let patterns: Vec<String> = val
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            config.scan.file_patterns = Some(patterns);
        }
        if let Some(val) = env("BASELINE_TOLERATE_PARSE_ERRORS") {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.tolerate_parse_errors = Some(v);
            }
        }
        if let Some(val) = env("BASELINE_DATA_PATH") {
            config.data.features_path = Some(val);
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut BaselineConfig, overrides: &ConfigOverrides) {
        if let Some(target) = overrides.target {
            config.scan.target = Some(target.name().to_string());
        }
        if let Some(severity) = overrides.severity {
            config.scan.severity = Some(severity.name().to_string());
        }
        if let Some(ref patterns) = overrides.file_patterns {
            config.scan.file_patterns = Some(patterns.clone());
        }
        if let Some(ref path) = overrides.features_path {
            config.data.features_path = Some(path.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
