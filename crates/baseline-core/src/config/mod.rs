//! Configuration system for the Baseline scanner.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod baseline_config;
pub mod data_config;
pub mod scan_config;

pub use baseline_config::{BaselineConfig, ConfigOverrides};
pub use data_config::DataConfig;
pub use scan_config::ScanConfig;
