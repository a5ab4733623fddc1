//! Residual style sheet scanner for properties and at-rules without a
//! dedicated detector.

use baseline_core::types::{DetectedFeature, SourceKind};

use super::{at_rule_name, declaration};
use crate::detectors::traits::FeatureDetector;
use crate::engine::context::DetectionContext;
use crate::engine::walk::walk_tree;

/// Properties reported as `css-<property>`.
pub const LEGACY_PROPERTIES: &[&str] = &[
    "aspect-ratio",
    "gap",
    "row-gap",
    "column-gap",
    "place-items",
    "place-content",
    "inset",
    "inset-block",
    "inset-inline",
    "scroll-snap-type",
    "scroll-snap-align",
    "overscroll-behavior",
    "accent-color",
    "color-scheme",
];

/// At-rule name → occurrence name.
pub const LEGACY_AT_RULES: &[(&str, &str)] = &[
    ("layer", "css-cascade-layers"),
    ("property", "css-at-property"),
    ("scope", "css-scope"),
    ("starting-style", "css-starting-style"),
];

/// Residual style sheet scanner. Run implicitly by the orchestrator after the
/// registered style sheet detectors; it is not part of the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyStylesheetScanner;

impl LegacyStylesheetScanner {
    pub const fn new() -> Self {
        Self
    }
}

impl FeatureDetector for LegacyStylesheetScanner {
    fn id(&self) -> &str {
        "legacy-stylesheet"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Stylesheet
    }

    fn display_name(&self) -> &str {
        "Residual style sheet features"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<DetectedFeature> {
        let Some(sheet) = ctx.as_stylesheet() else {
            return Vec::new();
        };

        let mut features = Vec::new();
        walk_tree(sheet.tree.root_node(), |node| {
            if let Some(decl) = declaration(sheet, node) {
                if LEGACY_PROPERTIES.contains(&decl.property) {
                    features.push(sheet.occurrence(format!("css-{}", decl.property), node));
                }
            } else if let Some(name) = at_rule_name(sheet, node) {
                if let Some((_, feature)) = LEGACY_AT_RULES.iter().find(|(rule, _)| *rule == name) {
                    features.push(sheet.occurrence(*feature, node));
                }
            }
        });
        features
    }
}
