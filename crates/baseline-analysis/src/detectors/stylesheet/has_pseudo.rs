//! CSS `:has()` relational pseudo-class.

use baseline_core::types::{DetectedFeature, SourceKind};

use super::{declaration, rule_selector};
use crate::detectors::traits::FeatureDetector;
use crate::engine::context::DetectionContext;
use crate::engine::walk::walk_tree;

const HAS_TOKEN: &str = ":has(";

/// Matches `:has(` as a literal substring of a rule's selector text or of a
/// declaration value. The selector grammar is not interpreted, so a nested
/// `:has()` still counts once per rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasPseudoDetector;

impl FeatureDetector for HasPseudoDetector {
    fn id(&self) -> &str {
        "css-has-pseudo"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Stylesheet
    }

    fn display_name(&self) -> &str {
        "CSS :has() pseudo-class"
    }

    fn canonical_id(&self) -> Option<&str> {
        Some("has")
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<DetectedFeature> {
        let Some(sheet) = ctx.as_stylesheet() else {
            return Vec::new();
        };

        let mut features = Vec::new();
        walk_tree(sheet.tree.root_node(), |node| {
            let matched = match node.kind() {
                "rule_set" => rule_selector(sheet, node).is_some_and(|s| s.contains(HAS_TOKEN)),
                "declaration" => declaration(sheet, node).is_some_and(|d| d.value.contains(HAS_TOKEN)),
                _ => false,
            };
            if matched {
                features.push(sheet.occurrence("css-has-pseudo", node));
            }
        });
        features
    }
}
