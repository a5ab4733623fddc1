//! CSS `:is()` and `:where()` pseudo-classes.

use baseline_core::types::{DetectedFeature, SourceKind};

use super::{declaration, rule_selector};
use crate::detectors::traits::FeatureDetector;
use crate::engine::context::DetectionContext;
use crate::engine::walk::walk_tree;

const SELECTOR_TOKENS: &[&str] = &[":is(", ":where("];
const VALUE_TOKENS: &[&str] = &["is(", "where("];

#[derive(Debug, Clone, Copy, Default)]
pub struct IsWherePseudoDetector;

impl FeatureDetector for IsWherePseudoDetector {
    fn id(&self) -> &str {
        "css-is-where-pseudo"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Stylesheet
    }

    fn display_name(&self) -> &str {
        "CSS :is() and :where()"
    }

    fn canonical_id(&self) -> Option<&str> {
        Some("is-where-selectors")
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<DetectedFeature> {
        let Some(sheet) = ctx.as_stylesheet() else {
            return Vec::new();
        };

        let mut features = Vec::new();
        walk_tree(sheet.tree.root_node(), |node| {
            let matched = match node.kind() {
                "rule_set" => rule_selector(sheet, node)
                    .is_some_and(|s| SELECTOR_TOKENS.iter().any(|t| s.contains(t))),
                "declaration" => declaration(sheet, node)
                    .is_some_and(|d| VALUE_TOKENS.iter().any(|t| d.value.contains(t))),
                _ => false,
            };
            if matched {
                features.push(sheet.occurrence("css-is-where-pseudo", node));
            }
        });
        features
    }
}
