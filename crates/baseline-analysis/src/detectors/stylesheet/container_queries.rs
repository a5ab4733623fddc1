//! CSS container queries: `@container` and the container properties.

use baseline_core::types::{DetectedFeature, SourceKind};

use super::{at_rule_name, declaration};
use crate::detectors::traits::FeatureDetector;
use crate::engine::context::DetectionContext;
use crate::engine::walk::walk_tree;

const CONTAINER_PROPERTIES: &[&str] = &["container-type", "container-name", "container"];

#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerQueriesDetector;

impl FeatureDetector for ContainerQueriesDetector {
    fn id(&self) -> &str {
        "container-queries"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Stylesheet
    }

    fn display_name(&self) -> &str {
        "CSS Container Queries"
    }

    fn canonical_id(&self) -> Option<&str> {
        Some("container-queries")
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<DetectedFeature> {
        let Some(sheet) = ctx.as_stylesheet() else {
            return Vec::new();
        };

        let mut features = Vec::new();
        walk_tree(sheet.tree.root_node(), |node| {
            if at_rule_name(sheet, node) == Some("container") {
                features.push(sheet.occurrence("css-container-queries", node));
            } else if let Some(decl) = declaration(sheet, node) {
                if CONTAINER_PROPERTIES.contains(&decl.property) {
                    features.push(sheet.occurrence("css-container-queries", node));
                }
            }
        });
        features
    }
}
