//! CSS comparison functions `clamp()`, `min()`, `max()`.

use baseline_core::types::{DetectedFeature, SourceKind};

use super::declaration;
use crate::detectors::traits::FeatureDetector;
use crate::engine::context::DetectionContext;
use crate::engine::walk::walk_tree;

const MATH_TOKENS: &[&str] = &["clamp(", "min(", "max("];

/// One occurrence per declaration whose value mentions any math function.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathFunctionsDetector;

impl FeatureDetector for MathFunctionsDetector {
    fn id(&self) -> &str {
        "css-math-functions"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Stylesheet
    }

    fn display_name(&self) -> &str {
        "CSS math functions"
    }

    fn canonical_id(&self) -> Option<&str> {
        Some("css-math-functions")
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<DetectedFeature> {
        let Some(sheet) = ctx.as_stylesheet() else {
            return Vec::new();
        };

        let mut features = Vec::new();
        walk_tree(sheet.tree.root_node(), |node| {
            let Some(decl) = declaration(sheet, node) else {
                return;
            };
            if MATH_TOKENS.iter().any(|token| decl.value.contains(token)) {
                features.push(sheet.occurrence("css-math-functions", node));
            }
        });
        features
    }
}
