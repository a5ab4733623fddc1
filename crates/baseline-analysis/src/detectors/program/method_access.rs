//! Method access by property name alone, e.g. `.at(...)`.

use baseline_core::types::{DetectedFeature, SourceKind};

use super::member_parts;
use crate::detectors::traits::FeatureDetector;
use crate::engine::context::DetectionContext;
use crate::engine::walk::walk_tree;

/// Matches any member access whose property is `method`, whatever the
/// receiver is.
///
/// Known precision limit: without type information an array receiver cannot
/// be told apart from a string receiver or a user-defined method with the
/// same name, so all of them are reported.
#[derive(Debug, Clone)]
pub struct MethodAccessDetector {
    id: &'static str,
    display_name: &'static str,
    canonical_id: &'static str,
    method: &'static str,
}

impl MethodAccessDetector {
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        canonical_id: &'static str,
        method: &'static str,
    ) -> Self {
        Self {
            id,
            display_name,
            canonical_id,
            method,
        }
    }

    /// `Array.prototype.at`.
    pub const fn array_at() -> Self {
        Self::new("array-at", "Array.prototype.at", "array-at", "at")
    }
}

impl FeatureDetector for MethodAccessDetector {
    fn id(&self) -> &str {
        self.id
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Program
    }

    fn display_name(&self) -> &str {
        self.display_name
    }

    fn canonical_id(&self) -> Option<&str> {
        Some(self.canonical_id)
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<DetectedFeature> {
        let Some(program) = ctx.as_program() else {
            return Vec::new();
        };

        let mut features = Vec::new();
        walk_tree(program.tree.root_node(), |node| {
            let Some((_, property)) = member_parts(node) else {
                return;
            };
            if property.kind() == "property_identifier" && program.text(property) == self.method {
                features.push(program.occurrence(self.display_name, node));
            }
        });
        features
    }
}
