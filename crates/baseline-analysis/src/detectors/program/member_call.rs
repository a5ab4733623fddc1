//! Static member access on a named namespace, e.g. `Promise.try`.

use baseline_core::types::{DetectedFeature, SourceKind};

use super::member_parts;
use crate::detectors::traits::FeatureDetector;
use crate::engine::context::DetectionContext;
use crate::engine::walk::walk_tree;

/// Matches `Namespace.method` where the object is the bare identifier
/// `Namespace`. One occurrence per access site.
///
/// Only the identifier's spelling is checked; a local binding that shadows
/// the global namespace is reported too.
#[derive(Debug, Clone)]
pub struct StaticMemberDetector {
    id: &'static str,
    display_name: &'static str,
    canonical_id: &'static str,
    object: &'static str,
    property: &'static str,
}

impl StaticMemberDetector {
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        canonical_id: &'static str,
        object: &'static str,
        property: &'static str,
    ) -> Self {
        Self {
            id,
            display_name,
            canonical_id,
            object,
            property,
        }
    }

    /// `Promise.try(fn)`.
    pub const fn promise_try() -> Self {
        Self::new("promise-try", "Promise.try", "promise-try", "Promise", "try")
    }

    /// `Promise.withResolvers()`.
    pub const fn promise_with_resolvers() -> Self {
        Self::new(
            "promise-withresolvers",
            "Promise.withResolvers",
            "promise-withresolvers",
            "Promise",
            "withResolvers",
        )
    }
}

impl FeatureDetector for StaticMemberDetector {
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
            let Some((object, property)) = member_parts(node) else {
                return;
            };
            if object.kind() == "identifier"
                && program.text(object) == self.object
                && property.kind() == "property_identifier"
                && program.text(property) == self.property
            {
                features.push(program.occurrence(self.display_name, node));
            }
        });
        features
    }
}
