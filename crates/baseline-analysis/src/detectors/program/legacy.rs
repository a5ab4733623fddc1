//! Residual program scanner for features without a dedicated detector.
//!
//! One tree walk covering namespaced static APIs, private class fields, and
//! top-level `await`.

use std::sync::LazyLock;

use baseline_core::types::{DetectedFeature, SourceKind};

use super::{is_top_level, member_parts};
use crate::detectors::traits::FeatureDetector;
use crate::engine::context::DetectionContext;
use crate::engine::walk::walk_tree;

/// APIs still matched by the residual scanner.
pub const LEGACY_APIS: &[&str] = &[
    "Promise.withResolvers",
    "Array.fromAsync",
    "Object.groupBy",
    "Array.prototype.findLast",
    "Array.prototype.findLastIndex",
    "Array.prototype.toSorted",
    "Array.prototype.toReversed",
    "Array.prototype.toSpliced",
    "String.prototype.at",
    "navigator.userAgentData",
    "crypto.randomUUID",
];

/// First two dotted segments of each legacy API; an `object.property`
/// access matches when it contains one of these.
static LEGACY_PREFIXES: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut prefixes: Vec<String> = Vec::new();
    for api in LEGACY_APIS {
        let prefix = api.split('.').take(2).collect::<Vec<_>>().join(".");
        if !prefixes.contains(&prefix) {
            prefixes.push(prefix);
        }
    }
    prefixes
});

pub const PRIVATE_FIELDS: &str = "class-private-fields";
pub const TOP_LEVEL_AWAIT: &str = "top-level-await";

/// Residual program scanner. Run implicitly by the orchestrator after the
/// registered program detectors; it is not part of the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyProgramScanner;

impl LegacyProgramScanner {
    pub const fn new() -> Self {
        Self
    }
}

impl FeatureDetector for LegacyProgramScanner {
    fn id(&self) -> &str {
        "legacy-program"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Program
    }

    fn display_name(&self) -> &str {
        "Residual program features"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<DetectedFeature> {
        let Some(program) = ctx.as_program() else {
            return Vec::new();
        };

        let mut features = Vec::new();
        walk_tree(program.tree.root_node(), |node| match node.kind() {
            "member_expression" => {
                let Some((object, property)) = member_parts(node) else {
                    return;
                };
                if object.kind() != "identifier" || property.kind() != "property_identifier" {
                    return;
                }
                let api_call = format!("{}.{}", program.text(object), program.text(property));
                if LEGACY_PREFIXES.iter().any(|prefix| api_call.contains(prefix.as_str())) {
                    features.push(program.occurrence(api_call, node));
                }
            }
            // JS names the field `property`, TS names it `name`.
            "field_definition" | "public_field_definition" => {
                let key = node
                    .child_by_field_name("property")
                    .or_else(|| node.child_by_field_name("name"));
                if key.is_some_and(|k| k.kind() == "private_property_identifier") {
                    features.push(program.occurrence(PRIVATE_FIELDS, node));
                }
            }
            "await_expression" => {
                if is_top_level(node) {
                    features.push(program.occurrence(TOP_LEVEL_AWAIT, node));
                }
            }
            _ => {}
        });
        features
    }
}
