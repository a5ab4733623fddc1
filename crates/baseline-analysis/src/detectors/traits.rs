//! FeatureDetector trait: the contract every feature check implements.

use baseline_core::types::{DetectedFeature, SourceKind};

use crate::engine::context::DetectionContext;

/// A self-contained, pure matching rule for one feature over one source kind.
///
/// `detect` must not perform I/O, must be deterministic for identical input,
/// and must return an empty list when handed a context of the other kind.
pub trait FeatureDetector: Send + Sync {
    /// Unique identifier; the registry key.
    fn id(&self) -> &str;

    /// The kind of source this detector analyzes.
    fn kind(&self) -> SourceKind;

    /// Human-readable name of the feature.
    fn display_name(&self) -> &str;

    /// web-features ID used for the Baseline lookup, when known.
    fn canonical_id(&self) -> Option<&str> {
        None
    }

    /// Run detection on the given context.
    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<DetectedFeature>;
}

impl std::fmt::Debug for dyn FeatureDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureDetector")
            .field("id", &self.id())
            .field("kind", &self.kind())
            .finish()
    }
}
