//! DetectorRegistry: register, look up, filter by kind, unregister.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::LazyLock;

use baseline_core::errors::DetectionError;
use baseline_core::types::{DetectedFeature, SourceKind};
use rustc_hash::FxHashMap;

use super::traits::FeatureDetector;
use crate::engine::context::DetectionContext;

/// Registry of feature detectors keyed by ID, in registration order.
///
/// Re-registering an existing ID replaces the earlier detector in place and
/// logs a warning; the last registration wins.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn FeatureDetector>>,
    /// Map from detector ID → index into `detectors`.
    index: FxHashMap<String, usize>,
}

impl DetectorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Create a registry holding the built-in detectors.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_all(super::builtin_detectors());
        registry
    }

    /// Register a detector, overwriting any detector with the same ID.
    pub fn register(&mut self, detector: Box<dyn FeatureDetector>) {
        let id = detector.id().to_string();
        match self.index.get(&id) {
            Some(&idx) => {
                tracing::warn!(
                    detector_id = %id,
                    "detector is already registered, overwriting"
                );
                self.detectors[idx] = detector;
            }
            None => {
                self.index.insert(id, self.detectors.len());
                self.detectors.push(detector);
            }
        }
    }

    /// Register several detectors in order.
    pub fn register_all(&mut self, detectors: impl IntoIterator<Item = Box<dyn FeatureDetector>>) {
        for detector in detectors {
            self.register(detector);
        }
    }

    /// Get a detector by ID.
    pub fn get(&self, id: &str) -> Option<&dyn FeatureDetector> {
        self.index.get(id).map(|&idx| self.detectors[idx].as_ref())
    }

    /// All detectors in registration order.
    pub fn get_all(&self) -> Vec<&dyn FeatureDetector> {
        self.detectors.iter().map(|d| d.as_ref()).collect()
    }

    /// Detectors of one kind in registration order.
    pub fn get_by_kind(&self, kind: SourceKind) -> Vec<&dyn FeatureDetector> {
        self.detectors
            .iter()
            .filter(|d| d.kind() == kind)
            .map(|d| d.as_ref())
            .collect()
    }

    /// Whether a detector with this ID is registered.
    pub fn has(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Remove a detector. Returns true iff something was removed.
    pub fn unregister(&mut self, id: &str) -> bool {
        let Some(idx) = self.index.remove(id) else {
            return false;
        };
        self.detectors.remove(idx);
        for (i, detector) in self.detectors.iter().enumerate().skip(idx) {
            self.index.insert(detector.id().to_string(), i);
        }
        true
    }

    /// Remove every detector.
    pub fn clear(&mut self) {
        self.detectors.clear();
        self.index.clear();
    }

    /// Number of registered detectors.
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Run every detector matching the context's kind, in registration order.
    ///
    /// A detector that panics is logged and skipped; the others still run.
    pub fn run(&self, ctx: &DetectionContext<'_>) -> Vec<DetectedFeature> {
        let mut features = Vec::new();
        for detector in self.detectors.iter().filter(|d| d.kind() == ctx.kind()) {
            features.extend(run_isolated(detector.as_ref(), ctx));
        }
        features
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DetectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.detectors.iter().map(|d| d.id()))
            .finish()
    }
}

/// Run one detector, converting a panic into a logged [`DetectionError`].
pub(crate) fn run_isolated(
    detector: &dyn FeatureDetector,
    ctx: &DetectionContext<'_>,
) -> Vec<DetectedFeature> {
    match catch_unwind(AssertUnwindSafe(|| detector.detect(ctx))) {
        Ok(features) => features,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            let err = DetectionError::DetectorPanic {
                id: detector.id().to_string(),
                file: ctx.file().to_string(),
                message,
            };
            tracing::error!(
                detector_id = detector.id(),
                file = ctx.file(),
                error = %err,
                "detector panicked during detection"
            );
            Vec::new()
        }
    }
}

static BUILTIN_REGISTRY: LazyLock<DetectorRegistry> = LazyLock::new(DetectorRegistry::with_builtins);

/// The process-wide registry of built-in detectors.
///
/// Initialized exactly once on first use and never mutated afterwards.
pub fn builtin_registry() -> &'static DetectorRegistry {
    &BUILTIN_REGISTRY
}
