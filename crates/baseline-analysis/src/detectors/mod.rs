//! Feature detectors: the detector protocol, the registry, and the
//! built-in program and style sheet detectors.

pub mod program;
pub mod registry;
pub mod stylesheet;
pub mod traits;

pub use registry::{builtin_registry, DetectorRegistry};
pub use traits::FeatureDetector;

use program::{MethodAccessDetector, StaticMemberDetector};
use stylesheet::{ContainerQueriesDetector, HasPseudoDetector, IsWherePseudoDetector, MathFunctionsDetector};

/// The built-in detectors in registration order.
pub fn builtin_detectors() -> Vec<Box<dyn FeatureDetector>> {
    vec![
        Box::new(StaticMemberDetector::promise_try()),
        Box::new(StaticMemberDetector::promise_with_resolvers()),
        Box::new(MethodAccessDetector::array_at()),
        Box::new(ContainerQueriesDetector),
        Box::new(HasPseudoDetector),
        Box::new(MathFunctionsDetector),
        Box::new(IsWherePseudoDetector),
    ]
}
