//! Hand-maintained mapping from occurrence names to web-features IDs.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Occurrence name → web-features ID.
pub const FEATURE_MAPPING: &[(&str, &str)] = &[
    ("Promise.try", "promise-try"),
    ("Promise.withResolvers", "promise-withresolvers"),
    ("Array.fromAsync", "array-fromasync"),
    ("Object.groupBy", "object-groupby"),
    ("Array.prototype.at", "array-at"),
    ("Array.prototype.findLast", "array-findlast"),
    ("Array.prototype.findLastIndex", "array-findlastindex"),
    ("Array.prototype.toSorted", "array-tosorted"),
    ("Array.prototype.toReversed", "array-toreversed"),
    ("Array.prototype.toSpliced", "array-tospliced"),
    ("String.prototype.at", "string-at"),
    ("crypto.randomUUID", "randomuuid"),
    ("top-level-await", "top-level-await"),
    ("class-private-fields", "class-fields-private"),
    ("css-container-queries", "container-queries"),
    ("css-cascade-layers", "cascade-layers"),
    ("css-has-pseudo", "has"),
    ("css-is-where-pseudo", "is-where-selectors"),
    ("css-math-functions", "css-math-functions"),
    ("css-container-type", "container-queries"),
    ("css-aspect-ratio", "aspect-ratio"),
    ("css-gap", "gap"),
    ("css-place-items", "place-items"),
    ("css-inset", "inset"),
    ("css-scroll-snap-type", "scroll-snap"),
    ("css-accent-color", "accent-color"),
    ("css-color-scheme", "color-scheme"),
    ("css-at-property", "registered-custom-properties"),
    ("css-scope", "scope"),
    ("css-starting-style", "starting-style"),
];

static MAPPING_INDEX: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| FEATURE_MAPPING.iter().copied().collect());

/// Direct mapping for an occurrence name. Case-sensitive.
pub fn mapped_feature_id(name: &str) -> Option<&'static str> {
    MAPPING_INDEX.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_names() {
        assert_eq!(mapped_feature_id("Promise.try"), Some("promise-try"));
        assert_eq!(mapped_feature_id("css-has-pseudo"), Some("has"));
        assert_eq!(mapped_feature_id("promise.try"), None);
    }

    #[test]
    fn names_are_unique() {
        assert_eq!(MAPPING_INDEX.len(), FEATURE_MAPPING.len());
    }
}
