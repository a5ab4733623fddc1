use baseline_analysis::baseline::{
    dedupe, filter_by_policy, BaselineClassifier, FeatureTable, MaturityStatus,
};
use baseline_analysis::engine::detect_features;
use baseline_core::types::{DetectedFeature, SourceKind, TargetPolicy};
use proptest::prelude::*;

const PROGRAM_LINES: &[&str] = &[
    "Promise.try(() => load());",
    "const { promise } = Promise.withResolvers();",
    "const last = items.at(-1);",
    "const groups = Object.groupBy(items, key);",
    "const id = crypto.randomUUID();",
    "class A { #secret = 1; }",
    "await ready;",
    "function f() { return 1; }",
    "let x = 2;",
];

const SHEET_LINES: &[&str] = &[
    ".a:has(img) { color: red; }",
    ".b { width: clamp(1rem, 2vw, 3rem); }",
    "@container (min-width: 400px) { .c { gap: 1rem; } }",
    ":is(h1, h2) { margin: 0; }",
    "@layer base;",
    ".d { aspect-ratio: 1; color-scheme: dark; }",
    ".e { color: blue; }",
];

const NAMES: &[&str] = &[
    "Promise.try",
    "Array.prototype.at",
    "css-has-pseudo",
    "css-row-gap",
    "top-level-await",
    "Unmapped.thing",
];

const FILES: &[&str] = &["a.js", "b.ts", "c.css"];

fn arb_source(lines: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(lines), 0..12).prop_map(|ls| ls.join("\n"))
}

fn arb_feature() -> impl Strategy<Value = DetectedFeature> {
    (prop::sample::select(NAMES), prop::sample::select(FILES), 1u32..50).prop_map(|(name, file, line)| {
        let kind = if file.ends_with(".css") {
            SourceKind::Stylesheet
        } else {
            SourceKind::Program
        };
        DetectedFeature::new(name, kind, file, Some(line))
    })
}

const RECORDS: &[&str] = &[
    r#"{ "status": { "baseline": "high" } }"#,
    r#"{ "status": { "baseline": "low" } }"#,
    r#"{ "status": { "baseline": false } }"#,
    r#"{ "status": { "baseline": 7 } }"#,
    r#"{ "name": "no status" }"#,
    r#""not an object""#,
];

fn arb_record() -> impl Strategy<Value = &'static str> {
    prop::sample::select(RECORDS)
}

fn arb_policy() -> impl Strategy<Value = TargetPolicy> {
    prop_oneof![
        Just(TargetPolicy::Widely),
        Just(TargetPolicy::Newly),
        Just(TargetPolicy::All),
    ]
}

proptest! {
    #[test]
    fn program_detection_is_deterministic(source in arb_source(PROGRAM_LINES)) {
        prop_assert_eq!(detect_features(&source, "a.js"), detect_features(&source, "a.js"));
    }

    #[test]
    fn stylesheet_detection_is_deterministic(source in arb_source(SHEET_LINES)) {
        prop_assert_eq!(detect_features(&source, "a.css"), detect_features(&source, "a.css"));
    }

    #[test]
    fn classification_is_idempotent(features in prop::collection::vec(arb_feature(), 0..30)) {
        let table = FeatureTable::bundled().unwrap();
        let classifier = BaselineClassifier::new(&table);

        let first = classifier.analyze(&features);
        let survivors: Vec<DetectedFeature> = first.iter().map(|a| a.feature.clone()).collect();
        prop_assert_eq!(&classifier.analyze(&survivors), &first);
        prop_assert_eq!(&classifier.analyze(&dedupe(&features)), &first);
    }

    #[test]
    fn tier_mapping_holds_for_every_record(tiers in prop::collection::vec(arb_record(), 1..8)) {
        let body: Vec<String> = tiers
            .iter()
            .enumerate()
            .map(|(i, record)| format!("\"feature-{i}\": {record}"))
            .collect();
        let table = FeatureTable::from_json_str(&format!("{{ {} }}", body.join(", "))).unwrap();
        let classifier = BaselineClassifier::new(&table);

        for (i, record) in tiers.iter().enumerate() {
            let expected = if record.contains("\"high\"") {
                MaturityStatus::Widely
            } else if record.contains("\"low\"") {
                MaturityStatus::Newly
            } else {
                MaturityStatus::Limited
            };
            prop_assert_eq!(classifier.baseline_status(&format!("feature-{i}")).status, expected);
        }
        prop_assert_eq!(classifier.baseline_status("absent-id").status, MaturityStatus::Unknown);
    }

    #[test]
    fn policy_filter_is_correct(
        features in prop::collection::vec(arb_feature(), 0..30),
        policy in arb_policy(),
    ) {
        let table = FeatureTable::bundled().unwrap();
        let analyses = BaselineClassifier::new(&table).analyze(&features);
        let filtered = filter_by_policy(analyses.clone(), policy);

        match policy {
            TargetPolicy::All => {
                prop_assert_eq!(&filtered, &analyses);
            }
            TargetPolicy::Widely => {
                prop_assert!(filtered.iter().all(|a| a.baseline.status != MaturityStatus::Widely));
            }
            TargetPolicy::Newly => {
                prop_assert!(filtered.iter().all(|a| matches!(
                    a.baseline.status,
                    MaturityStatus::Limited | MaturityStatus::Unknown
                )));
            }
        }
    }
}
