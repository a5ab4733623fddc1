//! Tests for the built-in detectors and the orchestrator.

use std::path::Path;

use baseline_analysis::detectors::program::LegacyProgramScanner;
use baseline_analysis::detectors::stylesheet::LegacyStylesheetScanner;
use baseline_analysis::detectors::{builtin_registry, FeatureDetector};
use baseline_analysis::engine::{detect_features, DetectionContext, FeatureScanner, ScanOptions};
use baseline_analysis::parsers::{parse_program, parse_stylesheet};
use baseline_analysis::scanner::SourceLanguage;
use baseline_core::types::{DetectedFeature, SourceKind};

fn named(features: &[DetectedFeature]) -> Vec<(&str, Option<u32>)> {
    features.iter().map(|f| (f.name.as_str(), f.line)).collect()
}

// ---- Program detectors ----

#[test]
fn test_promise_try_on_two_lines() {
    let source = "Promise.try(() => x);\nconst y = 2;\nPromise.try(() => y);\n";
    let features = detect_features(source, "src/app.js");

    assert_eq!(named(&features), vec![("Promise.try", Some(1)), ("Promise.try", Some(3))]);
    assert!(features.iter().all(|f| f.kind == SourceKind::Program && f.file == "src/app.js"));
}

#[test]
fn test_promise_try_requires_bare_promise_identifier() {
    let source = "window.Promise.try(f);\nMyPromise.try(f);\nPromise.tryLater(f);\n";
    assert!(detect_features(source, "a.js").is_empty());
}

#[test]
fn test_with_resolvers_reported_by_detector_and_residual_scanner() {
    let source = "const { promise, resolve } = Promise.withResolvers();\n";
    let features = detect_features(source, "a.js");

    assert_eq!(
        named(&features),
        vec![("Promise.withResolvers", Some(1)), ("Promise.withResolvers", Some(1))]
    );
}

#[test]
fn test_at_matches_any_receiver() {
    let source = "arr.at(-1);\n'text'.at(0);\nconst f = obj.at;\nlist?.at(2);\n";
    let features = detect_features(source, "a.js");

    assert_eq!(
        named(&features),
        vec![
            ("Array.prototype.at", Some(1)),
            ("Array.prototype.at", Some(2)),
            ("Array.prototype.at", Some(3)),
            ("Array.prototype.at", Some(4)),
        ]
    );
}

#[test]
fn test_typescript_and_tsx_sources() {
    let ts = "const p: Promise<number> = Promise.try(() => 1);\n";
    assert_eq!(named(&detect_features(ts, "a.ts")), vec![("Promise.try", Some(1))]);

    let tsx = "const el = <div>{items.at(0)}</div>;\n";
    assert_eq!(named(&detect_features(tsx, "a.tsx")), vec![("Array.prototype.at", Some(1))]);

    let jsx = "const el = <span>{Promise.try(load)}</span>;\n";
    assert_eq!(named(&detect_features(jsx, "a.jsx")), vec![("Promise.try", Some(1))]);
}

#[test]
fn test_residual_static_apis() {
    let source = "const g = Object.groupBy(items, key);\nconst id = crypto.randomUUID();\nconst all = await Array.fromAsync(stream);\n";
    let features = detect_features(source, "a.js");

    assert_eq!(
        named(&features),
        vec![
            ("Object.groupBy", Some(1)),
            ("crypto.randomUUID", Some(2)),
            ("top-level-await", Some(3)),
            ("Array.fromAsync", Some(3)),
        ]
    );
}

#[test]
fn test_residual_prototype_prefix() {
    let source = "const last = Array.prototype.findLast.call(list, pred);\n";
    let features = detect_features(source, "a.js");
    assert_eq!(named(&features), vec![("Array.prototype", Some(1))]);
}

#[test]
fn test_private_class_fields() {
    let source = "class Counter {\n  #count = 0;\n  inc() { this.#count++; }\n}\n";
    assert_eq!(named(&detect_features(source, "a.js")), vec![("class-private-fields", Some(2))]);

    let ts = "class Counter {\n  #count: number = 0;\n}\n";
    assert_eq!(named(&detect_features(ts, "a.ts")), vec![("class-private-fields", Some(2))]);
}

#[test]
fn test_top_level_await_only_outside_functions() {
    let source = "const data = await load();\nasync function f() { await g(); }\nconst h = async () => { await i(); };\nclass A { async m() { await j(); } }\n";
    assert_eq!(named(&detect_features(source, "a.js")), vec![("top-level-await", Some(1))]);
}

// ---- Stylesheet detectors ----

#[test]
fn test_has_selector_and_math_function() {
    let source = ".card:has(img) { color: red; }\n.box { width: clamp(10px, 5%, 40px); }\n";
    let features = detect_features(source, "styles/site.css");

    assert_eq!(
        named(&features),
        vec![("css-has-pseudo", Some(1)), ("css-math-functions", Some(2))]
    );
    assert!(features.iter().all(|f| f.kind == SourceKind::Stylesheet));
}

#[test]
fn test_math_functions_once_per_declaration() {
    let source = ".a {\n  width: min(100%, max(10px, 2vw));\n  height: 10px;\n}\n";
    assert_eq!(named(&detect_features(source, "a.css")), vec![("css-math-functions", Some(2))]);
}

#[test]
fn test_container_queries() {
    let source = "@container (min-width: 400px) {\n  .a { color: red; }\n}\n.sidebar { container-type: inline-size; }\n";
    assert_eq!(
        named(&detect_features(source, "a.css")),
        vec![("css-container-queries", Some(1)), ("css-container-queries", Some(4))]
    );
}

#[test]
fn test_is_where_selectors() {
    let source = ":is(h1, h2) { margin: 0; }\n:where(ul, ol) { padding: 0; }\n";
    assert_eq!(
        named(&detect_features(source, "a.css")),
        vec![("css-is-where-pseudo", Some(1)), ("css-is-where-pseudo", Some(2))]
    );
}

#[test]
fn test_residual_stylesheet_properties_and_at_rules() {
    let source = "@layer base, components;\n.grid {\n  gap: 1rem;\n  aspect-ratio: 16 / 9;\n  color: red;\n}\n";
    assert_eq!(
        named(&detect_features(source, "a.scss")),
        vec![("css-cascade-layers", Some(1)), ("css-gap", Some(3)), ("css-aspect-ratio", Some(4))]
    );
}

#[test]
fn test_scss_variables_do_not_hide_declarations() {
    let source = "$w: clamp(1px, 2px, 3px);\n.a { gap: $w; }\n";
    assert_eq!(
        named(&detect_features(source, "a.scss")),
        vec![("css-math-functions", Some(1)), ("css-gap", Some(2))]
    );
}

#[test]
fn test_scss_variables_inside_nested_rules() {
    let source = "$space: 1rem;\n.grid {\n  gap: $space;\n  width: min($max, 100%);\n  &:has(img) { row-gap: $space * 2; }\n}\n";
    assert_eq!(
        named(&detect_features(source, "theme/_grid.scss")),
        vec![
            ("css-has-pseudo", Some(5)),
            ("css-math-functions", Some(4)),
            ("css-gap", Some(3)),
            ("css-row-gap", Some(5)),
        ]
    );
}

#[test]
fn test_scope_at_rule() {
    let source = "@scope (.card) {\n  img { border: 0; }\n}\n";
    assert_eq!(named(&detect_features(source, "a.css")), vec![("css-scope", Some(1))]);
}

#[test]
fn test_property_at_rule() {
    let source = "@property --angle {\n  syntax: '<angle>';\n  inherits: false;\n}\n";
    assert_eq!(named(&detect_features(source, "a.css")), vec![("css-at-property", Some(1))]);
}

#[test]
fn test_starting_style_at_rule() {
    let source = "@starting-style {\n  .dialog { opacity: 0; }\n}\n";
    assert_eq!(named(&detect_features(source, "a.css")), vec![("css-starting-style", Some(1))]);
}

#[test]
fn test_at_rules_on_consecutive_lines() {
    let source = "@container (min-width: 1px) { .a { color: red; } }\n\
                  @scope (.card) { img { border: 0; } }\n\
                  @starting-style { .a { opacity: 0; } }\n\
                  @property --x { syntax: '*'; inherits: false; }\n";
    assert_eq!(
        named(&detect_features(source, "a.css")),
        vec![
            ("css-container-queries", Some(1)),
            ("css-scope", Some(2)),
            ("css-starting-style", Some(3)),
            ("css-at-property", Some(4)),
        ]
    );
}

// ---- Routing ----

#[test]
fn test_unrecognized_extension_yields_nothing() {
    assert!(detect_features("Promise.try(f);", "notes.md").is_empty());
    assert!(detect_features("Promise.try(f);", "Makefile").is_empty());
    assert!(detect_features(".a:has(b) {}", "a.less").is_empty());
}

#[test]
fn test_extension_match_is_case_insensitive() {
    assert_eq!(named(&detect_features("Promise.try(f);\n", "APP.JS")), vec![("Promise.try", Some(1))]);
}

#[test]
fn test_program_with_syntax_errors_is_dropped_unless_tolerated() {
    let source = "Promise.try(f);\nconst = ;\n";
    assert!(detect_features(source, "a.js").is_empty());

    let scanner = FeatureScanner::new(builtin_registry()).with_options(ScanOptions {
        tolerate_parse_errors: true,
    });
    let features = scanner.detect(source, "a.js");
    assert!(features.iter().any(|f| f.name == "Promise.try" && f.line == Some(1)));
}

#[test]
fn test_detection_is_deterministic() {
    let program = "Promise.try(a);\nx.at(1);\nObject.groupBy(a, b);\nclass A { #p = 1 }\nawait z;\n";
    let sheet = "@layer a;\n.b:has(c) { gap: clamp(1px, 2px, 3px); }\n";
    assert_eq!(detect_features(program, "a.js"), detect_features(program, "a.js"));
    assert_eq!(detect_features(sheet, "a.css"), detect_features(sheet, "a.css"));
}

// ---- Kind isolation ----

#[test]
fn test_every_detector_ignores_the_other_kind() {
    let program_src = "Promise.try(a); Promise.withResolvers(); x.at(0); Object.groupBy(a, b);\n";
    let program_tree =
        parse_program(program_src, Path::new("a.js"), SourceLanguage::JavaScript, false).unwrap();
    let program_ctx = DetectionContext::program(program_src, "a.js", &program_tree);

    let sheet_src =
        "@container (min-width: 1px) { .a { gap: 1px; } }\n.b:has(c) { width: clamp(1px, 2px, 3px); }\n:is(h1) { margin: 0; }\n";
    let sheet_tree = parse_stylesheet(sheet_src, Path::new("a.css"), SourceLanguage::Css).unwrap();
    let sheet_ctx = DetectionContext::stylesheet(sheet_src, "a.css", &sheet_tree);

    let mut detectors: Vec<&dyn FeatureDetector> = builtin_registry().get_all();
    detectors.push(&LegacyProgramScanner);
    detectors.push(&LegacyStylesheetScanner);

    for detector in detectors {
        let (own, other) = match detector.kind() {
            SourceKind::Program => (&program_ctx, &sheet_ctx),
            SourceKind::Stylesheet => (&sheet_ctx, &program_ctx),
        };
        assert!(
            detector.detect(other).is_empty(),
            "{} reported features for the wrong kind",
            detector.id()
        );
        assert!(!detector.detect(own).is_empty(), "{} found nothing", detector.id());
    }
}
