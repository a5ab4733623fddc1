use baseline_analysis::baseline::{BaselineClassifier, FeatureTable};
use baseline_analysis::engine::detect_features;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn program_source(repeat: usize) -> String {
    let block = "\
const { promise, resolve } = Promise.withResolvers();
const last = items.at(-1);
Promise.try(() => load(last)).then(resolve);
const groups = Object.groupBy(items, (item) => item.kind);
class Store {
  #cache = new Map();
  get(key) { return this.#cache.get(key); }
}
";
    block.repeat(repeat)
}

fn stylesheet_source(repeat: usize) -> String {
    let block = "\
@layer components;
.card:has(img) { gap: 1rem; width: clamp(10rem, 50%, 40rem); }
@container (min-width: 400px) { .card { aspect-ratio: 16 / 9; } }
:where(ul, ol) { padding: 0; }
";
    block.repeat(repeat)
}

fn bench_detection(c: &mut Criterion) {
    let program = program_source(100);
    let sheet = stylesheet_source(100);

    c.bench_function("detect_program_900_lines", |b| {
        b.iter(|| detect_features(black_box(&program), "bench.js"))
    });
    c.bench_function("detect_stylesheet_400_lines", |b| {
        b.iter(|| detect_features(black_box(&sheet), "bench.css"))
    });
}

fn bench_classification(c: &mut Criterion) {
    let table = FeatureTable::bundled().expect("bundled data");
    let classifier = BaselineClassifier::new(&table);
    let features = detect_features(&program_source(100), "bench.js");

    c.bench_function("classify_program_occurrences", |b| {
        b.iter(|| classifier.analyze(black_box(&features)))
    });
}

criterion_group!(benches, bench_detection, bench_classification);
criterion_main!(benches);
