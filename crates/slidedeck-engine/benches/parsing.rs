use criterion::{Criterion, criterion_group, criterion_main};
use slidedeck_engine::{Syntax, parse_document, to_html};
use xi_rope::Rope;
mod common;

fn bench_segmenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let rope = Rope::from(common::generate_deck_content(200));
    let syntax = Syntax::default();
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&rope), &syntax).unwrap();
            std::hint::black_box(doc);
        });
    });

    let doc = parse_document(&rope, &syntax).unwrap();
    group.bench_function("to_html", |b| {
        b.iter(|| std::hint::black_box(to_html(std::hint::black_box(&doc))));
    });

    group.finish();
}

criterion_group!(benches, bench_segmenter);
criterion_main!(benches);
