use criterion::{criterion_group, criterion_main, Criterion};
use scribe_core::{CharFormat, RichText, Selection, SelectionStyleResolver, StyleFlags};
use std::hint::black_box;

fn striped_document(paragraphs: usize) -> RichText {
    let line = "The quick brown fox jumps over the lazy dog.\n";
    let mut doc = RichText::from_plain_text(&line.repeat(paragraphs), CharFormat::default());
    let len = doc.len();
    let mut start = 0;
    while start < len {
        doc.set_selection(start, 5);
        let _ = doc.set_style(StyleFlags::BOLD, true);
        let _ = doc.set_font_size(12.0 + (start % 7) as f32);
        start += 11;
    }
    doc
}

fn bench_resolve_uniform(c: &mut Criterion) {
    let doc = RichText::from_plain_text(&"uniform text ".repeat(2_000), CharFormat::default());
    let selection = Selection::new(0, doc.len());

    c.bench_function("resolve_uniform_26k", |b| {
        b.iter(|| SelectionStyleResolver::resolve(black_box(&doc), black_box(selection)));
    });
}

fn bench_resolve_mixed(c: &mut Criterion) {
    let doc = striped_document(500);
    let selection = Selection::new(0, doc.len());

    c.bench_function("resolve_mixed_runs", |b| {
        b.iter(|| SelectionStyleResolver::resolve(black_box(&doc), black_box(selection)));
    });
}

fn bench_toggle_bold(c: &mut Criterion) {
    let mut doc = striped_document(200);
    let len = doc.len();

    c.bench_function("toggle_bold_whole_document", |b| {
        let mut on = false;
        b.iter(|| {
            doc.set_selection(0, len);
            on = !on;
            let _ = doc.set_style(black_box(StyleFlags::BOLD), on);
        });
    });
}

fn bench_insert_text(c: &mut Criterion) {
    c.bench_function("type_200_chars", |b| {
        b.iter(|| {
            let mut doc = RichText::default();
            for _ in 0..200 {
                let _ = doc.replace_selection(black_box("x"));
            }
            doc
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_uniform,
    bench_resolve_mixed,
    bench_toggle_bold,
    bench_insert_text
);
criterion_main!(benches);
