use criterion::{criterion_group, criterion_main, Criterion};
use scribe_core::Selection;
use scribe_text::FontCatalog;
use scribe_toolbar::{Command, RichTextEditor, ToolbarConfig, ToolbarState};
use std::hint::black_box;

fn editor_with_text() -> RichTextEditor {
    let mut editor = RichTextEditor::with_config(
        ToolbarConfig::default(),
        FontCatalog::from_families(["Arial", "Georgia", "Times New Roman"]),
    );
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n".repeat(200);
    let _ = editor.execute(Command::InsertText(text));
    editor.pump();
    editor
}

fn bench_selection_refresh(c: &mut Criterion) {
    let mut editor = editor_with_text();
    let len = editor.document().len();

    c.bench_function("select_and_refresh_toolbar", |b| {
        let mut start = 0;
        b.iter(|| {
            start = (start + 97) % len;
            let _ = editor.execute(Command::Select(Selection::new(start, (len - start).min(400))));
            black_box(editor.pump());
        });
    });
}

fn bench_capture_state(c: &mut Criterion) {
    let editor = editor_with_text();
    c.bench_function("capture_toolbar_state", |b| {
        b.iter(|| ToolbarState::capture(black_box(editor.document()), editor.catalog(), false));
    });
}

criterion_group!(benches, bench_selection_refresh, bench_capture_state);
criterion_main!(benches);
