//! Editing surface workflows, from selection to export

use ansifence::document::PLACEHOLDER;
use ansifence::{Background, Document, Editor, ExportMode, Foreground, Range};

fn editor_with(text: &str) -> Editor {
    let mut editor = Editor::new();
    editor.attach(Document::new(text));
    editor
}

#[test]
fn fresh_editor_exports_placeholder() {
    let mut editor = Editor::new();
    let out = editor.export_current_document().unwrap();
    assert_eq!(out.as_str(), format!("```ansi\n{}\n```", PLACEHOLDER));
}

#[test]
fn empty_document_exports_bare_fences() {
    let mut editor = Editor::new();
    editor.attach(Document::default());
    let out = editor.export_with(ExportMode::Preserve).unwrap();
    assert_eq!(out.as_str(), "```ansi\n\n```");
}

#[test]
fn color_then_export() {
    let mut editor = editor_with("hi");
    editor.set_text_color(Foreground::Red);
    editor.select(Range::new(0, 2));
    assert!(editor.apply_text_color());

    let out = editor.export_current_document().unwrap();
    assert_eq!(out.as_str(), "```ansi\n\x1b[2;31mhi\x1b[0m\n```");
}

#[test]
fn stacked_styles_on_one_selection() {
    let mut editor = editor_with("x");
    editor.set_text_color(Foreground::Red);
    editor.set_background_color(Background::MarbleBlue);

    for step in [
        Editor::apply_text_color as fn(&mut Editor) -> bool,
        Editor::apply_background_color,
        Editor::apply_bold,
    ] {
        editor.select(Range::new(0, 1));
        assert!(step(&mut editor));
    }

    let out = editor.export_with(ExportMode::Preserve).unwrap();
    assert_eq!(
        out.body(),
        "\x1b[2;31m\x1b[2;42m\x1b[1mx\x1b[22m\x1b[0m"
    );
}

#[test]
fn underline_wraps_outside_bold() {
    let mut editor = editor_with("u");
    editor.select(Range::new(0, 1));
    assert!(editor.apply_bold());
    editor.select(Range::new(0, 1));
    assert!(editor.apply_underline());

    let out = editor.export_with(ExportMode::Preserve).unwrap();
    assert_eq!(
        out.body(),
        "\x1b[2;37m\x1b[4m\x1b[1mu\x1b[22m\x1b[24m\x1b[0m"
    );
}

#[test]
fn export_without_reset_is_idempotent() {
    let mut editor = editor_with("same");
    editor.select(Range::new(1, 3));
    editor.apply_underline();

    let first = editor.export_with(ExportMode::Preserve).unwrap();
    let second = editor.export_with(ExportMode::Preserve).unwrap();
    assert_eq!(first, second);
}

#[test]
fn collapsed_selection_changes_nothing() {
    let mut editor = editor_with("steady");
    let before = editor.clone();
    editor.select(Range::new(4, 4));

    assert!(!editor.apply_text_color());
    assert!(!editor.apply_background_color());
    assert!(!editor.apply_bold());
    assert!(!editor.apply_underline());
    assert_eq!(editor.document(), before.document());
}

#[test]
fn style_application_clears_selection() {
    let mut editor = editor_with("abcdef");
    editor.select(Range::new(0, 3));
    assert!(editor.apply_bold());
    assert_eq!(editor.current_selection(), None);
    // A second apply has nothing to work on.
    assert!(!editor.apply_underline());
}

#[test]
fn destructive_export_resets_to_placeholder() {
    let mut editor = editor_with("draft message");
    editor.select(Range::new(0, 5));
    editor.apply_text_color();

    let out = editor.export_current_document().unwrap();
    assert!(out.body().contains("draft"));
    assert_eq!(editor.document(), Some(&Document::placeholder()));

    let again = editor.export_current_document().unwrap();
    assert_eq!(again.body(), PLACEHOLDER);
}

#[test]
fn detached_editor_is_inert() {
    let mut editor = Editor::detached();
    editor.select(Range::new(0, 3));

    assert!(!editor.apply_text_color());
    assert!(!editor.apply_bold());
    assert_eq!(editor.export_current_document(), None);
    editor.reset_document();
    assert_eq!(editor.document(), None);
}

#[test]
fn detach_hands_back_document_and_drops_selection() {
    let mut editor = editor_with("detach me");
    editor.select(Range::new(0, 6));

    assert_eq!(editor.detach(), Some(Document::new("detach me")));
    assert_eq!(editor.current_selection(), None);
    assert_eq!(editor.export_current_document(), None);

    editor.attach(Document::new("back"));
    let out = editor.export_with(ExportMode::Preserve).unwrap();
    assert_eq!(out.into_string(), "```ansi\nback\n```");
}

#[test]
fn cleared_selection_blocks_styling() {
    let mut editor = editor_with("abc");
    editor.select(Range::new(0, 2));
    editor.clear_selection();
    assert!(!editor.apply_underline());
    assert_eq!(editor.document(), Some(&Document::new("abc")));
}

#[test]
fn picked_colors_survive_export() {
    let mut editor = editor_with("abc");
    editor.set_text_color(Foreground::Yellow);
    editor.set_background_color(Background::Indigo);
    editor.export_current_document();

    assert_eq!(editor.text_color(), Foreground::Yellow);
    assert_eq!(editor.background_color(), Background::Indigo);
}
