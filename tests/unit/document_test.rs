//! Unit tests for the document model

use ansifence::document::PLACEHOLDER;
use ansifence::{Background, Document, Foreground, Node, Range, StylePatch, StyleSpan};

use crate::helpers::fg_span;

#[test]
fn wrapping_whole_text_run_replaces_it() {
    let mut doc = Document::new("abc");
    assert!(doc.wrap_range(Range::new(0, 3), StylePatch::bold()));
    assert_eq!(doc.nodes(), &[StyleSpan::new("abc").bold().into()]);
}

#[test]
fn wrapping_preserves_surrounding_content() {
    let mut doc = Document::from_nodes(vec![
        fg_span(Foreground::Red, "red").into(),
        Node::text(" plain "),
        fg_span(Foreground::Blue, "blue").into(),
    ]);
    assert!(doc.wrap_range(
        Range::new(4, 9),
        StylePatch::foreground(Foreground::Green.color())
    ));
    assert_eq!(
        doc.nodes(),
        &[
            fg_span(Foreground::Red, "red").into(),
            Node::text(" "),
            fg_span(Foreground::Green, "plain").into(),
            Node::text(" "),
            fg_span(Foreground::Blue, "blue").into(),
        ]
    );
    assert_eq!(doc.text(), "red plain blue");
}

#[test]
fn nested_application_overrides_only_patched_fields() {
    let mut doc = Document::from_nodes(vec![fg_span(Foreground::Red, "abcd").bold().into()]);
    let bg = Background::Gray.color();
    assert!(doc.wrap_range(Range::new(0, 4), StylePatch::background(bg)));
    assert_eq!(
        doc.nodes(),
        &[fg_span(Foreground::Red, "abcd").bold().with_background(bg).into()]
    );

    assert!(doc.wrap_range(
        Range::new(1, 2),
        StylePatch::foreground(Foreground::Cyan.color())
    ));
    assert_eq!(
        doc.nodes()[1],
        fg_span(Foreground::Cyan, "b")
            .bold()
            .with_background(bg)
            .into()
    );
}

#[test]
fn collapsed_selection_leaves_document_unchanged() {
    let mut doc = Document::new("unchanged");
    let before = doc.clone();
    assert!(!doc.wrap_range(Range::new(3, 3), StylePatch::underline()));
    assert_eq!(doc, before);
}

#[test]
fn multibyte_text_splits_on_characters() {
    let mut doc = Document::new("héllo wörld");
    assert!(doc.wrap_range(Range::new(6, 11), StylePatch::bold()));
    assert_eq!(
        doc.nodes(),
        &[Node::text("héllo "), StyleSpan::new("wörld").bold().into()]
    );
    assert_eq!(doc.char_len(), 11);
}

#[test]
fn contains_rejects_collapsed_and_overlong_ranges() {
    let doc = Document::new("abc");
    assert!(doc.contains(Range::new(0, 3)));
    assert!(!doc.contains(Range::new(0, 0)));
    assert!(!doc.contains(Range::new(2, 4)));
}

#[test]
fn placeholder_document() {
    let doc = Document::placeholder();
    assert_eq!(doc.nodes(), &[Node::text(PLACEHOLDER)]);
}

#[test]
fn json_round_trip_keeps_spans() {
    let doc = Document::from_nodes(vec![
        Node::text("a"),
        fg_span(Foreground::Pink, "b").underline().into(),
    ]);
    let json = serde_json::to_string(&doc).unwrap();
    assert!(json.contains(r##""foreground":"#ff00ff""##));
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn json_with_empty_span_is_normalized() {
    let doc: Document = serde_json::from_str(r#"[{"type": "span", "text": ""}]"#).unwrap();
    assert!(doc.is_empty());
}
