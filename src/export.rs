//! Serializes a [`Document`] into a fenced `ansi` code block.
//!
//! Each styled span becomes one escape group:
//!
//! ```text
//! ESC[2;3Xm [ESC[2;4Ym] [ESC[4m] [ESC[1m] text [ESC[22m] [ESC[24m] ESC[0m
//! ```
//!
//! Plain text runs are copied verbatim and unknown nodes are skipped.

use std::fmt;

use tracing::debug;

use crate::document::{Document, Node, StyleSpan};
use crate::palette::{background_code, foreground_code, EscapeCode, Foreground};

/// Opening fence of the code block, including its newline.
pub const FENCE_OPEN: &str = "```ansi\n";
/// Closing fence of the code block, including its leading newline.
pub const FENCE_CLOSE: &str = "\n```";

/// The exported, escape-coded text. Derived from a document and never
/// updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportString(String);

impl ExportString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The content between the fences.
    pub fn body(&self) -> &str {
        &self.0[FENCE_OPEN.len()..self.0.len() - FENCE_CLOSE.len()]
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExportString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialize `doc` into its export string.
pub fn serialize(doc: &Document) -> ExportString {
    let body = render_body(doc);
    let mut out = String::with_capacity(FENCE_OPEN.len() + body.len() + FENCE_CLOSE.len());
    out.push_str(FENCE_OPEN);
    out.push_str(&body);
    out.push_str(FENCE_CLOSE);
    debug!(
        nodes = doc.nodes().len(),
        bytes = out.len(),
        "serialized document"
    );
    ExportString(out)
}

/// The escape-coded content without fences. Also usable as a terminal preview.
pub fn render_body(doc: &Document) -> String {
    let mut body = String::new();
    for node in doc.nodes() {
        match node {
            Node::Text { text } => body.push_str(text),
            Node::Span(span) => body.push_str(&render_span(span)),
            Node::Unknown => {}
        }
    }
    body
}

/// One span's escape group, closed by a full reset.
pub fn render_span(span: &StyleSpan) -> String {
    let mut out = String::new();

    let fg = span
        .foreground
        .map_or(Foreground::FALLBACK.code(), foreground_code);
    fg.write_to(&mut out);
    if let Some(bg) = span.background.and_then(background_code) {
        bg.write_to(&mut out);
    }

    let mut inner = span.text.clone();
    if span.bold {
        inner = wrap(&inner, EscapeCode::BOLD_ON, EscapeCode::BOLD_OFF);
    }
    if span.underline {
        inner = wrap(&inner, EscapeCode::UNDERLINE_ON, EscapeCode::UNDERLINE_OFF);
    }
    out.push_str(&inner);

    EscapeCode::RESET.write_to(&mut out);
    out
}

fn wrap(text: &str, on: EscapeCode, off: EscapeCode) -> String {
    let mut out = String::with_capacity(text.len() + 10);
    on.write_to(&mut out);
    out.push_str(text);
    off.write_to(&mut out);
    out
}
