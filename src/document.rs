//! Styled document model.
//!
//! A [`Document`] is the content of the editing surface at a point in time:
//! an ordered list of plain text runs and styled spans. Styles are applied by
//! wrapping a character range in a new [`StyleSpan`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::palette::Color;

/// Text shown in a fresh or reset document.
pub const PLACEHOLDER: &str = "Welcome to Discord Colored Text Generator!";

/// A contiguous run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleSpan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub underline: bool,
    pub text: String,
}

impl StyleSpan {
    /// An unstyled span over `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Same style, different text.
    fn restyle(&self, text: String) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }
}

/// Style to apply to a selection. Unset fields keep the base style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StylePatch {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl StylePatch {
    pub fn foreground(color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..Self::default()
        }
    }

    pub fn background(color: Color) -> Self {
        Self {
            background: Some(color),
            ..Self::default()
        }
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn underline() -> Self {
        Self {
            underline: true,
            ..Self::default()
        }
    }

    /// Overlay this patch on `base`, producing a span over `text`.
    fn apply(&self, base: Option<&StyleSpan>, text: String) -> StyleSpan {
        let mut span = match base {
            Some(base) => base.restyle(text),
            None => StyleSpan::new(text),
        };
        if self.foreground.is_some() {
            span.foreground = self.foreground;
        }
        if self.background.is_some() {
            span.background = self.background;
        }
        span.bold |= self.bold;
        span.underline |= self.underline;
        span
    }
}

/// One item of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Unstyled text, exported verbatim.
    Text { text: String },
    /// Styled text.
    Span(StyleSpan),
    /// Any other node kind. Carries no text and is skipped on export.
    #[serde(other)]
    Unknown,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Text content, empty for unknown nodes.
    pub fn content(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Span(span) => &span.text,
            Self::Unknown => "",
        }
    }

    fn char_len(&self) -> usize {
        self.content().chars().count()
    }

    fn with_content(&self, text: String) -> Self {
        match self {
            Self::Text { .. } => Self::Text { text },
            Self::Span(span) => Self::Span(span.restyle(text)),
            Self::Unknown => Self::Unknown,
        }
    }

    fn is_empty_text(&self) -> bool {
        !matches!(self, Self::Unknown) && self.content().is_empty()
    }
}

impl From<StyleSpan> for Node {
    fn from(span: StyleSpan) -> Self {
        Self::Span(span)
    }
}

/// Half-open `[start, end)` range in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start >= self.end
    }
}

impl std::str::FromStr for Range {
    type Err = String;

    /// Parses `START..END`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| format!("Invalid range '{}': expected START..END", s))?;
        let start = start
            .trim()
            .parse()
            .map_err(|_| format!("Invalid range start '{}'", start))?;
        let end = end
            .trim()
            .parse()
            .map_err(|_| format!("Invalid range end '{}'", end))?;
        Ok(Self { start, end })
    }
}

/// The editable content: ordered text runs and styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Node>", into = "Vec<Node>")]
pub struct Document {
    nodes: Vec<Node>,
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self::from_nodes(nodes)
    }
}

impl From<Document> for Vec<Node> {
    fn from(doc: Document) -> Self {
        doc.nodes
    }
}

impl Document {
    /// A document holding a single plain text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_nodes(vec![Node::text(text)])
    }

    /// The initial content of the editing surface.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER)
    }

    /// Build from nodes, dropping zero-length text runs and spans.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes: nodes.into_iter().filter(|n| !n.is_empty_text()).collect(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flattened text content.
    pub fn text(&self) -> String {
        self.nodes.iter().map(Node::content).collect()
    }

    /// Length of the flattened text in characters.
    pub fn char_len(&self) -> usize {
        self.nodes.iter().map(Node::char_len).sum()
    }

    /// Whether `range` is a non-empty selection inside this document.
    pub fn contains(&self, range: Range) -> bool {
        !range.is_collapsed() && range.end <= self.char_len()
    }

    /// Replace the content with the placeholder text.
    pub fn reset(&mut self) {
        self.reset_to(PLACEHOLDER);
    }

    /// Replace the content with a single text run.
    pub fn reset_to(&mut self, text: &str) {
        *self = Self::new(text);
    }

    /// Wrap `range` in a new span styled by `patch`.
    ///
    /// Nodes cut by the range boundaries are split; everything outside the
    /// range is left as it was. A range inside a single node keeps that
    /// node's style under the patch. A range covering several nodes becomes
    /// one span carrying only the patch.
    ///
    /// Returns `false` without touching the document if the range is
    /// collapsed or runs past the end of the text.
    pub fn wrap_range(&mut self, range: Range, patch: StylePatch) -> bool {
        if !self.contains(range) {
            debug!(?range, len = self.char_len(), "ignoring selection outside document");
            return false;
        }

        let mut before = Vec::new();
        let mut after = Vec::new();
        let mut selected = String::new();
        let mut covered: Vec<&Node> = Vec::new();
        let mut pos = 0;

        for node in &self.nodes {
            let len = node.char_len();
            let (node_start, node_end) = (pos, pos + len);
            pos = node_end;

            if len == 0 {
                // Unknown nodes strictly inside the selection are swallowed.
                if node_start <= range.start {
                    before.push(node.clone());
                } else if node_start >= range.end {
                    after.push(node.clone());
                }
                continue;
            }
            if node_end <= range.start {
                before.push(node.clone());
                continue;
            }
            if node_start >= range.end {
                after.push(node.clone());
                continue;
            }

            let content = node.content();
            let cut_start = range.start.saturating_sub(node_start);
            let cut_end = range.end.min(node_end) - node_start;
            let (head, rest) = split_chars(content, cut_start);
            let (middle, tail) = split_chars(rest, cut_end - cut_start);

            if !head.is_empty() {
                before.push(node.with_content(head.to_string()));
            }
            selected.push_str(middle);
            covered.push(node);
            if !tail.is_empty() {
                after.push(node.with_content(tail.to_string()));
            }
        }

        let base = match covered.as_slice() {
            [Node::Span(span)] => Some(span),
            _ => None,
        };
        trace!(
            covered = covered.len(),
            inherits = base.is_some(),
            "wrapping selection"
        );
        let span = patch.apply(base, selected);

        let mut nodes = before;
        nodes.push(Node::Span(span));
        nodes.extend(after);
        self.nodes = nodes;
        true
    }
}

/// Split `s` after `n` characters.
fn split_chars(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}
