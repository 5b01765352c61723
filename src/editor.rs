//! The editing surface: one owned document plus the user's selection and
//! chosen palette entries.
//!
//! Every operation is a single user action that runs to completion. Actions
//! that need a selection or a document quietly do nothing when either is
//! missing.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::{Document, Range, StylePatch, PLACEHOLDER};
use crate::export::{self, ExportString};
use crate::palette::{Background, Foreground};

/// What happens to the document after an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// Replace the document with the placeholder (the classic behavior:
    /// every export finalizes a message).
    #[default]
    Reset,
    /// Leave the document as it is.
    Preserve,
}

/// Editor state. Serializable so a session can survive between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editor {
    #[serde(default)]
    document: Option<Document>,
    #[serde(default)]
    selection: Option<Range>,
    #[serde(default)]
    text_color: Foreground,
    #[serde(default)]
    background_color: Background,
    #[serde(default = "default_placeholder")]
    placeholder: String,
}

fn default_placeholder() -> String {
    PLACEHOLDER.to_string()
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// An editor showing the placeholder text.
    pub fn new() -> Self {
        Self::with_placeholder(PLACEHOLDER)
    }

    /// An editor whose fresh and reset content is `placeholder`.
    pub fn with_placeholder(placeholder: &str) -> Self {
        Self {
            document: Some(Document::new(placeholder)),
            selection: None,
            text_color: Foreground::default(),
            background_color: Background::default(),
            placeholder: placeholder.to_string(),
        }
    }

    /// An editor with no document attached.
    pub fn detached() -> Self {
        Self {
            document: None,
            ..Self::new()
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn attach(&mut self, document: Document) {
        self.document = Some(document);
        self.selection = None;
    }

    pub fn detach(&mut self) -> Option<Document> {
        self.selection = None;
        self.document.take()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn text_color(&self) -> Foreground {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Foreground) {
        self.text_color = color;
    }

    pub fn background_color(&self) -> Background {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Background) {
        self.background_color = color;
    }

    /// Store a selection. It is validated when read, not here.
    pub fn select(&mut self, range: Range) {
        self.selection = Some(range);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The selection, if it is non-empty and inside the attached document.
    pub fn current_selection(&self) -> Option<Range> {
        let range = self.selection?;
        let doc = self.document.as_ref()?;
        doc.contains(range).then_some(range)
    }

    /// Color the selection with the chosen text color.
    pub fn apply_text_color(&mut self) -> bool {
        self.apply(StylePatch::foreground(self.text_color.color()))
    }

    /// Color the selection's background with the chosen background color.
    pub fn apply_background_color(&mut self) -> bool {
        self.apply(StylePatch::background(self.background_color.color()))
    }

    pub fn apply_bold(&mut self) -> bool {
        self.apply(StylePatch::bold())
    }

    pub fn apply_underline(&mut self) -> bool {
        self.apply(StylePatch::underline())
    }

    /// Wrap the current selection with `patch` and drop the selection.
    pub fn apply(&mut self, patch: StylePatch) -> bool {
        let Some(range) = self.current_selection() else {
            debug!("no usable selection, style not applied");
            return false;
        };
        let Some(doc) = self.document.as_mut() else {
            return false;
        };
        let applied = doc.wrap_range(range, patch);
        if applied {
            self.selection = None;
        }
        applied
    }

    /// Replace the document with the placeholder text.
    pub fn reset_document(&mut self) {
        if let Some(doc) = self.document.as_mut() {
            doc.reset_to(&self.placeholder);
            self.selection = None;
        }
    }

    /// Export the document, then reset it to the placeholder.
    pub fn export_current_document(&mut self) -> Option<ExportString> {
        self.export_with(ExportMode::Reset)
    }

    /// Export the document, resetting it afterwards depending on `mode`.
    pub fn export_with(&mut self, mode: ExportMode) -> Option<ExportString> {
        let exported = export::serialize(self.document.as_ref()?);
        if mode == ExportMode::Reset {
            self.reset_document();
        }
        info!(bytes = exported.as_str().len(), ?mode, "exported document");
        Some(exported)
    }
}
