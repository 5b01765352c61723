//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::document::PLACEHOLDER;
use crate::palette::{Background, Foreground};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Editing surface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Text of a fresh or reset document
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Where the session between commands is kept
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

pub fn default_placeholder() -> String {
    PLACEHOLDER.to_string()
}

pub fn default_session_file() -> String {
    "~/.local/share/ansifence/session.json".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            session_file: default_session_file(),
        }
    }
}

/// Initially selected palette entries for new sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    pub text_color: Foreground,
    #[serde(default)]
    pub background_color: Background,
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Reset the document to the placeholder after each export
    #[serde(default = "default_reset_after_export")]
    pub reset_after_export: bool,
    /// Copy every export to the clipboard without --copy
    #[serde(default)]
    pub copy_to_clipboard: bool,
}

pub fn default_reset_after_export() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            reset_after_export: default_reset_after_export(),
            copy_to_clipboard: false,
        }
    }
}
