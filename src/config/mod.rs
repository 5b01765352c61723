//! Configuration management for ansifence

pub mod docs;
mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::PathBuf;

use crate::editor::{Editor, ExportMode};

impl Config {
    /// Get the config file path (~/.config/ansifence/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Expand ~ in the session file path
    pub fn session_path(&self) -> PathBuf {
        expand_home(&self.editor.session_file)
    }

    /// A fresh editor using the configured placeholder and default colors.
    pub fn fresh_editor(&self) -> Editor {
        let mut editor = Editor::with_placeholder(&self.editor.placeholder);
        editor.set_text_color(self.palette.text_color);
        editor.set_background_color(self.palette.background_color);
        editor
    }

    /// What an export does to the document afterwards.
    pub fn export_mode(&self) -> ExportMode {
        if self.export.reset_after_export {
            ExportMode::Reset
        } else {
            ExportMode::Preserve
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
