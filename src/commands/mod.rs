//! Command handlers for the ansifence CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod export;
pub mod palette;
pub mod render;
pub mod reset;
pub mod show;
pub mod style;
pub mod write;

use anyhow::Result;
use tracing::warn;

use ansifence::clipboard::copy_text_to_clipboard;
use ansifence::theme::current_theme;
use ansifence::{Config, Editor, ExportString, Session};

/// The session file named by the config, and the editor stored in it.
pub fn open_session(config: &Config) -> Result<(Session, Editor)> {
    let session = Session::new(config.session_path());
    let editor = session.load_or(|| config.fresh_editor())?;
    Ok((session, editor))
}

/// Hand an export to the clipboard. The export already happened, so a
/// failure is reported and otherwise ignored.
pub fn copy_export(export: &ExportString) {
    let theme = current_theme();
    match copy_text_to_clipboard(export.as_str()) {
        Ok(result) => eprintln!("{}", theme.accent_text(&result.message())),
        Err(e) => {
            warn!(error = %e, "clipboard copy failed");
            eprintln!("{}", theme.error_text(&format!("Clipboard: {}", e)));
        }
    }
}
