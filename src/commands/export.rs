//! Export command handler

use anyhow::Result;

use ansifence::editor::ExportMode;
use ansifence::theme::current_theme;
use ansifence::Config;

use super::{copy_export, open_session};

/// Print the session document as an ```ansi block, then reset it unless
/// told to keep it.
pub fn handle(copy: bool, keep: bool) -> Result<()> {
    let config = Config::load()?;
    let (session, mut editor) = open_session(&config)?;

    let mode = if keep {
        ExportMode::Preserve
    } else {
        config.export_mode()
    };

    let Some(export) = editor.export_with(mode) else {
        eprintln!("{}", current_theme().error_text("No document to export."));
        return Ok(());
    };
    session.save(&editor)?;

    println!("{}", export);
    if copy || config.export.copy_to_clipboard {
        copy_export(&export);
    }
    if mode == ExportMode::Reset {
        eprintln!(
            "{}",
            current_theme().secondary_text("Document reset to placeholder text.")
        );
    }
    Ok(())
}
