//! Reset command handler

use anyhow::Result;

use ansifence::theme::current_theme;
use ansifence::{Config, Session};

use super::open_session;

/// Put the placeholder text back, or drop the whole session with `hard`.
#[cfg(not(tarpaulin_include))]
pub fn handle(hard: bool) -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();

    if hard {
        // Skip loading: the file may be corrupt.
        Session::new(config.session_path()).clear()?;
        println!("{}", theme.primary_text("Session cleared."));
        return Ok(());
    }

    let (session, mut editor) = open_session(&config)?;
    editor.reset_document();
    session.save(&editor)?;
    println!("{}", theme.primary_text("Document reset to placeholder text."));
    Ok(())
}
