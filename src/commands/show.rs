//! Show command handler

use anyhow::Result;

use ansifence::export::render_body;
use ansifence::theme::{current_theme, Theme};
use ansifence::{Config, Editor};

use super::open_session;

/// Preview the session document, or dump it as JSON.
pub fn handle(json: bool) -> Result<()> {
    let config = Config::load()?;
    let (_, editor) = open_session(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&editor.document())?);
        return Ok(());
    }

    print!("{}", format_preview(&editor, &current_theme()));
    Ok(())
}

fn format_preview(editor: &Editor, theme: &Theme) -> String {
    let Some(doc) = editor.document() else {
        return format!("{}\n", theme.error_text("No document attached."));
    };

    let mut out = String::new();
    let text = doc.text();
    if theme.enabled {
        out.push_str(&render_body(doc));
    } else {
        out.push_str(&text);
    }
    out.push('\n');
    if !text.contains('\n') {
        out.push_str(&theme.secondary_text(&offset_ruler(doc.char_len())));
        out.push('\n');
    }

    let selection = match editor.current_selection() {
        Some(range) => format!("{}..{}", range.start, range.end),
        None => "none".to_string(),
    };
    out.push_str(&format!(
        "Selection: {}  Text color: {}  Background: {}\n",
        selection,
        editor.text_color(),
        editor.background_color()
    ));
    out
}

/// Tick marks every five characters, labelled every ten.
fn offset_ruler(len: usize) -> String {
    let mut ruler = String::new();
    let mut col = 0;
    while col <= len {
        if col % 10 == 0 {
            let label = col.to_string();
            col += label.len();
            ruler.push_str(&label);
        } else if col % 5 == 0 {
            ruler.push('+');
            col += 1;
        } else {
            ruler.push('.');
            col += 1;
        }
    }
    ruler
}
