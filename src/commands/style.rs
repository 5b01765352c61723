//! Handlers for select, color, background, bold and underline.

use anyhow::Result;

use ansifence::document::Range;
use ansifence::palette::{Background, Foreground};
use ansifence::theme::current_theme;
use ansifence::{Config, Editor};

use super::open_session;

/// A style command from the CLI.
pub enum StyleAction {
    Color(Option<Foreground>),
    Background(Option<Background>),
    Bold,
    Underline,
}

impl StyleAction {
    fn describe(&self, editor: &Editor) -> String {
        match self {
            Self::Color(_) => format!("text color {}", editor.text_color()),
            Self::Background(_) => format!("background {}", editor.background_color()),
            Self::Bold => "bold".to_string(),
            Self::Underline => "underline".to_string(),
        }
    }
}

/// Store a selection for later style commands.
pub fn handle_select(start: usize, end: usize) -> Result<()> {
    let config = Config::load()?;
    let (session, mut editor) = open_session(&config)?;
    let theme = current_theme();

    editor.select(Range::new(start, end));
    session.save(&editor)?;

    match editor.current_selection() {
        Some(range) => println!(
            "{}",
            theme.primary_text(&format!("Selected {}..{}", range.start, range.end))
        ),
        None => println!(
            "{}",
            theme.error_text(&format!(
                "{}..{} is empty or outside the document; nothing is selected.",
                start, end
            ))
        ),
    }
    Ok(())
}

/// Pick colors, select `range` if given, then style the selection.
pub fn handle(action: StyleAction, range: Option<Range>) -> Result<()> {
    let config = Config::load()?;
    let (session, mut editor) = open_session(&config)?;
    let theme = current_theme();

    let message = apply(&mut editor, &action, range);
    session.save(&editor)?;
    println!("{}", theme.primary_text(&message));
    Ok(())
}

/// Run one style action against the editor and describe the outcome.
pub fn apply(editor: &mut Editor, action: &StyleAction, range: Option<Range>) -> String {
    match *action {
        StyleAction::Color(Some(fg)) => editor.set_text_color(fg),
        StyleAction::Background(Some(bg)) => editor.set_background_color(bg),
        _ => {}
    }
    if let Some(range) = range {
        editor.select(range);
    }

    let applied = match action {
        StyleAction::Color(_) => editor.apply_text_color(),
        StyleAction::Background(_) => editor.apply_background_color(),
        StyleAction::Bold => editor.apply_bold(),
        StyleAction::Underline => editor.apply_underline(),
    };

    let what = action.describe(editor);
    if applied {
        format!("Applied {}.", what)
    } else {
        match action {
            StyleAction::Color(Some(_)) | StyleAction::Background(Some(_)) => {
                format!("Picked {}; select a range to apply it.", what)
            }
            _ => format!("Nothing selected; {} not applied.", what),
        }
    }
}
