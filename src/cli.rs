//! CLI definitions for ansifence
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::document::Range;
use crate::palette::{Background, Foreground};

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ansifence")]
#[command(about = "Compose colored text and export it as a Discord ```ansi code block")]
#[command(
    long_about = "ansifence - Compose colored text and export it as a Discord ```ansi code block.

The document lives in a session file between commands. Select a character
range, apply text colors, background colors, bold or underline, then export
the escape-coded block and paste it into a chat message.

QUICK START:
    ansifence write \"Hello colorful world\"
    ansifence color red --range 6..14      Color \"colorful\" red
    ansifence bold --range 0..5            Make \"Hello\" bold
    ansifence show                         Preview the document
    ansifence export --copy                Print, copy and start over

Offsets count characters, starting at 0; END is exclusive."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Preview the current document
    #[command(long_about = "Preview the current document with its styles applied.

Shows the text with a character ruler, the current selection and the
chosen text and background colors. Use --json to dump the document nodes.

EXAMPLES:
    ansifence show
    ansifence show --json")]
    Show {
        /// Print the document as JSON instead of a preview
        #[arg(long, help = "Print the document as JSON")]
        json: bool,
    },

    /// Replace the document with plain text
    #[command(long_about = "Replace the document with a plain, unstyled text run.

EXAMPLES:
    ansifence write \"Hello world\"
    ansifence write --append \" and more\"")]
    Write {
        /// Text to write
        #[arg(help = "Text to write")]
        text: String,
        /// Append to the document instead of replacing it
        #[arg(long, short, help = "Append instead of replacing")]
        append: bool,
    },

    /// Select a character range
    Select {
        /// First selected character
        #[arg(help = "First selected character (0-based)")]
        start: usize,
        /// One past the last selected character
        #[arg(help = "One past the last selected character")]
        end: usize,
    },

    /// Pick a text color and apply it to the selection
    #[command(long_about = "Pick a text color and apply it to the selection.

Without COLOR the previously chosen color is applied. Without a selection
(or --range) the color is only picked.

EXAMPLES:
    ansifence color red --range 0..5
    ansifence color '#00ffff'
    ansifence color --range 3..9")]
    Color {
        /// Palette name or value
        #[arg(help = "Text color name or #rrggbb value (see 'ansifence palette')")]
        color: Option<Foreground>,
        /// Select this range first
        #[arg(long, short, help = "Range to color, as START..END")]
        range: Option<Range>,
    },

    /// Pick a background color and apply it to the selection
    Background {
        /// Palette name or value
        #[arg(help = "Background color name or #rrggbb value (see 'ansifence palette')")]
        color: Option<Background>,
        /// Select this range first
        #[arg(long, short, help = "Range to color, as START..END")]
        range: Option<Range>,
    },

    /// Make the selection bold
    Bold {
        /// Select this range first
        #[arg(long, short, help = "Range to embolden, as START..END")]
        range: Option<Range>,
    },

    /// Underline the selection
    Underline {
        /// Select this range first
        #[arg(long, short, help = "Range to underline, as START..END")]
        range: Option<Range>,
    },

    /// Reset the document to the placeholder text
    Reset {
        /// Delete the whole session, including chosen colors
        #[arg(long, help = "Delete the session file and start over")]
        hard: bool,
    },

    /// Export the document as an ```ansi block
    #[command(long_about = "Print the document as a Discord ```ansi code block.

NOTE: by default the document is reset to the placeholder text after
every export, so each export finalizes one message. Use --keep or set
export.reset_after_export = false to keep editing.

EXAMPLES:
    ansifence export
    ansifence export --copy
    ansifence export --keep > message.txt")]
    Export {
        /// Also copy the result to the clipboard
        #[arg(long, short, help = "Copy the export to the clipboard")]
        copy: bool,
        /// Keep the document instead of resetting it
        #[arg(long, help = "Keep the document after exporting")]
        keep: bool,
    },

    /// Export a JSON document file without touching the session
    #[command(long_about = "Export a document stored as JSON.

The file holds a list of nodes:
    [
      {\"type\": \"text\", \"text\": \"plain \"},
      {\"type\": \"span\", \"foreground\": \"#ff0000\", \"bold\": true, \"text\": \"red\"}
    ]

Use '-' to read from stdin.

EXAMPLES:
    ansifence render message.json
    ansifence show --json | ansifence render -")]
    Render {
        /// JSON document path, or '-' for stdin
        #[arg(help = "JSON document path, or '-' for stdin")]
        file: String,
        /// Also copy the result to the clipboard
        #[arg(long, short, help = "Copy the export to the clipboard")]
        copy: bool,
    },

    /// List the supported colors
    Palette,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
}
