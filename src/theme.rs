//! ANSI color helpers for CLI output.
//!
//! Separate from the export palette: these codes color the tool's own
//! messages in the user's terminal and never end up in an export.

use crate::palette::Color;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color codes behind the default theme
pub mod ansi {
    /// Gray color (ANSI 37) - used for descriptions
    pub const GRAY: &str = "\x1b[37m";
    /// Green color (ANSI 32) - used for accent/headers
    pub const GREEN: &str = "\x1b[32m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
}

/// Colors for the tool's own output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: &'static str,
    /// Secondary/dimmed text color
    pub text_secondary: &'static str,
    /// Accent color for highlights and important elements
    pub accent: &'static str,
    /// Error/warning color
    pub error: &'static str,
    /// Whether to emit escape codes at all
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: ansi::GRAY,
            text_secondary: ansi::DARK_GRAY,
            accent: ansi::GREEN,
            error: ansi::RED,
            enabled: true,
        }
    }
}

impl Theme {
    /// A theme that prints text unchanged (for pipes and files).
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// A two-cell block showing `color` as a 24-bit background.
    pub fn swatch(&self, color: Color) -> String {
        if !self.enabled {
            return "  ".to_string();
        }
        let (r, g, b) = color.channels();
        format!("\x1b[48;2;{};{};{}m  {}", r, g, b, ANSI_RESET)
    }
}

/// The theme for stdout: colored on a terminal unless `NO_COLOR` is set.
pub fn current_theme() -> Theme {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    theme_for(atty::is(atty::Stream::Stdout), no_color)
}

/// Pick a theme from the output kind and the user's `NO_COLOR` preference.
pub fn theme_for(is_tty: bool, no_color: bool) -> Theme {
    if is_tty && !no_color {
        Theme::default()
    } else {
        Theme::plain()
    }
}
