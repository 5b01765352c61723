//! Palette command handler

use anyhow::Result;

use ansifence::palette::{Background, Foreground};
use ansifence::theme::{current_theme, Theme};

/// List both palettes with values, escape parameters and swatches.
pub fn handle() -> Result<()> {
    print!("{}", format_palette(&current_theme()));
    Ok(())
}

fn format_palette(theme: &Theme) -> String {
    let mut out = String::new();

    out.push_str(&theme.accent_text("Text colors"));
    out.push('\n');
    for fg in Foreground::ALL {
        out.push_str(&format_row(
            theme,
            fg.name(),
            &fg.color().hex(),
            fg.code().params(),
            theme.swatch(fg.color()),
        ));
    }

    out.push('\n');
    out.push_str(&theme.accent_text("Background colors"));
    out.push('\n');
    for bg in Background::ALL {
        out.push_str(&format_row(
            theme,
            bg.name(),
            &bg.color().hex(),
            bg.code().params(),
            theme.swatch(bg.color()),
        ));
    }
    out
}

fn format_row(theme: &Theme, name: &str, hex: &str, params: &str, swatch: String) -> String {
    format!(
        "  {} {:<18} {} {}\n",
        swatch,
        name,
        hex,
        theme.secondary_text(&format!("ESC[{}m", params))
    )
}
