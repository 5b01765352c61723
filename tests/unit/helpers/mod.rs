//! Test helper utilities

#![allow(dead_code)]

use ansifence::{Background, Foreground, StyleSpan};

/// The escape control character, for building expected strings.
pub const ESC: &str = "\x1b";

/// `ESC[<params>m`
pub fn sgr(params: &str) -> String {
    format!("{}[{}m", ESC, params)
}

/// Wrap an expected body in the export fences.
pub fn fenced(body: &str) -> String {
    format!("```ansi\n{}\n```", body)
}

/// A span colored with a palette text color.
pub fn fg_span(fg: Foreground, text: &str) -> StyleSpan {
    StyleSpan::new(text).with_foreground(fg.color())
}

/// A span colored with a palette background color.
pub fn bg_span(bg: Background, text: &str) -> StyleSpan {
    StyleSpan::new(text).with_background(bg.color())
}
