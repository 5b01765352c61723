//! ansifence library
//!
//! Turns styled text into a Discord ```ansi code block: a fixed palette of
//! text and background colors mapped to escape codes, a document model of
//! styled spans, and the serializer that walks it.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod editor;
pub mod export;
pub mod palette;
pub mod session;
pub mod theme;

pub use config::Config;
pub use document::{Document, Node, Range, StylePatch, StyleSpan};
pub use editor::{Editor, ExportMode};
pub use export::ExportString;
pub use palette::{background_code, foreground_code, Background, Color, EscapeCode, Foreground};
pub use session::{Session, SessionError};
