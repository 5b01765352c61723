//! Clipboard operation errors.

/// Largest text handed to a clipboard tool (1 MB).
pub const MAX_CONTENT_SIZE: usize = 1024 * 1024;

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install xclip, xsel, or wl-copy.")]
    NoToolAvailable,

    #[error("Text too large for clipboard ({size} bytes). Maximum is {max} bytes.")]
    TooLarge { size: usize, max: usize },

    #[error("Platform not supported (only macOS and Linux)")]
    UnsupportedPlatform,
}
