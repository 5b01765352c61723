//! Clipboard hand-off for export strings.
//!
//! The exported text is piped into whichever platform tool is available
//! (`pbcopy` on macOS; `xclip`, `xsel` or `wl-copy` on Linux). Callers treat
//! the copy as fire-and-forget: the export is already complete when the
//! clipboard is written, and a failed copy never undoes it.
//!
//! # Example
//!
//! ```ignore
//! use ansifence::clipboard::copy_text_to_clipboard;
//!
//! let result = copy_text_to_clipboard("```ansi\nhi\n```")?;
//! println!("{}", result.message());
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::{ClipboardError, MAX_CONTENT_SIZE};
pub use result::{CopyMethod, CopyResult};

use copy::Copy;

/// Copy text to the system clipboard.
///
/// # Errors
/// - `ClipboardError::NoToolAvailable` - no clipboard tool worked
/// - `ClipboardError::TooLarge` - text exceeds the size limit
pub fn copy_text_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
