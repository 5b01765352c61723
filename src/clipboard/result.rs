//! Copy operation results and method identifiers.

/// The result of a successful clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub tool: CopyMethod,
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, size_bytes: usize) -> Self {
        Self { tool, size_bytes }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        format!(
            "Copied {} bytes to clipboard (via {})",
            self.size_bytes,
            self.tool.name()
        )
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Linux Wayland
    WlCopy,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlCopy => "wl-copy",
        }
    }

    /// Program to run.
    pub fn program(&self) -> &'static str {
        self.name()
    }

    /// Arguments that make the program read stdin into the clipboard.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Pbcopy | Self::WlCopy => &[],
            Self::Xclip => &["-selection", "clipboard"],
            Self::Xsel => &["--clipboard", "--input"],
        }
    }
}
