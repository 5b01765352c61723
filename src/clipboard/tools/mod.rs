//! Platform-specific clipboard tools.

use std::io::Write;
use std::process::{Command, Stdio};

use super::result::CopyMethod;
use super::tool::{CopyTool, CopyToolError};

/// A clipboard program that reads the text to copy from stdin.
pub struct PipeTool {
    method: CopyMethod,
}

impl PipeTool {
    pub fn new(method: CopyMethod) -> Self {
        Self { method }
    }

    /// Check if the program is installed.
    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.method.program())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl CopyTool for PipeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        match self.method {
            CopyMethod::Pbcopy => cfg!(target_os = "macos"),
            _ => cfg!(target_os = "linux") && self.tool_exists(),
        }
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new(self.method.program())
            .args(self.method.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CopyToolError::NotFound,
                _ => CopyToolError::Failed(e.to_string()),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(CopyToolError::Failed(format!(
                "{} failed",
                self.method.name()
            )))
        }
    }
}

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(PipeTool::new(CopyMethod::Pbcopy))]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(PipeTool::new(CopyMethod::Xclip)),
            Box::new(PipeTool::new(CopyMethod::Xsel)),
            Box::new(PipeTool::new(CopyMethod::WlCopy)),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}
