//! Persists the editor between CLI invocations.
//!
//! The session file is a JSON dump of [`Editor`]. Each command loads it,
//! performs one action and writes it back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::editor::Editor;

/// Errors from reading or writing the session file.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Session file {path} is corrupt: {source}. Run 'ansifence reset --hard' to start over.")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A session file on disk.
#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
}

impl Session {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the stored editor, or `fresh()` if nothing is stored yet.
    pub fn load_or(&self, fresh: impl FnOnce() -> Editor) -> Result<Editor, SessionError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no session yet, starting fresh");
            return Ok(fresh());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SessionError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, editor: &Editor) -> Result<(), SessionError> {
        let io_err = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = serde_json::to_string_pretty(editor).map_err(|source| {
            SessionError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, contents).map_err(io_err)?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Remove the session file. Missing files are fine.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
