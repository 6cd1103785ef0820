//! Error types for template execution

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while executing a component tree
#[derive(Debug, Error)]
pub enum EngineError {
    /// Static resource not found in the override directory or the embedded set
    #[error("static resource not found: {path}")]
    ResourceNotFound { path: String },

    /// Filesystem operation failed
    #[error("error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A code fragment ran outside of any file component.
    ///
    /// This is a defect in how the tree was built, not a configuration problem.
    #[error("code fragment '{resource}' executed with no open file")]
    NoOpenFile { resource: String },
}

impl EngineError {
    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error indicates a malformed component tree
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::NoOpenFile { .. })
    }
}
