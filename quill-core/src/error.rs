use std::path::PathBuf;

use thiserror::Error;

/// Result type for quill-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The resolved output path does not name a file.
    #[error("output must be a file: '{}' has no file extension", path.display())]
    MissingExtension { path: PathBuf },

    #[error("i/o failure on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to determine the current working directory")]
    WorkingDir(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error comes from a malformed output template.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::MissingExtension { .. } | Error::WorkingDir(_))
    }
}
