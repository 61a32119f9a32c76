use std::path::PathBuf;

use thiserror::Error;

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown formatter '{0}'")]
    UnknownFormatter(String),

    #[error("failed to parse Rust source")]
    Rust(#[from] syn::Error),

    #[error("failed to parse JSON source")]
    Json(#[from] serde_json::Error),

    #[error("failed to read formatter config '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid formatter config '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failure reported by a formatter registered by the host.
    #[error("formatter '{formatter}' failed: {message}")]
    Custom { formatter: String, message: String },
}
