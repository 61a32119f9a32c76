//! Disk writer: extension check, directories, formatting, write.

use std::path::Path;

use quill_core::{ensure_extension, ensure_parent_dir, write_file};
use quill_format::{FormatOptions, FormatterRegistry, Formatting};
use tracing::{debug, warn};

use crate::{FileStatus, Result};

/// Writes one target file, formatting it first when configured.
pub(crate) struct DiskWriter<'a> {
    pub formatting: &'a Formatting,
    pub formatter_config: &'a FormatOptions,
    pub formatters: &'a FormatterRegistry,
}

impl DiskWriter<'_> {
    /// Write `content` to `path`.
    ///
    /// A path without a file extension is a configuration error and is
    /// returned. Every other failure is logged and reported as
    /// [`FileStatus::Failed`].
    pub async fn write(&self, content: &str, path: &Path) -> Result<FileStatus> {
        ensure_extension(path)?;

        match self.try_write(content, path).await {
            Ok(()) => {
                debug!(path = %path.display(), "wrote file");
                Ok(FileStatus::Written)
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "failed to write {}", path.display());
                Ok(FileStatus::Failed { reason })
            }
        }
    }

    async fn try_write(&self, content: &str, path: &Path) -> std::result::Result<(), String> {
        ensure_parent_dir(path).await.map_err(describe)?;

        let content = self
            .formatters
            .format_for_path(self.formatting, path, content, self.formatter_config)
            .await
            .map_err(describe)?;

        write_file(path, &content).await.map_err(describe)
    }
}

/// Render an error with its sources, e.g. `invalid formatter config 'x': expected integer`.
pub(crate) fn describe(err: impl std::error::Error + Send + Sync + 'static) -> String {
    format!("{:#}", eyre::Report::new(err))
}
