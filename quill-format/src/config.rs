//! Formatter config discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{FormatError, FormatOptions, Result};

/// File name searched for in the target directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".quillfmt.toml";

/// Find the nearest config file at or above the directory containing `target`.
pub async fn find_config(target: &Path) -> Option<PathBuf> {
    for dir in target.parent()?.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if let Ok(metadata) = tokio::fs::metadata(&candidate).await
            && metadata.is_file()
        {
            return Some(candidate);
        }
    }
    None
}

/// Load the nearest config for `target`, if there is one.
pub async fn discover(target: &Path) -> Result<Option<FormatOptions>> {
    let Some(path) = find_config(target).await else {
        return Ok(None);
    };

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| FormatError::ConfigRead {
            path: path.clone(),
            source,
        })?;
    let options = toml::from_str(&content)
        .map_err(|source| FormatError::ConfigParse {
            path: path.clone(),
            source,
        })?;

    debug!(config = %path.display(), target = %target.display(), "using formatter config");
    Ok(Some(options))
}

/// Effective options for formatting `target`.
///
/// Discovered config is the lowest layer, `overrides` sit on top, and the
/// parser falls back to the one implied by the file extension.
pub async fn resolve_options(
    target: &Path,
    overrides: &FormatOptions,
) -> Result<FormatOptions> {
    let discovered = discover(target).await?.unwrap_or_default();
    Ok(overrides
        .clone()
        .merged_over(discovered)
        .infer_parser(target))
}
