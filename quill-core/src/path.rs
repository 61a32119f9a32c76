//! Output path templates.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Token replaced with a model's name in per-model templates.
pub const NAME_PLACEHOLDER: &str = "{{Name}}";

/// How emitted content is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputMode {
    /// All model contents are merged into one file.
    SingleFile,
    /// Each model is written to its own file.
    OneFilePerModel,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::SingleFile => write!(f, "single file"),
            OutputMode::OneFilePerModel => write!(f, "one file per model"),
        }
    }
}

/// A configured output path, possibly containing [`NAME_PLACEHOLDER`].
///
/// The output mode is decided once, when the template is created, by a
/// case-insensitive search for the placeholder. Substitution itself only
/// matches the exact token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct OutputTemplate {
    raw: String,
    mode: OutputMode,
}

impl OutputTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mode = if raw
            .to_lowercase()
            .contains(&NAME_PLACEHOLDER.to_lowercase())
        {
            OutputMode::OneFilePerModel
        } else {
            OutputMode::SingleFile
        };
        Self { raw, mode }
    }

    /// The template as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Returns true if the template contains the exact, case-sensitive placeholder.
    ///
    /// A per-model template without it writes every model to the same path.
    pub fn has_exact_placeholder(&self) -> bool {
        self.raw.contains(NAME_PLACEHOLDER)
    }

    /// Resolve the target path for a model.
    ///
    /// Absolute results are returned as-is; relative ones are joined onto
    /// `base` and normalized.
    pub fn resolve(&self, model_name: &str, base: &Path) -> PathBuf {
        let actual = match self.mode {
            OutputMode::OneFilePerModel => self.raw.replace(NAME_PLACEHOLDER, model_name),
            OutputMode::SingleFile => self.raw.clone(),
        };

        let path = PathBuf::from(actual);
        if path.is_absolute() {
            return path;
        }
        normalize(&base.join(path))
    }

    /// Resolve the target path of the merged file in single-file mode.
    pub fn resolve_single(&self, base: &Path) -> PathBuf {
        let path = PathBuf::from(&self.raw);
        if path.is_absolute() {
            return path;
        }
        normalize(&base.join(path))
    }
}

impl From<String> for OutputTemplate {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for OutputTemplate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<OutputTemplate> for String {
    fn from(template: OutputTemplate) -> Self {
        template.raw
    }
}

/// Lexically normalize a path: drop `.` components and redundant separators,
/// and collapse `..` against preceding normal components.
///
/// The file system is never consulted, so symlinks are not resolved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
