use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Key in a per-model overwrite table that applies to unlisted models.
const DEFAULT_KEY: &str = "_default";

/// How to handle files that already exist at a target path
///
/// Configured either as a single bool or as a table of model names with an
/// optional `_default` entry:
///
/// ```toml
/// overwrite = { User = true, _default = false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOverwrite", into = "RawOverwrite")]
pub enum Overwrite {
    /// Same decision for every model
    Uniform(bool),
    /// Per-model decisions with a fallback
    PerModel {
        models: IndexMap<String, bool>,
        default: bool,
    },
}

impl Overwrite {
    /// Effective overwrite decision for a model.
    ///
    /// A model-specific entry wins over the fallback.
    pub fn resolve(&self, model_name: &str) -> bool {
        match self {
            Overwrite::Uniform(overwrite) => *overwrite,
            Overwrite::PerModel { models, default } => {
                models.get(model_name).copied().unwrap_or(*default)
            }
        }
    }

    /// Effective overwrite decision for output not tied to one model.
    pub fn resolve_default(&self) -> bool {
        match self {
            Overwrite::Uniform(overwrite) => *overwrite,
            Overwrite::PerModel { default, .. } => *default,
        }
    }
}

impl Default for Overwrite {
    fn default() -> Self {
        Overwrite::Uniform(false)
    }
}

impl From<bool> for Overwrite {
    fn from(overwrite: bool) -> Self {
        Overwrite::Uniform(overwrite)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawOverwrite {
    Uniform(bool),
    PerModel(IndexMap<String, bool>),
}

impl From<RawOverwrite> for Overwrite {
    fn from(raw: RawOverwrite) -> Self {
        match raw {
            RawOverwrite::Uniform(overwrite) => Overwrite::Uniform(overwrite),
            RawOverwrite::PerModel(mut models) => {
                let default = models.shift_remove(DEFAULT_KEY).unwrap_or(false);
                Overwrite::PerModel { models, default }
            }
        }
    }
}

impl From<Overwrite> for RawOverwrite {
    fn from(overwrite: Overwrite) -> Self {
        match overwrite {
            Overwrite::Uniform(overwrite) => RawOverwrite::Uniform(overwrite),
            Overwrite::PerModel {
                mut models,
                default,
            } => {
                models.insert(DEFAULT_KEY.to_string(), default);
                RawOverwrite::PerModel(models)
            }
        }
    }
}

/// Outcome of checking a target path before writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Target is free (or was cleared); write it
    Proceed,
    /// Target exists and may not be overwritten
    Skip,
}

/// Decide whether `path` may be written, clearing an existing file when allowed.
///
/// An existing file is removed before returning [`WritePolicy::Proceed`], so
/// the caller must write to the same path right after.
pub async fn prepare_target(path: &Path, overwrite: bool) -> Result<WritePolicy> {
    let exists = tokio::fs::try_exists(path)
        .await
        .map_err(|e| Error::io(path, e))?;

    if !exists {
        return Ok(WritePolicy::Proceed);
    }
    if !overwrite {
        return Ok(WritePolicy::Skip);
    }

    tokio::fs::remove_file(path)
        .await
        .map_err(|e| Error::io(path, e))?;
    Ok(WritePolicy::Proceed)
}

/// Fail unless `path` ends in a file name with a non-empty extension.
pub fn ensure_extension(path: &Path) -> Result<()> {
    match path.extension() {
        Some(ext) if !ext.is_empty() => Ok(()),
        _ => Err(Error::MissingExtension {
            path: path.to_path_buf(),
        }),
    }
}

/// Create every missing directory above `path`.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}

/// Write `content` to `path`, creating parent directories first.
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path).await?;
    tokio::fs::write(path, content)
        .await
        .map_err(|e| Error::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        overwrite: Overwrite,
    }

    #[test]
    fn test_overwrite_resolution() {
        let wrapper: Wrapper =
            toml::from_str("overwrite = { User = true, _default = false }").unwrap();
        let overwrite = wrapper.overwrite;

        assert!(overwrite.resolve("User"));
        assert!(!overwrite.resolve("Order"));
        assert!(!overwrite.resolve_default());
    }

    #[test]
    fn test_overwrite_without_default_is_false() {
        let overwrite = Overwrite::from(RawOverwrite::PerModel(IndexMap::from([(
            "User".to_string(),
            true,
        )])));

        assert!(overwrite.resolve("User"));
        assert!(!overwrite.resolve("Order"));
        assert!(!overwrite.resolve_default());
    }

    #[test]
    fn test_model_entry_wins_over_default() {
        let overwrite = Overwrite::PerModel {
            models: IndexMap::from([("Audit".to_string(), false)]),
            default: true,
        };

        assert!(!overwrite.resolve("Audit"));
        assert!(overwrite.resolve("User"));
        assert!(overwrite.resolve_default());
    }

    #[test]
    fn test_uniform_overwrite() {
        assert!(Overwrite::from(true).resolve("Anything"));
        assert!(!Overwrite::default().resolve("Anything"));
        assert!(!Overwrite::default().resolve_default());
    }

    #[test]
    fn test_overwrite_from_bool_toml() {
        let wrapper: Wrapper = toml::from_str("overwrite = true").unwrap();
        assert_eq!(wrapper.overwrite, Overwrite::Uniform(true));
    }

    #[test]
    fn test_ensure_extension() {
        assert!(ensure_extension(Path::new("/out/User.ts")).is_ok());
        assert!(ensure_extension(Path::new("/out/User.model.ts")).is_ok());

        let err = ensure_extension(Path::new("/out/User")).unwrap_err();
        assert!(matches!(err, Error::MissingExtension { .. }));
        assert!(err.is_configuration());

        assert!(ensure_extension(Path::new("/out/User.")).is_err());
        assert!(ensure_extension(Path::new("/out/.env")).is_err());
    }

    #[tokio::test]
    async fn test_prepare_target_missing_file_proceeds() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.ts");

        assert_eq!(
            prepare_target(&path, false).await.unwrap(),
            WritePolicy::Proceed
        );
    }

    #[tokio::test]
    async fn test_prepare_target_skips_existing_without_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.ts");
        fs::write(&path, "original").unwrap();

        assert_eq!(
            prepare_target(&path, false).await.unwrap(),
            WritePolicy::Skip
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[tokio::test]
    async fn test_prepare_target_removes_existing_with_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.ts");
        fs::write(&path, "original").unwrap();

        assert_eq!(
            prepare_target(&path, true).await.unwrap(),
            WritePolicy::Proceed
        );
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[tokio::test]
    async fn test_ensure_parent_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gen").join("file.rs");

        ensure_parent_dir(&path).await.unwrap();
        ensure_parent_dir(&path).await.unwrap();

        assert!(temp.path().join("gen").is_dir());
    }

    #[tokio::test]
    async fn test_write_file_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "a much longer first version").await.unwrap();
        write_file(&path, "second").await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_write_file_reports_path_on_failure() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_file(&blocker.join("child.txt"), "x")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!err.is_configuration());
    }
}
