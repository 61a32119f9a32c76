//! The `quill.toml` manifest.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    str::FromStr,
};

use miette::{Diagnostic, NamedSource, SourceSpan};
use quill_emit::{EmitterOptions, Model, Schema};
use serde::Deserialize;
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ManifestError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(help("create a quill.toml or pass its location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse quill.toml")]
    #[diagnostic(code(quill::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("model '{name}' is defined more than once")]
    #[diagnostic(
        code(quill::duplicate_model),
        help("model names must be unique, they select the output file and overwrite entry")
    )]
    DuplicateModel {
        #[source_code]
        src: NamedSource<String>,
        name: String,
    },
}

/// Body templates used to generate content for each model.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Contents for one model; `{{Name}}` and `{{<attribute>}}` are replaced
    pub model: String,
    /// Prepended to the merged file in single-file mode
    #[serde(default)]
    pub header: String,
    /// Placed between models in single-file mode
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    "\n".to_string()
}

/// Parsed manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub emitter: EmitterOptions,
    pub template: TemplateConfig,
    #[serde(default)]
    pub models: Vec<Model>,
}

impl Manifest {
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let named_source = || NamedSource::new(filename, content.to_string());

        let manifest: Manifest = toml::from_str(content).map_err(|source| {
            let span = source.span().map(SourceSpan::from);
            Box::new(ManifestError::Parse {
                src: named_source(),
                span,
                source,
            })
        })?;

        if let Some(name) = duplicate_model(&manifest.models) {
            return Err(Box::new(ManifestError::DuplicateModel {
                src: named_source(),
                name: name.to_string(),
            }));
        }

        Ok(manifest)
    }

    /// The models as a schema for emission.
    pub fn schema(&self) -> Schema {
        Schema::new(self.models.iter().cloned())
    }
}

fn duplicate_model(models: &[Model]) -> Option<&str> {
    let mut seen = HashSet::new();
    models
        .iter()
        .map(|m| m.name.as_str())
        .find(|name| !seen.insert(*name))
}

impl FromStr for Manifest {
    type Err = Box<ManifestError>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "quill.toml")
    }
}

/// A quill.toml file on disk.
#[derive(Debug)]
pub struct QuillToml {
    path: PathBuf,
    manifest: Manifest,
}

impl QuillToml {
    /// Open and parse a quill.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(ManifestError::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
