//! Emitter configuration.

use std::str::FromStr;

use quill_core::{OutputTemplate, Overwrite};
use quill_format::{FormatOptions, Formatting};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Options recognized by [`FileEmitter`](crate::FileEmitter).
///
/// ```toml
/// output = "src/models/{{Name}}.rs"
/// overwrite = { User = true, _default = false }
/// formatting = "builtin"
///
/// [formatter_config]
/// final_newline = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmitterOptions {
    /// Output path template, may contain `{{Name}}`
    pub output: OutputTemplate,
    /// Whether existing files may be replaced (default: never)
    #[serde(default)]
    pub overwrite: Overwrite,
    /// Formatter to pass content through (default: `builtin`)
    #[serde(default)]
    pub formatting: Formatting,
    /// Options forwarded to the formatter
    #[serde(default, alias = "formatterConfig")]
    pub formatter_config: FormatOptions,
}

impl EmitterOptions {
    pub fn new(output: impl Into<OutputTemplate>) -> Self {
        Self {
            output: output.into(),
            overwrite: Overwrite::default(),
            formatting: Formatting::default(),
            formatter_config: FormatOptions::default(),
        }
    }

    pub fn with_overwrite(mut self, overwrite: impl Into<Overwrite>) -> Self {
        self.overwrite = overwrite.into();
        self
    }

    pub fn with_formatting(mut self, formatting: impl Into<Formatting>) -> Self {
        self.formatting = formatting.into();
        self
    }

    pub fn with_formatter_config(mut self, config: FormatOptions) -> Self {
        self.formatter_config = config;
        self
    }
}

impl FromStr for EmitterOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
