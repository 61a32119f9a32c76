//! Check command report.

use std::path::PathBuf;

use quill_emit::OutputMode;

use super::output::{Output, Report};

/// A file an emission would write.
#[derive(Debug)]
pub struct PlannedFile {
    /// Model the file is emitted for; `None` for the merged file
    pub model: Option<String>,
    pub path: PathBuf,
    pub overwrite: bool,
}

/// Resolved emission plan for a manifest.
#[derive(Debug)]
pub struct CheckReport {
    pub config: PathBuf,
    pub output: String,
    pub mode: OutputMode,
    pub formatting: String,
    pub files: Vec<PlannedFile>,
    /// Per-model overwrite entries naming no model in the manifest
    pub unmatched_overwrites: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Manifest", &format!("{} is valid", self.config.display()));
        out.key_value("Output", &self.output);
        out.key_value("Mode", &self.mode.to_string());
        out.key_value("Formatting", &self.formatting);
        out.newline();

        out.section(&format!("Files ({})", self.files.len()));
        for file in &self.files {
            let overwrite = if file.overwrite { "overwrite" } else { "keep existing" };
            match &file.model {
                Some(model) => out.list_item(&format!(
                    "{} -> {} ({})",
                    model,
                    file.path.display(),
                    overwrite
                )),
                None => out.list_item(&format!("{} ({})", file.path.display(), overwrite)),
            }
        }

        for name in &self.unmatched_overwrites {
            out.warning(&format!("overwrite entry '{}' matches no model", name));
        }
    }
}
