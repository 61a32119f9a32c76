use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use quill_emit::{OutputMode, Overwrite};

use super::UnwrapOrExit;
use crate::{
    manifest::QuillToml,
    reports::{CheckReport, PlannedFile, Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to quill.toml (defaults to ./quill.toml)
    #[arg(short, long, default_value = "quill.toml")]
    pub config: PathBuf,

    /// Resolve relative output paths against this directory instead of the
    /// current one
    #[arg(long)]
    pub base_dir: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let quill_toml = QuillToml::open(&self.config).unwrap_or_exit();
        let manifest = quill_toml.manifest();
        let options = &manifest.emitter;

        let base = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let files = match options.output.mode() {
            OutputMode::OneFilePerModel => manifest
                .models
                .iter()
                .map(|model| PlannedFile {
                    model: Some(model.name.clone()),
                    path: options.output.resolve(&model.name, &base),
                    overwrite: options.overwrite.resolve(&model.name),
                })
                .collect(),
            OutputMode::SingleFile => vec![PlannedFile {
                model: None,
                path: options.output.resolve_single(&base),
                overwrite: options.overwrite.resolve_default(),
            }],
        };

        let unmatched_overwrites = match &options.overwrite {
            Overwrite::PerModel { models, .. } => models
                .keys()
                .filter(|name| !manifest.models.iter().any(|m| m.name == **name))
                .cloned()
                .collect(),
            Overwrite::Uniform(_) => Vec::new(),
        };

        let report = CheckReport {
            config: quill_toml.path().to_path_buf(),
            output: options.output.as_str().to_string(),
            mode: options.output.mode(),
            formatting: String::from(options.formatting.clone()),
            files,
            unmatched_overwrites,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
