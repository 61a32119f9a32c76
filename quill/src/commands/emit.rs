use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use quill_emit::FileEmitter;
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    manifest::QuillToml,
    reports::{EmitSummary, Report, TerminalOutput},
    template::TemplateSource,
};

#[derive(Args)]
pub struct EmitCommand {
    /// Path to quill.toml (defaults to ./quill.toml)
    #[arg(short, long, default_value = "quill.toml")]
    pub config: PathBuf,

    /// Resolve relative output paths against this directory instead of the
    /// current one
    #[arg(long)]
    pub base_dir: Option<PathBuf>,
}

impl EmitCommand {
    /// Run the emit command
    pub async fn run(&self) -> Result<()> {
        let quill_toml = QuillToml::open(&self.config).unwrap_or_exit();
        let manifest = quill_toml.manifest();
        debug!(
            config = %quill_toml.path().display(),
            models = manifest.models.len(),
            "loaded manifest"
        );

        let source = TemplateSource::new(manifest.template.clone());
        let mut emitter = FileEmitter::new(manifest.emitter.clone(), source);
        if let Some(dir) = &self.base_dir {
            emitter = emitter.with_base_dir(dir);
        }

        let report = emitter
            .emit_schema(&manifest.schema())
            .await
            .wrap_err("Emission failed")?;

        EmitSummary { report: &report }.render(&mut TerminalOutput::new());
        Ok(())
    }
}
