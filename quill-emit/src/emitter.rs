//! The file emitter.
//!
//! Emission runs in two phases. Collect asks the content source for every
//! model concurrently and waits for all of them. Write then either merges the
//! collected contents into one file, or writes each model's file
//! independently. Distinct paths are written concurrently. Models that
//! resolve to the same path are written one after another in schema order,
//! so each existence check sees the previous model's file.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use indexmap::IndexMap;
use quill_core::{
    Model, ModelContents, OutputMode, Schema, WritePolicy, ensure_extension, prepare_target,
};
use quill_format::FormatterRegistry;
use tracing::{debug, warn};

use crate::{
    ContentGenerator, ContentMerger, EmitReport, EmitterOptions, Error, FileOutcome, FileStatus,
    Result,
    writer::{DiskWriter, describe},
};

/// Writes generated content for a schema to disk.
///
/// The output mode is fixed when the emitter is created, from the
/// `output` template.
#[derive(Debug)]
pub struct FileEmitter<S> {
    options: EmitterOptions,
    source: S,
    formatters: FormatterRegistry,
    base_dir: Option<PathBuf>,
}

impl<S> FileEmitter<S>
where
    S: ContentGenerator + ContentMerger,
{
    pub fn new(options: EmitterOptions, source: S) -> Self {
        if options.output.mode() == OutputMode::OneFilePerModel
            && !options.output.has_exact_placeholder()
        {
            warn!(
                output = options.output.as_str(),
                "output template matches {{{{Name}}}} only case-insensitively; model names will not be substituted"
            );
        }

        Self {
            options,
            source,
            formatters: FormatterRegistry::new(),
            base_dir: None,
        }
    }

    /// Resolve relative output paths against `dir` instead of the process
    /// working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Replace the formatters available to the `formatting` option.
    pub fn with_formatters(mut self, formatters: FormatterRegistry) -> Self {
        self.formatters = formatters;
        self
    }

    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    pub fn output_mode(&self) -> OutputMode {
        self.options.output.mode()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Target path for `model` under the current configuration.
    pub fn path_for_model(&self, model: &Model) -> Result<PathBuf> {
        let base = self.base_dir()?;
        Ok(self.options.output.resolve(&model.name, &base))
    }

    /// Generate and write the output for every model in `schema`.
    ///
    /// Only configuration problems abort the run: a target path without a
    /// file extension, an unavailable working directory, or a failing
    /// content source. Skipped and failed files are reported in the
    /// returned [`EmitReport`].
    pub async fn emit_schema(&self, schema: &Schema) -> Result<EmitReport> {
        let base = self.base_dir()?;
        let collected = self.collect(schema).await?;

        let mut report = EmitReport::new(self.output_mode());
        match self.output_mode() {
            OutputMode::OneFilePerModel => {
                let mut targets: IndexMap<PathBuf, Vec<(usize, &ModelContents)>> =
                    IndexMap::new();
                for (index, c) in collected.iter().enumerate() {
                    let path = self.options.output.resolve(&c.model.name, &base);
                    ensure_extension(&path)?;
                    targets.entry(path).or_default().push((index, c));
                }

                let writes = targets.iter().map(|(path, group)| async move {
                    if group.len() > 1 {
                        debug!(
                            path = %path.display(),
                            models = group.len(),
                            "models share a target path"
                        );
                    }
                    let mut outcomes = Vec::with_capacity(group.len());
                    for (index, c) in group {
                        let name = c.model.name.as_str();
                        let overwrite = self.options.overwrite.resolve(name);
                        let outcome = self
                            .emit_file(path, &c.contents, Some(name), overwrite)
                            .await?;
                        outcomes.push((*index, outcome));
                    }
                    Ok::<_, Error>(outcomes)
                });

                let mut outcomes = Vec::with_capacity(collected.len());
                for group in join_all(writes).await {
                    outcomes.extend(group?);
                }
                outcomes.sort_by_key(|(index, _)| *index);
                for (_, outcome) in outcomes {
                    report.record(outcome);
                }
            }
            OutputMode::SingleFile => {
                let path = self.options.output.resolve_single(&base);
                ensure_extension(&path)?;

                let contents = self
                    .source
                    .merge_file_contents(&collected)
                    .await
                    .map_err(Error::merge)?;
                let outcome = self
                    .emit_file(&path, &contents, None, self.options.overwrite.resolve_default())
                    .await?;
                report.record(outcome);
            }
        }

        Ok(report)
    }

    /// Ask the source for every model's contents, keeping schema order.
    async fn collect(&self, schema: &Schema) -> Result<Vec<ModelContents>> {
        let pending = schema.models.iter().map(|model| async move {
            let contents = self
                .source
                .contents_for_model(model)
                .await
                .map_err(|e| Error::generate(&model.name, e))?;
            debug!(model = %model.name, bytes = contents.len(), "collected contents");
            Ok::<_, Error>(ModelContents::new(model.clone(), contents))
        });

        join_all(pending).await.into_iter().collect()
    }

    async fn emit_file(
        &self,
        path: &Path,
        contents: &str,
        model: Option<&str>,
        overwrite: bool,
    ) -> Result<FileOutcome> {
        let status = match prepare_target(path, overwrite).await {
            Ok(WritePolicy::Proceed) => self.writer().write(contents, path).await?,
            Ok(WritePolicy::Skip) => {
                warn!(
                    path = %path.display(),
                    "{} already exists. Set overwrite to true to overwrite.",
                    path.display()
                );
                FileStatus::Skipped
            }
            Err(err) => {
                let reason = describe(err);
                warn!(path = %path.display(), %reason, "failed to write {}", path.display());
                FileStatus::Failed { reason }
            }
        };

        Ok(FileOutcome {
            path: path.to_path_buf(),
            model: model.map(str::to_string),
            status,
        })
    }

    fn writer(&self) -> DiskWriter<'_> {
        DiskWriter {
            formatting: &self.options.formatting,
            formatter_config: &self.options.formatter_config,
            formatters: &self.formatters,
        }
    }

    fn base_dir(&self) -> Result<PathBuf> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir()
                .map_err(|e| Error::Core(quill_core::Error::WorkingDir(e))),
        }
    }
}
