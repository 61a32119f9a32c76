//! Outcome of one emission run.

use std::path::PathBuf;

use quill_core::OutputMode;

use crate::Diagnostic;

/// What happened to one target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Content was written
    Written,
    /// File existed and overwriting was not allowed
    Skipped,
    /// Directory creation, formatting or writing failed
    Failed { reason: String },
}

/// A target file and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Model the file was emitted for; `None` for the merged file
    pub model: Option<String>,
    pub status: FileStatus,
}

/// Per-file outcomes and diagnostics of one emission.
#[derive(Debug, Clone)]
pub struct EmitReport {
    pub mode: OutputMode,
    pub files: Vec<FileOutcome>,
    pub diagnostics: Vec<Diagnostic>,
}

impl EmitReport {
    pub(crate) fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            files: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Record a file outcome, adding a warning for anything not written.
    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        match &outcome.status {
            FileStatus::Written => {}
            FileStatus::Skipped => self.diagnostics.push(
                Diagnostic::warning(format!(
                    "{} already exists. Set overwrite to true to overwrite.",
                    outcome.path.display()
                ))
                .at(&outcome.path),
            ),
            FileStatus::Failed { reason } => self.diagnostics.push(
                Diagnostic::warning(format!(
                    "failed to write {}: {}",
                    outcome.path.display(),
                    reason
                ))
                .at(&outcome.path),
            ),
        }
        self.files.push(outcome);
    }

    pub fn written(&self) -> impl Iterator<Item = &FileOutcome> {
        self.with_status(|s| matches!(s, FileStatus::Written))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &FileOutcome> {
        self.with_status(|s| matches!(s, FileStatus::Skipped))
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.with_status(|s| matches!(s, FileStatus::Failed { .. }))
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
    }

    fn with_status(
        &self,
        pred: impl Fn(&FileStatus) -> bool,
    ) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(move |f| pred(&f.status))
    }
}
