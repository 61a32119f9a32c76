//! File emission for schema-driven code generators.
//!
//! A [`FileEmitter`] asks a content source for one text fragment per model,
//! then writes them either one file per model or merged into a single file,
//! depending on whether the output template carries the `{{Name}}`
//! placeholder.
//!
//! # Module Organization
//!
//! - [`emitter`] - The emitter and its collect/write phases
//! - [`source`] - Content generator and merger contracts
//! - [`options`] - Emitter configuration
//! - [`report`] - Per-file outcomes and diagnostics of one emission

pub mod diagnostic;
pub mod emitter;
mod error;
pub mod options;
pub mod report;
pub mod source;
mod writer;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::FileEmitter;
pub use error::{Error, Result};
pub use options::EmitterOptions;
pub use quill_core::{
    Model, ModelContents, NAME_PLACEHOLDER, OutputMode, OutputTemplate, Overwrite, Schema,
};
pub use quill_format::{FormatOptions, Formatter, FormatterRegistry, Formatting, Parser};
pub use report::{EmitReport, FileOutcome, FileStatus};
pub use source::{ContentGenerator, ContentMerger};
