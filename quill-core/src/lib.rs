//! Core types and utilities for the Quill file emitter.
//!
//! This crate provides the schema model, output path templates, the
//! overwrite policy and the safe-write primitives used by `quill-emit`.

mod error;
mod file;
mod model;
mod path;

pub use error::{Error, Result};
// File operations
pub use file::{
    Overwrite, WritePolicy, ensure_extension, ensure_parent_dir, prepare_target, write_file,
};
// Schema types
pub use model::{Model, ModelContents, Schema};
// Path resolution
pub use path::{NAME_PLACEHOLDER, OutputMode, OutputTemplate, normalize};
