//! Formatting support for the Quill file emitter.
//!
//! # Module Organization
//!
//! - [`options`] - Formatting selection, formatter options and parsers
//! - [`config`] - Discovery of `.quillfmt.toml` files near a target path
//! - [`builtin`] - The bundled formatter (Rust via prettyplease, JSON via serde_json)
//! - [`registry`] - Named formatter lookup

pub mod builtin;
pub mod config;
mod error;
pub mod options;
pub mod registry;

pub use builtin::BuiltinFormatter;
pub use error::{FormatError, Result};
pub use options::{FormatOptions, Formatting, Parser};
pub use registry::{Formatter, FormatterRegistry};
