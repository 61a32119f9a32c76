//! Content source contracts.
//!
//! The emitter does not know how content is produced. A code generation
//! strategy supplies both halves: text for each model, and the merge used
//! when everything goes into one file.

use std::future::Future;

use eyre::Result;
use quill_core::{Model, ModelContents};

/// Produces the text emitted for one model.
pub trait ContentGenerator {
    /// Generate the contents for `model`.
    ///
    /// Calls for different models are polled concurrently.
    fn contents_for_model(&self, model: &Model) -> impl Future<Output = Result<String>>;
}

/// Combines every model's contents into the text of a single output file.
pub trait ContentMerger {
    /// Merge collected contents, given in schema order.
    fn merge_file_contents(&self, contents: &[ModelContents]) -> impl Future<Output = Result<String>>;
}
