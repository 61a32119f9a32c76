//! Named formatter lookup.

use std::{path::Path, sync::Arc};

use indexmap::IndexMap;

use crate::{BuiltinFormatter, FormatError, FormatOptions, Formatting, Result, config};

/// A text formatter selectable by name.
///
/// Implement this trait to plug an external pretty-printer into emission.
pub trait Formatter: Send + Sync {
    /// Name used to select this formatter in the `formatting` option
    fn name(&self) -> &str;

    /// Reformat `source` with the given options
    fn format(&self, source: &str, options: &FormatOptions) -> Result<String>;
}

/// Formatters available to an emitter, keyed by name.
#[derive(Clone)]
pub struct FormatterRegistry {
    formatters: IndexMap<String, Arc<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Registry with only the built-in formatter.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(BuiltinFormatter::new());
        registry
    }

    pub fn empty() -> Self {
        Self {
            formatters: IndexMap::new(),
        }
    }

    /// Add a formatter, replacing any with the same name.
    pub fn register(&mut self, formatter: impl Formatter + 'static) -> &mut Self {
        self.formatters
            .insert(formatter.name().to_string(), Arc::new(formatter));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Names of all registered formatters, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formatters.keys().map(String::as_str)
    }

    /// Format content destined for `target` according to `formatting`.
    ///
    /// Options are resolved against any config discovered near `target`.
    pub async fn format_for_path(
        &self,
        formatting: &Formatting,
        target: &Path,
        source: &str,
        overrides: &FormatOptions,
    ) -> Result<String> {
        let Formatting::Named(name) = formatting else {
            return Ok(source.to_string());
        };
        let formatter = self
            .get(name)
            .ok_or_else(|| FormatError::UnknownFormatter(name.clone()))?;

        let options = config::resolve_options(target, overrides).await?;
        formatter.format(source, &options)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.formatters.keys().collect::<Vec<_>>())
            .finish()
    }
}
