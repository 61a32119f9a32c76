//! Template-driven content source.

use quill_emit::{ContentGenerator, ContentMerger, Model, ModelContents, NAME_PLACEHOLDER};
use serde_json::Value;

use crate::manifest::TemplateConfig;

/// Generates model contents by literal placeholder replacement.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    config: TemplateConfig,
}

impl TemplateSource {
    pub fn new(config: TemplateConfig) -> Self {
        Self { config }
    }

    /// Render the model template for `model`.
    ///
    /// `{{Name}}` becomes the model name and `{{key}}` the value of the
    /// matching attribute. Unknown placeholders are left in place.
    pub fn render(&self, model: &Model) -> String {
        let mut out = self.config.model.replace(NAME_PLACEHOLDER, &model.name);
        for (key, value) in &model.attributes {
            let token = format!("{{{{{}}}}}", key);
            if out.contains(&token) {
                out = out.replace(&token, &attribute_to_string(value));
            }
        }
        out
    }
}

fn attribute_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl ContentGenerator for TemplateSource {
    async fn contents_for_model(&self, model: &Model) -> eyre::Result<String> {
        Ok(self.render(model))
    }
}

impl ContentMerger for TemplateSource {
    async fn merge_file_contents(&self, contents: &[ModelContents]) -> eyre::Result<String> {
        let body = contents
            .iter()
            .map(|c| c.contents.as_str())
            .collect::<Vec<_>>()
            .join(&self.config.separator);
        Ok(format!("{}{}", self.config.header, body))
    }
}
