use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A schema-defined data entity.
///
/// Only the name is interpreted; every other attribute is carried through
/// untouched for the content generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Model {
    /// Create a model with no extra attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }

    /// Attach an opaque attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// Ordered collection of models passed into one emission run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub models: Vec<Model>,
}

impl Schema {
    pub fn new(models: impl IntoIterator<Item = Model>) -> Self {
        Self {
            models: models.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Find a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }
}

/// Generated content for one model, collected during a single emission.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelContents {
    pub model: Model,
    pub contents: String,
}

impl ModelContents {
    pub fn new(model: Model, contents: impl Into<String>) -> Self {
        Self {
            model,
            contents: contents.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_keeps_opaque_attributes() {
        let model = Model::new("User")
            .with_attribute("table", "users")
            .with_attribute("soft_delete", true);

        assert_eq!(model.name, "User");
        assert_eq!(model.attribute("table"), Some(&Value::from("users")));
        assert_eq!(model.attribute("soft_delete"), Some(&Value::from(true)));
        assert_eq!(model.attribute("missing"), None);
    }

    #[test]
    fn test_schema_from_toml_preserves_order() {
        let schema: Schema = toml::from_str(
            r#"
            [[models]]
            name = "User"
            table = "users"

            [[models]]
            name = "Order"
            "#,
        )
        .unwrap();

        let names: Vec<_> = schema.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["User", "Order"]);
        assert_eq!(
            schema.model("User").and_then(|m| m.attribute("table")),
            Some(&Value::from("users"))
        );
        assert!(schema.model("Order").unwrap().attributes.is_empty());
    }

    #[test]
    fn test_empty_schema() {
        let schema: Schema = toml::from_str("").unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }
}
