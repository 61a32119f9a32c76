//! Formatting selection and options.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Name of the formatter used when none is configured.
pub const DEFAULT_FORMATTER: &str = "builtin";

/// Which formatter, if any, emitted content passes through.
///
/// Deserializes from a string: `"none"` disables formatting, anything else
/// names a formatter in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Formatting {
    None,
    Named(String),
}

impl Formatting {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Formatting::None)
    }
}

impl Default for Formatting {
    fn default() -> Self {
        Formatting::Named(DEFAULT_FORMATTER.to_string())
    }
}

impl From<String> for Formatting {
    fn from(name: String) -> Self {
        if name == "none" {
            Formatting::None
        } else {
            Formatting::Named(name)
        }
    }
}

impl From<&str> for Formatting {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Formatting> for String {
    fn from(formatting: Formatting) -> Self {
        match formatting {
            Formatting::None => "none".to_string(),
            Formatting::Named(name) => name,
        }
    }
}

/// Source language the formatter parses content as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parser {
    Rust,
    Json,
}

impl Parser {
    /// Infer a parser from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "rs" => Some(Parser::Rust),
            "json" => Some(Parser::Json),
            _ => None,
        }
    }

    /// Infer a parser from a path's extension.
    pub fn infer(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Options handed to a formatter.
///
/// Unknown keys are kept in `extra` and forwarded verbatim, so hosts can
/// configure their own formatters through the same table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<Parser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_newline: Option<bool>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl FormatOptions {
    pub fn with_parser(mut self, parser: Parser) -> Self {
        self.parser = Some(parser);
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = Some(width);
        self
    }

    /// Layer these options over `base`; fields set here win.
    pub fn merged_over(self, base: FormatOptions) -> FormatOptions {
        let mut extra = base.extra;
        extra.extend(self.extra);

        FormatOptions {
            parser: self.parser.or(base.parser),
            indent_width: self.indent_width.or(base.indent_width),
            final_newline: self.final_newline.or(base.final_newline),
            extra,
        }
    }

    /// Fill in the parser from `path` when none is set.
    pub fn infer_parser(mut self, path: &Path) -> Self {
        if self.parser.is_none() {
            self.parser = Parser::infer(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_from_string() {
        assert_eq!(Formatting::from("none"), Formatting::None);
        assert_eq!(
            Formatting::from("builtin"),
            Formatting::Named("builtin".to_string())
        );
        assert_eq!(
            Formatting::default(),
            Formatting::Named(DEFAULT_FORMATTER.to_string())
        );
        assert!(!Formatting::None.is_enabled());
        assert!(Formatting::default().is_enabled());
    }

    #[test]
    fn test_parser_inference() {
        assert_eq!(Parser::infer(Path::new("src/lib.rs")), Some(Parser::Rust));
        assert_eq!(Parser::infer(Path::new("out/schema.json")), Some(Parser::Json));
        assert_eq!(Parser::infer(Path::new("out/User.ts")), None);
        assert_eq!(Parser::infer(Path::new("Makefile")), None);
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let discovered: FormatOptions = toml::from_str(
            r#"
            parser = "json"
            indent_width = 4
            final_newline = true
            quote_style = "single"
            "#,
        )
        .unwrap();
        let overrides: FormatOptions = toml::from_str(
            r#"
            indent_width = 2
            quote_style = "double"
            "#,
        )
        .unwrap();

        let merged = overrides.merged_over(discovered);
        assert_eq!(merged.parser, Some(Parser::Json));
        assert_eq!(merged.indent_width, Some(2));
        assert_eq!(merged.final_newline, Some(true));
        assert_eq!(
            merged.extra.get("quote_style").and_then(|v| v.as_str()),
            Some("double")
        );
    }

    #[test]
    fn test_explicit_parser_is_not_replaced() {
        let options = FormatOptions::default()
            .with_parser(Parser::Json)
            .infer_parser(Path::new("lib.rs"));
        assert_eq!(options.parser, Some(Parser::Json));

        let inferred = FormatOptions::default().infer_parser(Path::new("lib.rs"));
        assert_eq!(inferred.parser, Some(Parser::Rust));
    }
}
