//! The bundled formatter.

use serde::Serialize;

use crate::{FormatOptions, Formatter, Parser, Result};

const DEFAULT_JSON_INDENT: usize = 2;

/// Formats Rust with `prettyplease` and JSON with `serde_json`.
///
/// Content without a known parser passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFormatter;

impl BuiltinFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for BuiltinFormatter {
    fn name(&self) -> &str {
        crate::options::DEFAULT_FORMATTER
    }

    fn format(&self, source: &str, options: &FormatOptions) -> Result<String> {
        let formatted = match options.parser {
            Some(Parser::Rust) => format_rust(source)?,
            Some(Parser::Json) => format_json(source, options.indent_width)?,
            None => source.to_string(),
        };

        Ok(apply_final_newline(formatted, options.final_newline))
    }
}

fn format_rust(source: &str) -> Result<String> {
    let file = syn::parse_file(source)?;
    Ok(prettyplease::unparse(&file))
}

fn format_json(source: &str, indent_width: Option<usize>) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(source)?;

    let indent = " ".repeat(indent_width.unwrap_or(DEFAULT_JSON_INDENT));
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn apply_final_newline(mut content: String, final_newline: Option<bool>) -> String {
    match final_newline {
        Some(true) if !content.ends_with('\n') => {
            content.push('\n');
            content
        }
        Some(false) => content.trim_end_matches('\n').to_string(),
        _ => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;

    #[test]
    fn test_format_rust() {
        let options = FormatOptions::default().with_parser(Parser::Rust);
        let formatted = BuiltinFormatter
            .format("pub struct User{pub id:u64,pub name:String}", &options)
            .unwrap();

        assert_eq!(
            formatted,
            "pub struct User {\n    pub id: u64,\n    pub name: String,\n}\n"
        );
    }

    #[test]
    fn test_format_rust_rejects_invalid_source() {
        let options = FormatOptions::default().with_parser(Parser::Rust);
        let err = BuiltinFormatter
            .format("pub struct {", &options)
            .unwrap_err();
        assert!(matches!(err, FormatError::Rust(_)));
    }

    #[test]
    fn test_format_json_keeps_key_order() {
        let options = FormatOptions::default().with_parser(Parser::Json);
        let formatted = BuiltinFormatter
            .format(r#"{"name":"User","fields":["id","email"]}"#, &options)
            .unwrap();

        insta::assert_snapshot!(formatted, @r#"
        {
          "name": "User",
          "fields": [
            "id",
            "email"
          ]
        }
        "#);
    }

    #[test]
    fn test_format_json_indent_width() {
        let options = FormatOptions::default()
            .with_parser(Parser::Json)
            .with_indent_width(4);
        let formatted = BuiltinFormatter.format(r#"{"a":1}"#, &options).unwrap();
        assert_eq!(formatted, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_format_json_rejects_invalid_source() {
        let options = FormatOptions::default().with_parser(Parser::Json);
        let err = BuiltinFormatter.format("{", &options).unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));
    }

    #[test]
    fn test_unknown_parser_passes_through() {
        let source = "export interface User {   id: number }";
        let formatted = BuiltinFormatter
            .format(source, &FormatOptions::default())
            .unwrap();
        assert_eq!(formatted, source);
    }

    #[test]
    fn test_final_newline() {
        let mut options = FormatOptions::default().with_parser(Parser::Json);
        options.final_newline = Some(true);
        assert_eq!(
            BuiltinFormatter.format("[]", &options).unwrap(),
            "[]\n"
        );

        let mut options = FormatOptions::default().with_parser(Parser::Rust);
        options.final_newline = Some(false);
        assert_eq!(
            BuiltinFormatter.format("fn main(){}", &options).unwrap(),
            "fn main() {}"
        );
    }
}
