//! Field declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The storage kind of a field.
///
/// `Char` and `Text` form the text-bearing family that can be inflected.
/// `Email`, `Slug`, `Url`, `FilePath` and `CommaSeparatedInteger` are
/// specialised short-text kinds and belong to the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Short text with a length limit
    Char,
    /// Unbounded text
    Text,
    Email,
    Slug,
    Url,
    FilePath,
    CommaSeparatedInteger,

    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    Json,
    Binary,
}

impl FieldKind {
    /// Whether fields of this kind can carry inflected variants.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FieldKind::Char
                | FieldKind::Text
                | FieldKind::Email
                | FieldKind::Slug
                | FieldKind::Url
                | FieldKind::FilePath
                | FieldKind::CommaSeparatedInteger
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Char => "char",
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Slug => "slug",
            FieldKind::Url => "url",
            FieldKind::FilePath => "file_path",
            FieldKind::CommaSeparatedInteger => "comma_separated_integer",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::DateTime => "date_time",
            FieldKind::Json => "json",
            FieldKind::Binary => "binary",
        };
        write!(f, "{}", name)
    }
}

/// A field declaration on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name (unique within the record)
    pub name: String,

    /// Storage kind
    pub kind: FieldKind,

    /// Maximum length in characters, if limited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<String>,

    /// Help text shown next to the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    /// Whether the stored value may be null
    #[serde(default)]
    pub nullable: bool,

    /// Whether an empty value passes validation
    #[serde(default)]
    pub blank: bool,
}

impl FieldDecl {
    /// Create a new required field
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            max_length: None,
            verbose_name: None,
            help_text: None,
            nullable: false,
            blank: false,
        }
    }

    /// Create a new optional (nullable, blank) field
    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            nullable: true,
            blank: true,
            ..Self::required(name, kind)
        }
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
        self.verbose_name = Some(verbose_name.into());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn is_optional(&self) -> bool {
        self.nullable && self.blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_family() {
        assert!(FieldKind::Char.is_text());
        assert!(FieldKind::Text.is_text());
        assert!(FieldKind::Slug.is_text());
        assert!(!FieldKind::Integer.is_text());
        assert!(!FieldKind::Json.is_text());
    }

    #[test]
    fn test_optional_builder() {
        let field = FieldDecl::optional("subtitle", FieldKind::Char)
            .with_max_length(50)
            .with_verbose_name("Подзаголовок");

        assert!(field.is_optional());
        assert_eq!(field.max_length, Some(50));
        assert_eq!(field.verbose_name.as_deref(), Some("Подзаголовок"));
        assert!(!FieldDecl::required("id", FieldKind::Integer).is_optional());
    }

    #[test]
    fn test_kind_serde_names_match_display() {
        for kind in [FieldKind::FilePath, FieldKind::DateTime, FieldKind::Char] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.to_string());
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let field: FieldDecl =
            serde_json::from_str(r#"{"name": "title", "kind": "char", "max_length": 100}"#).unwrap();
        assert_eq!(field, FieldDecl::required("title", FieldKind::Char).with_max_length(100));
    }
}
