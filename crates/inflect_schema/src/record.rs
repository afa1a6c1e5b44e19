//! Record definitions and finished schemas.

use crate::derive::{derived_field_name, plan, ConfigurationError};
use crate::directive::InflectDirective;
use crate::field::FieldDecl;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A record type as authored: its fields plus an optional directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDefinition {
    /// Record type name, used in error messages
    pub name: String,

    /// Declared fields, in order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,

    /// Which fields need inflected variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflect: Option<InflectDirective>,
}

impl RecordDefinition {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            name: name.into(),
            fields,
            inflect: None,
        }
    }

    pub fn with_inflect(mut self, directive: InflectDirective) -> Self {
        self.inflect = Some(directive);
        self
    }

    /// Validate the directive and produce the finished schema.
    pub fn build(self) -> Result<RecordSchema, ConfigurationError> {
        RecordSchema::define(self.name, self.fields, self.inflect.as_ref())
    }
}

/// A finished record schema with its derived fields in place.
///
/// Immutable once defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSchema {
    name: String,
    fields: Vec<FieldDecl>,
    /// Base field -> case codes it was inflected into
    inflected_fields: IndexMap<String, Vec<&'static str>>,
}

impl RecordSchema {
    /// Define a record type, expanding `directive` into derived fields.
    ///
    /// Without a directive the fields are taken as they are.
    pub fn define(
        name: impl Into<String>,
        fields: Vec<FieldDecl>,
        directive: Option<&InflectDirective>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let Some(directive) = directive else {
            return Ok(Self {
                name,
                fields,
                inflected_fields: IndexMap::new(),
            });
        };

        let (targets, derived) = plan(&name, &fields, directive)?;
        let mut fields = fields;
        fields.extend(derived);

        let inflected_fields = targets
            .into_iter()
            .map(|(field, cases)| (field, cases.iter().map(|c| c.code).collect()))
            .collect();

        Ok(Self {
            name,
            fields,
            inflected_fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields: declared ones first, then derived ones.
    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the base fields that were inflected, in directive order.
    pub fn inflected_fields(&self) -> Vec<&str> {
        self.inflected_fields.keys().map(String::as_str).collect()
    }

    /// Case codes `base` was inflected into, or `None` if it was not.
    pub fn inflected_cases(&self, base: &str) -> Option<&[&'static str]> {
        self.inflected_fields.get(base).map(Vec::as_slice)
    }

    /// `(case code, derived field name)` pairs for `base`.
    pub fn inflected_field_names(&self, base: &str) -> Vec<(&'static str, String)> {
        self.inflected_cases(base)
            .unwrap_or_default()
            .iter()
            .map(|code| (*code, derived_field_name(base, code)))
            .collect()
    }
}
