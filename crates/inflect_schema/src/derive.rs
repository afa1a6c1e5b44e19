//! Derivation of inflected fields.
//!
//! Validation runs to completion before any field is produced, so a failed
//! derivation never leaves a partially expanded field list behind.

use crate::directive::InflectDirective;
use crate::field::{FieldDecl, FieldKind};
use indexmap::IndexMap;
use inflect_cases::Case;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// A misconfigured inflection directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Invalid case \"{code}\" for field \"{field}\" in {type_name}. Known cases: {}", known.join(", "))]
    UnknownCase {
        type_name: String,
        field: String,
        code: String,
        known: Vec<&'static str>,
    },

    #[error("Field \"{field}\" not found in {type_name}")]
    MissingField { type_name: String, field: String },

    #[error("Field \"{field}\" in {type_name} has unsupported kind {kind}; only text fields can be inflected")]
    UnsupportedFieldKind {
        type_name: String,
        field: String,
        kind: FieldKind,
    },

    #[error("Derived field \"{field}\" in {type_name} collides with an existing field")]
    DuplicateField { type_name: String, field: String },
}

/// Name of the field holding `base` inflected into `case_code`.
pub fn derived_field_name(base: &str, case_code: &str) -> String {
    format!("{}_{}", base, case_code)
}

/// Expand `fields` according to `directive`.
///
/// Returns the original fields followed by one derived field per
/// `(field, case)` pair, in directive order.
pub fn derive_fields(
    type_name: &str,
    fields: &[FieldDecl],
    directive: &InflectDirective,
) -> Result<Vec<FieldDecl>, ConfigurationError> {
    let (_, derived) = plan(type_name, fields, directive)?;
    let mut expanded = Vec::with_capacity(fields.len() + derived.len());
    expanded.extend_from_slice(fields);
    expanded.extend(derived);
    Ok(expanded)
}

/// Validate the directive against `fields` and synthesize the derived fields.
pub(crate) fn plan(
    type_name: &str,
    fields: &[FieldDecl],
    directive: &InflectDirective,
) -> Result<(IndexMap<String, Vec<&'static Case>>, Vec<FieldDecl>), ConfigurationError> {
    let targets = directive.normalize(type_name)?;

    for field_name in targets.keys() {
        let field = fields
            .iter()
            .find(|f| &f.name == field_name)
            .ok_or_else(|| ConfigurationError::MissingField {
                type_name: type_name.to_string(),
                field: field_name.clone(),
            })?;

        if !field.kind.is_text() {
            return Err(ConfigurationError::UnsupportedFieldKind {
                type_name: type_name.to_string(),
                field: field_name.clone(),
                kind: field.kind,
            });
        }
    }

    let mut taken: HashSet<String> = fields.iter().map(|f| f.name.clone()).collect();
    let mut derived = Vec::new();
    for (field_name, cases) in &targets {
        let Some(base) = fields.iter().find(|f| &f.name == field_name) else {
            continue;
        };
        for case in cases {
            let field = inflected_field(base, case);
            if !taken.insert(field.name.clone()) {
                return Err(ConfigurationError::DuplicateField {
                    type_name: type_name.to_string(),
                    field: field.name,
                });
            }
            derived.push(field);
        }
    }

    debug!(
        type_name,
        fields = targets.len(),
        derived = derived.len(),
        "Derived inflected fields"
    );

    Ok((targets, derived))
}

fn inflected_field(base: &FieldDecl, case: &Case) -> FieldDecl {
    FieldDecl {
        name: derived_field_name(&base.name, case.code),
        kind: base.kind,
        max_length: base.max_length,
        verbose_name: base
            .verbose_name
            .as_ref()
            .map(|label| format!("{} ({})", label, case.name)),
        help_text: case.description.map(str::to_string),
        nullable: true,
        blank: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_fields() -> Vec<FieldDecl> {
        vec![
            FieldDecl::required("id", FieldKind::Integer),
            FieldDecl::required("title", FieldKind::Char)
                .with_max_length(100)
                .with_verbose_name("Заголовок"),
            FieldDecl::required("body", FieldKind::Text),
        ]
    }

    #[test]
    fn test_explicit_cases_example() {
        let directive = InflectDirective::cases([("title", ["nomn", "gent"])]);
        let expanded = derive_fields("Article", &article_fields(), &directive).unwrap();

        assert_eq!(expanded.len(), 5);
        let derived = &expanded[3..];
        assert_eq!(derived[0].name, "title_nomn");
        assert_eq!(derived[1].name, "title_gent");
        for field in derived {
            assert_eq!(field.kind, FieldKind::Char);
            assert_eq!(field.max_length, Some(100));
            assert!(field.is_optional());
        }
    }

    #[test]
    fn test_labels_and_help_text() {
        let directive = InflectDirective::cases([("title", ["gent"]), ("body", ["acc2"])]);
        let expanded = derive_fields("Article", &article_fields(), &directive).unwrap();

        let title_gent = &expanded[3];
        assert_eq!(title_gent.verbose_name.as_deref(), Some("Заголовок (родительный)"));
        assert_eq!(title_gent.help_text.as_deref(), Some("Кого? Чего?"));

        // No base label, and acc2 has no description
        let body_acc2 = &expanded[4];
        assert_eq!(body_acc2.name, "body_acc2");
        assert_eq!(body_acc2.kind, FieldKind::Text);
        assert_eq!(body_acc2.verbose_name, None);
        assert_eq!(body_acc2.help_text, None);
        assert_eq!(body_acc2.max_length, None);
    }

    #[test]
    fn test_list_form_uses_default_cases_in_order() {
        let directive = InflectDirective::fields(["body"]);
        let expanded = derive_fields("Article", &article_fields(), &directive).unwrap();

        let names: Vec<_> = expanded[3..].iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["body_nomn", "body_gent", "body_datv", "body_accs", "body_ablt", "body_loct"]
        );
    }

    #[test]
    fn test_missing_field() {
        let directive = InflectDirective::fields(["title", "subtitle"]);
        let err = derive_fields("Article", &article_fields(), &directive).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingField {
                type_name: "Article".to_string(),
                field: "subtitle".to_string(),
            }
        );
    }

    #[test]
    fn test_unsupported_kind() {
        let directive = InflectDirective::cases([("id", ["gent"])]);
        let err = derive_fields("Article", &article_fields(), &directive).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnsupportedFieldKind { ref field, kind: FieldKind::Integer, .. } if field == "id"
        ));
        assert!(err.to_string().contains("Article"));
    }

    #[test]
    fn test_collision_with_declared_field() {
        let mut fields = article_fields();
        fields.push(FieldDecl::optional("title_gent", FieldKind::Char));

        let directive = InflectDirective::cases([("title", ["nomn", "gent"])]);
        let err = derive_fields("Article", &fields, &directive).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateField { ref field, .. } if field == "title_gent"));
    }

    #[test]
    fn test_empty_case_list_derives_nothing() {
        let directive = InflectDirective::cases([("title", Vec::<String>::new())]);
        let expanded = derive_fields("Article", &article_fields(), &directive).unwrap();
        assert_eq!(expanded, article_fields());
    }

    #[test]
    fn test_derived_field_name() {
        assert_eq!(derived_field_name("title", "gent"), "title_gent");
    }
}
