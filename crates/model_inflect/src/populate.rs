//! Filling derived fields of a record.
//!
//! For every inflected base field, the record gets one value per derived
//! field: the inflected text when the base holds a string, `null` when the
//! base is missing or `null`.

use inflect_engine::{InflectError, Inflector, MorphAnalyzer};
use inflect_schema::RecordSchema;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PopulateError {
    #[error("Record must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("Field \"{field}\" must hold text, found {found}")]
    NotText { field: String, found: &'static str },

    #[error("Failed to inflect field \"{field}\": {source}")]
    Inflect {
        field: String,
        #[source]
        source: InflectError,
    },
}

/// Fill every derived field of `record` from its base field.
///
/// Existing derived values are overwritten. Every base field is inflected
/// before anything is written, so on error `record` is left untouched.
/// Returns the number of derived fields written.
pub fn populate_record<A: MorphAnalyzer>(
    schema: &RecordSchema,
    inflector: &Inflector<A>,
    record: &mut Map<String, Value>,
) -> Result<usize, PopulateError> {
    let mut updates: Vec<(String, Value)> = Vec::new();

    for base in schema.inflected_fields() {
        let targets = schema.inflected_field_names(base);

        let text = match record.get(base) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.as_str()),
            Some(other) => {
                return Err(PopulateError::NotText {
                    field: base.to_string(),
                    found: json_type(other),
                })
            }
        };

        let Some(text) = text else {
            updates.extend(targets.into_iter().map(|(_, name)| (name, Value::Null)));
            continue;
        };

        let codes = targets.iter().map(|(code, _)| *code);
        let forms = inflector
            .inflect_to_cases(text, codes)
            .map_err(|source| PopulateError::Inflect {
                field: base.to_string(),
                source,
            })?;

        for (code, name) in targets {
            let value = forms.get(code).map_or(Value::Null, |form| Value::String(form.to_string()));
            updates.push((name, value));
        }
        debug!(field = base, cases = forms.len(), "Inflected base field");
    }

    let written = updates.len();
    record.extend(updates);
    Ok(written)
}

/// Fill a JSON value that must be an object.
pub fn populate_value<A: MorphAnalyzer>(
    schema: &RecordSchema,
    inflector: &Inflector<A>,
    value: &mut Value,
) -> Result<usize, PopulateError> {
    match value {
        Value::Object(record) => populate_record(schema, inflector, record),
        other => Err(PopulateError::NotAnObject(json_type(other))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inflect_engine::{InflectorOptions, LexiconAnalyzer};
    use inflect_schema::{FieldDecl, FieldKind, InflectDirective};
    use serde_json::json;

    fn schema() -> RecordSchema {
        RecordSchema::define(
            "City",
            vec![
                FieldDecl::required("name", FieldKind::Char).with_max_length(64),
                FieldDecl::optional("motto", FieldKind::Text),
            ],
            Some(&InflectDirective::cases([
                ("name", vec!["gent", "loct"]),
                ("motto", vec!["datv"]),
            ])),
        )
        .unwrap()
    }

    fn inflector() -> Inflector<LexiconAnalyzer> {
        let analyzer = LexiconAnalyzer::new()
            .with_word("москва", [("gent", "москвы"), ("loct", "москве")])
            .unwrap();
        Inflector::new(analyzer)
    }

    #[test]
    fn test_populate_string_fields() {
        let mut value = json!({"name": "Москва", "motto": null});
        let written = populate_value(&schema(), &inflector(), &mut value).unwrap();

        assert_eq!(written, 3);
        assert_eq!(value["name_gent"], "Москвы");
        assert_eq!(value["name_loct"], "Москве");
        assert_eq!(value["motto_datv"], Value::Null);
    }

    #[test]
    fn test_missing_base_writes_null() {
        let mut value = json!({"name": "Москва"});
        populate_value(&schema(), &inflector(), &mut value).unwrap();
        assert!(value.get("motto_datv").unwrap().is_null());
    }

    #[test]
    fn test_unknown_words_kept_in_lenient_mode() {
        let mut value = json!({"name": "Тверь"});
        populate_value(&schema(), &inflector(), &mut value).unwrap();
        assert_eq!(value["name_gent"], "Тверь");
    }

    #[test]
    fn test_strict_mode_reports_field() {
        let inflector = inflector().with_options(InflectorOptions { strict: true });
        let mut value = json!({"name": "Тверь"});

        let err = populate_value(&schema(), &inflector, &mut value).unwrap_err();
        match err {
            PopulateError::Inflect { field, source } => {
                assert_eq!(field, "name");
                assert!(matches!(source, InflectError::Incomplete { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failed_population_leaves_record_untouched() {
        let inflector = inflector().with_options(InflectorOptions { strict: true });
        let mut value = json!({"name": "Москва", "motto": "xyz"});
        let before = value.clone();

        let err = populate_value(&schema(), &inflector, &mut value).unwrap_err();
        assert!(matches!(err, PopulateError::Inflect { ref field, .. } if field == "motto"));
        assert_eq!(value, before);
    }

    #[test]
    fn test_non_text_after_valid_field_leaves_record_untouched() {
        let mut value = json!({"name": "Москва", "motto": ["xyz"]});
        let before = value.clone();

        let err = populate_value(&schema(), &inflector(), &mut value).unwrap_err();
        assert!(matches!(err, PopulateError::NotText { .. }));
        assert_eq!(value, before);
    }

    #[test]
    fn test_non_text_base_rejected() {
        let mut value = json!({"name": 42});
        let err = populate_value(&schema(), &inflector(), &mut value).unwrap_err();
        assert_eq!(err.to_string(), "Field \"name\" must hold text, found number");
    }

    #[test]
    fn test_non_object_rejected() {
        let mut value = json!(["Москва"]);
        let err = populate_value(&schema(), &inflector(), &mut value).unwrap_err();
        assert!(matches!(err, PopulateError::NotAnObject("array")));
    }

    #[test]
    fn test_schema_without_directive_writes_nothing() {
        let schema = RecordSchema::define(
            "Tag",
            vec![FieldDecl::required("label", FieldKind::Slug)],
            None,
        )
        .unwrap();
        let mut value = json!({"label": "moscow"});
        assert_eq!(populate_value(&schema, &inflector(), &mut value).unwrap(), 0);
        assert_eq!(value, json!({"label": "moscow"}));
    }
}
