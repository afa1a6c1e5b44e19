//! Inflection directives.
//!
//! A directive says which fields of a record need inflected variants. It comes
//! in two shapes:
//!
//! ```toml
//! # every listed field gets all default cases
//! inflect = ["title", "summary"]
//! ```
//!
//! ```toml
//! # explicit cases per field
//! [inflect]
//! title = ["nomn", "gent"]
//! ```

use crate::derive::ConfigurationError;
use indexmap::IndexMap;
use inflect_cases::{Case, DEFAULT_CASES};
use serde::{Deserialize, Serialize};

/// Which fields to inflect, and into which cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InflectDirective {
    /// Field names; each is inflected into every default case
    Fields(Vec<String>),

    /// Field name -> case codes, in author order
    Cases(IndexMap<String, Vec<String>>),
}

impl InflectDirective {
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InflectDirective::Fields(names.into_iter().map(Into::into).collect())
    }

    pub fn cases<I, F, C, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (F, C)>,
        F: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InflectDirective::Cases(
            entries
                .into_iter()
                .map(|(field, codes)| (field.into(), codes.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }

    /// The field names the directive mentions, in order, without repeats.
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            InflectDirective::Fields(names) => {
                let mut seen: Vec<&str> = Vec::new();
                for name in names {
                    if !seen.contains(&name.as_str()) {
                        seen.push(name);
                    }
                }
                seen
            }
            InflectDirective::Cases(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// Resolve to field name -> cases, validating every case code.
    ///
    /// Repeated codes for the same field collapse to their first occurrence.
    pub fn normalize(&self, type_name: &str) -> Result<IndexMap<String, Vec<&'static Case>>, ConfigurationError> {
        let mut normalized = IndexMap::new();
        match self {
            InflectDirective::Fields(names) => {
                for name in names {
                    normalized
                        .entry(name.clone())
                        .or_insert_with(|| DEFAULT_CASES.iter().collect());
                }
            }
            InflectDirective::Cases(map) => {
                for (field, codes) in map {
                    let mut cases: Vec<&'static Case> = Vec::with_capacity(codes.len());
                    for code in codes {
                        let case = inflect_cases::lookup(code).map_err(|_| ConfigurationError::UnknownCase {
                            type_name: type_name.to_string(),
                            field: field.clone(),
                            code: code.clone(),
                            known: inflect_cases::available_codes(),
                        })?;
                        if !cases.iter().any(|c| c.code == case.code) {
                            cases.push(case);
                        }
                    }
                    normalized.insert(field.clone(), cases);
                }
            }
        }
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(cases: &[&Case]) -> Vec<&'static str> {
        cases.iter().map(|c| c.code).collect()
    }

    #[test]
    fn test_fields_expand_to_default_cases() {
        let directive = InflectDirective::fields(["title", "summary"]);
        let normalized = directive.normalize("Article").unwrap();

        assert_eq!(normalized.keys().collect::<Vec<_>>(), vec!["title", "summary"]);
        for cases in normalized.values() {
            assert_eq!(codes(cases), inflect_cases::default_codes());
        }
    }

    #[test]
    fn test_explicit_cases_verbatim() {
        let directive = InflectDirective::cases([("title", ["voct", "nomn", "voct"])]);
        let normalized = directive.normalize("Article").unwrap();
        assert_eq!(codes(&normalized["title"]), vec!["voct", "nomn"]);
    }

    #[test]
    fn test_unknown_case_names_type_and_vocabulary() {
        let directive = InflectDirective::cases([("title", ["nomn", "dative"])]);
        let err = directive.normalize("Article").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("dative"));
        assert!(msg.contains("Article"));
        assert!(msg.contains("loc2"));
    }

    #[test]
    fn test_field_names_deduplicated() {
        let directive = InflectDirective::fields(["title", "title", "body"]);
        assert_eq!(directive.field_names(), vec!["title", "body"]);
    }

    #[test]
    fn test_untagged_json_shapes() {
        let list: InflectDirective = serde_json::from_str(r#"["title"]"#).unwrap();
        assert_eq!(list, InflectDirective::fields(["title"]));

        let map: InflectDirective = serde_json::from_str(r#"{"title": ["gent"], "body": []}"#).unwrap();
        match map {
            InflectDirective::Cases(map) => {
                assert_eq!(map.keys().collect::<Vec<_>>(), vec!["title", "body"]);
            }
            other => panic!("expected map form, got {other:?}"),
        }
    }
}
