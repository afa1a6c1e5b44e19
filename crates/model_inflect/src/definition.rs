//! Record definition files.

use inflect_schema::{ConfigurationError, RecordDefinition, RecordSchema};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Failed to read definition {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported definition format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Read a record definition (`.toml` or `.json`) and build its schema.
pub fn load_definition(path: &Path) -> Result<RecordSchema, DefinitionError> {
    let content = std::fs::read_to_string(path).map_err(|source| DefinitionError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let definition: RecordDefinition = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => return Err(DefinitionError::UnsupportedFormat(path.display().to_string())),
    };

    let schema = definition.build()?;
    info!(
        record = schema.name(),
        fields = schema.fields().len(),
        inflected = schema.inflected_fields().len(),
        "Loaded record definition"
    );
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_toml_definition() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("city.toml");
        std::fs::write(
            &path,
            "name = \"City\"\ninflect = [\"name\"]\n\n[[fields]]\nname = \"name\"\nkind = \"char\"\n",
        )
        .unwrap();

        let schema = load_definition(&path).unwrap();
        assert_eq!(schema.name(), "City");
        assert_eq!(schema.fields().len(), 7);
    }

    #[test]
    fn test_load_json_definition() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("city.json");
        std::fs::write(
            &path,
            r#"{"name": "City", "fields": [{"name": "name", "kind": "text"}], "inflect": {"name": ["gent"]}}"#,
        )
        .unwrap();

        let schema = load_definition(&path).unwrap();
        assert!(schema.field("name_gent").is_some());
    }

    #[test]
    fn test_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("city.yaml");
        std::fs::write(&path, "name: City").unwrap();

        assert!(matches!(
            load_definition(&path),
            Err(DefinitionError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_invalid_directive_surfaces_configuration_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("city.json");
        std::fs::write(
            &path,
            r#"{"name": "City", "fields": [{"name": "name", "kind": "char"}], "inflect": {"name": ["xxx"]}}"#,
        )
        .unwrap();

        let err = load_definition(&path).unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::Configuration(ConfigurationError::UnknownCase { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_definition(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, DefinitionError::Io { .. }));
    }
}
