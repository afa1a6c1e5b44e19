//! Fill command - populate derived fields of a JSON record

use anyhow::{Context, Result};
use model_inflect::config::InflectConfig;
use model_inflect::definition::load_definition;
use model_inflect::populate::populate_value;
use std::path::PathBuf;
use tracing::info;

use crate::cli::build_inflector;
use crate::cli::output::print_json;

/// Arguments for the `fill` command
#[derive(Debug)]
pub struct FillArgs {
    pub schema: PathBuf,
    pub record: PathBuf,
    pub lexicon: Option<PathBuf>,
    pub strict: bool,
}

pub fn run(args: FillArgs, config: &InflectConfig) -> Result<()> {
    let schema = load_definition(&args.schema)
        .with_context(|| format!("Failed to load record definition: {}", args.schema.display()))?;
    let inflector = build_inflector(args.lexicon, args.strict, config)?;

    let content = std::fs::read_to_string(&args.record)
        .with_context(|| format!("Failed to read record: {}", args.record.display()))?;
    let mut record: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in record: {}", args.record.display()))?;

    let written = populate_value(&schema, &inflector, &mut record)
        .with_context(|| format!("Failed to populate {}", schema.name()))?;
    info!(record = schema.name(), fields = written, "Populated derived fields");

    print_json(&record)
}
