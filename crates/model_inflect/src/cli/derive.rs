//! Derive command - expand a record definition

use anyhow::{Context, Result};
use model_inflect::definition::load_definition;
use std::path::PathBuf;

use crate::cli::output::{or_dash, print_json, print_table};

/// Arguments for the `derive` command
#[derive(Debug)]
pub struct DeriveArgs {
    pub schema: PathBuf,
    pub json: bool,
}

pub fn run(args: DeriveArgs) -> Result<()> {
    let schema = load_definition(&args.schema)
        .with_context(|| format!("Failed to load record definition: {}", args.schema.display()))?;

    if args.json {
        return print_json(&schema);
    }

    println!("{}", schema.name());
    let rows = schema
        .fields()
        .iter()
        .map(|field| {
            vec![
                field.name.clone(),
                field.kind.to_string(),
                or_dash(field.max_length),
                or_dash(field.verbose_name.as_deref()),
                if field.nullable { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    print_table(&["FIELD", "KIND", "MAX LENGTH", "LABEL", "NULLABLE"], rows);

    for base in schema.inflected_fields() {
        let derived: Vec<String> = schema
            .inflected_field_names(base)
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        println!("{} -> {}", base, derived.join(", "));
    }
    Ok(())
}
