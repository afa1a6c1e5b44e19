//! Inflect command - inflect a text into grammatical cases

use anyhow::{Context, Result};
use model_inflect::config::InflectConfig;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::cli::build_inflector;
use crate::cli::output::{print_json, print_table};

/// Arguments for the `inflect` command
#[derive(Debug)]
pub struct InflectArgs {
    pub text: String,
    pub cases: Vec<String>,
    pub lexicon: Option<PathBuf>,
    pub strict: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MissRow {
    case: &'static str,
    word: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct InflectOutput {
    text: String,
    forms: inflect_engine::InflectedForms,
    misses: Vec<MissRow>,
}

pub fn run(args: InflectArgs, config: &InflectConfig) -> Result<()> {
    let inflector = build_inflector(args.lexicon, args.strict, config)?;
    let codes = if args.cases.is_empty() {
        config.inflect.default_cases.clone()
    } else {
        args.cases
    };

    let reports = inflector.inflect_reports(&args.text, &codes)?;
    let forms = inflector
        .forms_from_reports(&reports)
        .with_context(|| format!("Failed to inflect \"{}\"", args.text))?;
    info!(cases = forms.len(), "Inflected text");

    let misses: Vec<MissRow> = reports
        .iter()
        .flat_map(|report| {
            report.misses().map(|word| MissRow {
                case: report.case,
                word: word.original.clone(),
                reason: word.miss.map(|m| m.to_string()).unwrap_or_default(),
            })
        })
        .collect();

    if args.json {
        return print_json(&InflectOutput {
            text: args.text,
            forms,
            misses,
        });
    }

    let rows = forms
        .iter()
        .map(|(code, text)| {
            let name = inflect_cases::lookup(code).map(|c| c.name).unwrap_or(code);
            vec![code.to_string(), name.to_string(), text.to_string()]
        })
        .collect();
    print_table(&["CODE", "CASE", "TEXT"], rows);

    if !misses.is_empty() {
        println!();
        println!("Kept as is:");
        for miss in &misses {
            println!("  [{}] {} ({})", miss.case, miss.word, miss.reason);
        }
    }
    Ok(())
}
