//! Cases command - list grammatical cases

use anyhow::Result;
use inflect_cases::{Case, AVAILABLE_CASES, DEFAULT_CASES};
use serde::Serialize;

use crate::cli::output::{or_dash, print_json, print_table};

/// Arguments for the `cases` command
#[derive(Debug)]
pub struct CasesArgs {
    pub all: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CaseRow {
    #[serde(flatten)]
    case: &'static Case,
    default: bool,
}

pub fn run(args: CasesArgs) -> Result<()> {
    let cases: &'static [Case] = if args.all {
        &AVAILABLE_CASES[..]
    } else {
        &DEFAULT_CASES[..]
    };

    if args.json {
        let rows: Vec<CaseRow> = cases
            .iter()
            .map(|case| CaseRow {
                case,
                default: inflect_cases::is_default(case.code),
            })
            .collect();
        return print_json(&rows);
    }

    let rows = cases
        .iter()
        .map(|case| {
            vec![
                case.code.to_string(),
                case.name.to_string(),
                or_dash(case.description),
                or_dash(case.example),
            ]
        })
        .collect();
    print_table(&["CODE", "NAME", "QUESTION", "EXAMPLE"], rows);

    if !args.all {
        println!();
        println!(
            "{} more available with --all",
            AVAILABLE_CASES.len() - DEFAULT_CASES.len()
        );
    }
    Ok(())
}
