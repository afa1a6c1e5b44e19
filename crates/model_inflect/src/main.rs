//! Model Inflect command-line tool
//!
//! - `cases`: list the grammatical cases
//! - `inflect`: inflect a text into one or more cases
//! - `derive`: expand a record definition into its full schema
//! - `fill`: populate the derived fields of a JSON record

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inflect_logging::{init_logging, LogConfig};
use model_inflect::config::{load_config, load_default_config, InflectConfig};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "model-inflect", about = "Grammatical case inflection for record fields")]
struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Path to config.toml (default: ~/.model_inflect/config.toml)
    #[arg(long, global = true, env = "MODEL_INFLECT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List grammatical cases
    Cases {
        /// Include cases outside the default set
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inflect text into grammatical cases
    Inflect {
        /// Text to inflect
        text: String,

        /// Case codes (default: configured default cases)
        #[arg(short = 'c', long = "case")]
        cases: Vec<String>,

        /// Lexicon file (.toml or .json)
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Fail if any word cannot be inflected
        #[arg(long)]
        strict: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand a record definition into its full schema
    Derive {
        /// Record definition (.toml or .json)
        schema: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Populate derived fields of a JSON record
    Fill {
        /// Record definition (.toml or .json)
        schema: PathBuf,

        /// JSON record file
        record: PathBuf,

        /// Lexicon file (.toml or .json)
        #[arg(long)]
        lexicon: Option<PathBuf>,

        /// Fail if any word cannot be inflected
        #[arg(long)]
        strict: bool,
    },
}

fn load_settings(path: Option<&PathBuf>) -> Result<InflectConfig> {
    match path {
        Some(path) => {
            load_config(path).with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => load_default_config().context("Failed to load default config"),
    }
}

fn run_command(command: Commands, config: &InflectConfig) -> Result<()> {
    match command {
        Commands::Cases { all, json } => cli::cases::run(cli::cases::CasesArgs { all, json }),
        Commands::Inflect {
            text,
            cases,
            lexicon,
            strict,
            json,
        } => cli::inflect::run(
            cli::inflect::InflectArgs {
                text,
                cases,
                lexicon,
                strict,
                json,
            },
            config,
        ),
        Commands::Derive { schema, json } => {
            cli::derive::run(cli::derive::DeriveArgs { schema, json })
        }
        Commands::Fill {
            schema,
            record,
            lexicon,
            strict,
        } => cli::fill::run(
            cli::fill::FillArgs {
                schema,
                record,
                lexicon,
                strict,
            },
            config,
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_settings(cli.config.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:?}", err);
            return ExitCode::from(1);
        }
    };

    if let Err(err) = init_logging(LogConfig {
        app_name: "model-inflect",
        verbose: cli.verbose,
        log_to_file: config.logging.file,
    }) {
        eprintln!("Warning: {:?}", err);
    }

    match run_command(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:?}", err);
            ExitCode::from(1)
        }
    }
}
