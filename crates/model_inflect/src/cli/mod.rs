//! CLI commands for Model Inflect

pub mod cases;
pub mod derive;
pub mod fill;
pub mod inflect;
pub mod output;

use anyhow::{Context, Result};
use inflect_engine::{Inflector, InflectorOptions, LexiconAnalyzer};
use model_inflect::config::InflectConfig;
use std::path::PathBuf;
use tracing::{info, warn};

/// Build an inflector over the lexicon given on the command line, falling
/// back to the configured one.
///
/// Without any lexicon every word is kept as it is.
pub fn build_inflector(
    lexicon: Option<PathBuf>,
    strict: bool,
    config: &InflectConfig,
) -> Result<Inflector<LexiconAnalyzer>> {
    let analyzer = match lexicon.or_else(|| config.inflect.lexicon.clone()) {
        Some(path) => {
            let analyzer = LexiconAnalyzer::load(&path)
                .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
            info!(path = %path.display(), words = analyzer.len(), "Using lexicon");
            analyzer
        }
        None => {
            warn!("No lexicon configured; words will be kept as they are");
            LexiconAnalyzer::new()
        }
    };

    let options = InflectorOptions {
        strict: strict || config.inflect.strict,
    };
    Ok(Inflector::new(analyzer).with_options(options))
}
