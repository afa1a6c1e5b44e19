//! Model Inflect
//!
//! Glue between record schemas and the inflection engine:
//!
//! - [`config`]: `config.toml` settings (lexicon, strict mode, default cases)
//! - [`definition`]: Loading record definitions from TOML or JSON files
//! - [`populate`]: Filling derived fields of a record from its base values

pub mod config;
pub mod definition;
pub mod populate;

pub use config::{load_config, load_default_config, ConfigError, InflectConfig};
pub use definition::{load_definition, DefinitionError};
pub use populate::{populate_record, populate_value, PopulateError};
