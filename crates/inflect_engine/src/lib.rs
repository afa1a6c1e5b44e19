//! Inflection Engine
//!
//! Transforms free text into a requested grammatical case, word by word.
//!
//! # Contract
//!
//! - The case code is validated against the registry before any work is done.
//!   An unknown code is the only failure that aborts a request.
//! - Each whitespace-separated word is inflected independently using the top
//!   parse returned by the [`MorphAnalyzer`].
//! - A word the analyzer cannot inflect is kept unchanged and reported through
//!   a `tracing` warning. A single miss never fails the request (unless the
//!   caller opted into [`InflectorOptions::strict`]).
//! - A word that started with an uppercase letter comes back with an uppercase
//!   first letter, whatever form the analyzer produced.
//!
//! # Modules
//!
//! - [`analyzer`]: The morphological analyzer capability consumed by the engine
//! - [`lexicon`]: A table-driven analyzer loaded from TOML or JSON
//! - [`inflector`]: The engine itself
//! - [`report`]: Per-word outcomes and multi-case results

pub mod analyzer;
pub mod inflector;
pub mod lexicon;
pub mod report;

pub use analyzer::{MorphAnalyzer, WordParse};
pub use inflector::{InflectError, Inflector, InflectorOptions};
pub use lexicon::{Lexicon, LexiconAnalyzer, LexiconError, LexiconParse};
pub use report::{InflectedForms, InflectionReport, MissReason, WordOutcome};
