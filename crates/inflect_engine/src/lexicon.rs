//! Table-driven morphological analyzer.
//!
//! A lexicon maps surface words to their forms per case code:
//!
//! ```toml
//! [words."саша"]
//! gent = "саши"
//! datv = "саше"
//!
//! [words."кашу"]
//! datv = "каше"
//! ```
//!
//! Lookups are case-insensitive (keys are stored lowercased). Every case code
//! in the table is validated against the registry at load time.

use crate::analyzer::{MorphAnalyzer, WordParse};
use inflect_cases::{Case, UnknownCaseError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported lexicon format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("Word \"{word}\" duplicates \"{existing}\" (lookups ignore letter case)")]
    DuplicateWord { word: String, existing: String },

    #[error("Invalid form for word \"{word}\": {source}")]
    UnknownCase {
        word: String,
        #[source]
        source: UnknownCaseError,
    },
}

/// Serialized lexicon: word -> (case code -> form).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub words: BTreeMap<String, BTreeMap<String, String>>,
}

/// The single parse a lexicon entry provides.
#[derive(Debug, Clone)]
pub struct LexiconParse {
    forms: Arc<HashMap<String, String>>,
}

impl WordParse for LexiconParse {
    fn inflect(&self, case: &Case) -> Option<String> {
        self.forms.get(case.code).cloned()
    }
}

/// A [`MorphAnalyzer`] backed by an in-memory lexicon.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer {
    entries: HashMap<String, Arc<HashMap<String, String>>>,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an analyzer from a parsed lexicon, validating its case codes.
    ///
    /// Two words that differ only by letter case are rejected.
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self, LexiconError> {
        let mut analyzer = Self::new();
        let mut seen: HashMap<String, String> = HashMap::new();
        for (word, forms) in lexicon.words {
            if let Some(existing) = seen.insert(word.to_lowercase(), word.clone()) {
                return Err(LexiconError::DuplicateWord { word, existing });
            }
            analyzer.insert(&word, forms)?;
        }
        Ok(analyzer)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = toml::from_str(content)?;
        Self::from_lexicon(lexicon)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_json::from_str(content)?;
        Self::from_lexicon(lexicon)
    }

    /// Load a lexicon file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let analyzer = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(LexiconError::UnsupportedFormat(path.display().to_string())),
        };

        debug!(path = %path.display(), words = analyzer.len(), "Loaded lexicon");
        Ok(analyzer)
    }

    /// Add (or replace) the forms of `word`.
    pub fn insert<I, K, V>(&mut self, word: &str, forms: I) -> Result<(), LexiconError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = HashMap::new();
        for (code, form) in forms {
            let code = code.into();
            inflect_cases::lookup(&code).map_err(|source| LexiconError::UnknownCase {
                word: word.to_string(),
                source,
            })?;
            table.insert(code, form.into());
        }
        if self.entries.insert(word.to_lowercase(), Arc::new(table)).is_some() {
            debug!(word = %word, "Replaced lexicon entry");
        }
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_word<I, K, V>(mut self, word: &str, forms: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(word, forms)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MorphAnalyzer for LexiconAnalyzer {
    type Parse = LexiconParse;

    fn parse(&self, word: &str) -> Vec<LexiconParse> {
        self.entries
            .get(&word.to_lowercase())
            .map(|forms| LexiconParse {
                forms: Arc::clone(forms),
            })
            .into_iter()
            .collect()
    }
}
