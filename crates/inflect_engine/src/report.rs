//! Inflection results.

use indexmap::IndexMap;
use inflect_cases::Case;
use serde::Serialize;
use std::fmt;

/// Why a word was left in its original form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissReason {
    /// The analyzer returned no parse for the word
    NoParse,

    /// The best parse has no form in the requested case
    CaseUnavailable,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::NoParse => write!(f, "no parse"),
            MissReason::CaseUnavailable => write!(f, "case unavailable"),
        }
    }
}

/// The outcome for a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordOutcome {
    /// The word as it appeared in the input
    pub original: String,

    /// The word as it appears in the output
    pub output: String,

    /// Set when the original word was kept because it could not be inflected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miss: Option<MissReason>,
}

impl WordOutcome {
    pub fn is_inflected(&self) -> bool {
        self.miss.is_none()
    }
}

/// Per-word outcomes of inflecting one text into one case.
#[derive(Debug, Clone, Serialize)]
pub struct InflectionReport {
    /// Code of the requested case
    pub case: &'static str,

    /// Outcomes in input order
    pub words: Vec<WordOutcome>,
}

impl InflectionReport {
    pub(crate) fn new(case: &'static Case, words: Vec<WordOutcome>) -> Self {
        Self {
            case: case.code,
            words,
        }
    }

    /// The inflected text: outputs joined with single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.output.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True if every word was inflected.
    pub fn is_complete(&self) -> bool {
        self.words.iter().all(WordOutcome::is_inflected)
    }

    /// Words that were kept in their original form.
    pub fn misses(&self) -> impl Iterator<Item = &WordOutcome> {
        self.words.iter().filter(|w| !w.is_inflected())
    }
}

/// Inflected text per case code, in the order the cases were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InflectedForms {
    forms: IndexMap<&'static str, String>,
}

impl InflectedForms {
    pub(crate) fn insert(&mut self, case: &'static str, text: String) {
        self.forms.insert(case, text);
    }

    pub fn get(&self, case_code: &str) -> Option<&str> {
        self.forms.get(case_code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Case codes in request order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.forms.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.forms.iter().map(|(code, text)| (*code, text.as_str()))
    }
}

impl IntoIterator for InflectedForms {
    type Item = (&'static str, String);
    type IntoIter = indexmap::map::IntoIter<&'static str, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.into_iter()
    }
}
