//! The inflection engine.

use crate::analyzer::{MorphAnalyzer, WordParse};
use crate::report::{InflectedForms, InflectionReport, MissReason, WordOutcome};
use inflect_cases::{Case, UnknownCaseError};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while inflecting text.
#[derive(Debug, Error)]
pub enum InflectError {
    #[error(transparent)]
    UnknownCase(#[from] UnknownCaseError),

    /// Only returned in strict mode.
    #[error("Could not inflect to {case}: {}", words.join(", "))]
    Incomplete { case: String, words: Vec<String> },
}

/// Engine behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InflectorOptions {
    /// Fail with [`InflectError::Incomplete`] instead of keeping words the
    /// analyzer could not inflect.
    pub strict: bool,
}

/// Inflects multi-word text into grammatical cases.
///
/// Holds nothing but the analyzer, so it is `Send`/`Sync` whenever the
/// analyzer is.
#[derive(Debug, Clone)]
pub struct Inflector<A> {
    analyzer: A,
    options: InflectorOptions,
}

impl<A: MorphAnalyzer> Inflector<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            options: InflectorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InflectorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> InflectorOptions {
        self.options
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Inflect every word of `text` into the case identified by `case_code`.
    ///
    /// Words the analyzer cannot inflect are kept as they are. Empty input
    /// yields an empty string.
    pub fn inflect_to_case(&self, text: &str, case_code: &str) -> Result<String, InflectError> {
        let report = self.inflect_report(text, case_code)?;
        self.finish(&report)
    }

    /// Inflect `text` into each requested case.
    ///
    /// All codes are validated before the analyzer is consulted. A code that
    /// appears more than once yields a single entry. Each distinct word is
    /// parsed once per call regardless of how many cases are requested.
    pub fn inflect_to_cases<I, S>(&self, text: &str, case_codes: I) -> Result<InflectedForms, InflectError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reports = self.inflect_reports(text, case_codes)?;
        self.forms_from_reports(&reports)
    }

    /// Assemble the inflected text of each report, honoring strict mode.
    ///
    /// Lets callers keep the per-word outcomes without analyzing the text a
    /// second time.
    pub fn forms_from_reports(&self, reports: &[InflectionReport]) -> Result<InflectedForms, InflectError> {
        let mut forms = InflectedForms::default();
        for report in reports {
            forms.insert(report.case, self.finish(report)?);
        }
        Ok(forms)
    }

    /// Per-word outcomes of inflecting `text` into one case.
    ///
    /// Never fails because of individual words, even in strict mode.
    pub fn inflect_report(&self, text: &str, case_code: &str) -> Result<InflectionReport, UnknownCaseError> {
        let case = inflect_cases::lookup(case_code)?;
        let mut reports = self.reports_for(text, &[case]);
        Ok(reports.pop().unwrap_or_else(|| InflectionReport::new(case, Vec::new())))
    }

    /// Per-word outcomes for several cases, in request order, without
    /// duplicate cases.
    pub fn inflect_reports<I, S>(&self, text: &str, case_codes: I) -> Result<Vec<InflectionReport>, UnknownCaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cases: Vec<&'static Case> = Vec::new();
        for case in inflect_cases::lookup_all(case_codes)? {
            if !cases.iter().any(|c| c.code == case.code) {
                cases.push(case);
            }
        }
        Ok(self.reports_for(text, &cases))
    }

    fn reports_for(&self, text: &str, cases: &[&'static Case]) -> Vec<InflectionReport> {
        let words: Vec<&str> = text.split_whitespace().collect();

        // Top parse per distinct word; `None` when the analyzer knows nothing.
        let mut parses: HashMap<&str, Option<A::Parse>> = HashMap::new();
        for &word in &words {
            if !parses.contains_key(word) {
                let parse = self.analyzer.parse(word).into_iter().next();
                debug!(word = %word, found = parse.is_some(), "Parsed word");
                parses.insert(word, parse);
            }
        }

        cases
            .iter()
            .map(|&case| {
                let outcomes = words
                    .iter()
                    .map(|&word| {
                        let parse = parses.get(word).and_then(Option::as_ref);
                        inflect_word(word, parse, case)
                    })
                    .collect();
                InflectionReport::new(case, outcomes)
            })
            .collect()
    }

    fn finish(&self, report: &InflectionReport) -> Result<String, InflectError> {
        if self.options.strict && !report.is_complete() {
            return Err(InflectError::Incomplete {
                case: report.case.to_string(),
                words: report.misses().map(|w| w.original.clone()).collect(),
            });
        }
        Ok(report.text())
    }
}

fn inflect_word<P: WordParse>(word: &str, parse: Option<&P>, case: &Case) -> WordOutcome {
    let is_capitalized = word.chars().next().is_some_and(char::is_uppercase);

    let (inflected, miss) = match parse {
        None => (None, Some(MissReason::NoParse)),
        Some(parse) => match parse.inflect(case) {
            Some(form) => (Some(form), None),
            None => (None, Some(MissReason::CaseUnavailable)),
        },
    };

    if let Some(reason) = miss {
        warn!(word = %word, case = case.code, reason = %reason, "Cannot inflect word");
    }

    let mut output = inflected.unwrap_or_else(|| word.to_string());
    if is_capitalized {
        output = capitalize_first(&output);
    }

    WordOutcome {
        original: word.to_string(),
        output,
        miss,
    }
}

/// Uppercase the first character and leave the rest untouched.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
