//! Morphological analyzer capability.
//!
//! The engine never inspects grammatical attributes itself. It asks an
//! analyzer for the parses of a single word and asks the best parse for the
//! form in a given case.
//!
//! # Concurrency
//!
//! Analyzers are called through `&self`. An analyzer that is not safe for
//! concurrent calls must either synchronize internally or be instantiated once
//! per thread; the engine adds no locking of its own. Construct the analyzer
//! once at startup and share it by reference or through an `Arc`.

use inflect_cases::Case;
use std::sync::Arc;

/// One morphological interpretation of a word.
pub trait WordParse {
    /// The surface form of this parse in `case`, or `None` if the word has no
    /// such form.
    fn inflect(&self, case: &Case) -> Option<String>;
}

/// Parses single words into ranked interpretations.
pub trait MorphAnalyzer {
    type Parse: WordParse;

    /// All parses of `word`, best first. An empty vector means the word is
    /// unknown to the analyzer.
    fn parse(&self, word: &str) -> Vec<Self::Parse>;
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for &A {
    type Parse = A::Parse;

    fn parse(&self, word: &str) -> Vec<Self::Parse> {
        (**self).parse(word)
    }
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for Arc<A> {
    type Parse = A::Parse;

    fn parse(&self, word: &str) -> Vec<Self::Parse> {
        (**self).parse(word)
    }
}
