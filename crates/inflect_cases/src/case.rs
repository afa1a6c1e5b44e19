//! The grammatical case value object.

use serde::Serialize;
use std::fmt;

/// A grammatical case the inflection engine can target.
///
/// Cases are defined once in the registry tables and shared as `&'static Case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Case {
    /// Short stable identifier (e.g., "datv")
    pub code: &'static str,

    /// Display name (e.g., "дательный")
    pub name: &'static str,

    /// The question the case answers (e.g., "Кому? Чему?")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,

    /// Usage example
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'static str>,
}

impl Case {
    /// Create a case with a description and an example
    pub const fn new(
        code: &'static str,
        name: &'static str,
        description: Option<&'static str>,
        example: Option<&'static str>,
    ) -> Self {
        Self {
            code,
            name,
            description,
            example,
        }
    }

    /// Description followed by the example, e.g. `"Кто? Что?: хомяк ест"`.
    ///
    /// Returns an empty string if neither is set.
    pub fn full_description(&self) -> String {
        let mut full = String::new();
        if let Some(description) = self.description {
            full.push_str(description);
        }
        if let Some(example) = self.example {
            full.push_str(": ");
            full.push_str(example);
        }
        full
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
