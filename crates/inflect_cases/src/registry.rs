//! Case tables and lookups.
//!
//! `AVAILABLE_CASES` begins with the six `DEFAULT_CASES` in the same order,
//! followed by the rare cases. Order is only significant for display and for
//! expanding list-form schema directives.

use crate::Case;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

pub const NOMN: &str = "nomn";
pub const GENT: &str = "gent";
pub const DATV: &str = "datv";
pub const ACCS: &str = "accs";
pub const ABLT: &str = "ablt";
pub const LOCT: &str = "loct";
pub const VOCT: &str = "voct";
pub const GEN2: &str = "gen2";
pub const ACC2: &str = "acc2";
pub const LOC2: &str = "loc2";

const NOMINATIVE: Case = Case::new(NOMN, "именительный", Some("Кто? Что?"), Some("хомяк ест"));
const GENITIVE: Case = Case::new(GENT, "родительный", Some("Кого? Чего?"), Some("у нас нет хомяка"));
const DATIVE: Case = Case::new(DATV, "дательный", Some("Кому? Чему?"), Some("сказать хомяку спасибо"));
const ACCUSATIVE: Case = Case::new(ACCS, "винительный", Some("Кого? Что?"), Some("хомяк читает книгу"));
const INSTRUMENTAL: Case = Case::new(ABLT, "творительный", Some("Кем? Чем?"), Some("зерно съедено хомяком"));
const PREPOSITIONAL: Case = Case::new(LOCT, "предложный", Some("О ком? О чём?"), Some("хомяка несут в корзинке"));

const VOCATIVE: Case = Case::new(
    VOCT,
    "звательный",
    Some("Его формы используются при обращении к человеку"),
    Some("Саш, пойдем в кино"),
);
const PARTITIVE: Case = Case::new(
    GEN2,
    "второй родительный",
    Some("частичный"),
    Some("ложка сахару (gent - производство сахара); стакан яду (gent - нет яда)"),
);
const INTO_ACCUSATIVE: Case = Case::new(ACC2, "второй винительный", None, Some("записался в солдаты"));
const LOCATIVE: Case = Case::new(
    LOC2,
    "второй предложный",
    Some("местный"),
    Some(
        "я у него в долгу (loct - напоминать о долге); висит в шкафу (loct - монолог о шкафе); \
         весь в снегу (loct - писать о снеге)",
    ),
);

/// The six primary cases, in canonical order.
pub static DEFAULT_CASES: [Case; 6] = [
    NOMINATIVE,
    GENITIVE,
    DATIVE,
    ACCUSATIVE,
    INSTRUMENTAL,
    PREPOSITIONAL,
];

/// Every case the registry knows: the defaults followed by the rare cases.
pub static AVAILABLE_CASES: [Case; 10] = [
    NOMINATIVE,
    GENITIVE,
    DATIVE,
    ACCUSATIVE,
    INSTRUMENTAL,
    PREPOSITIONAL,
    VOCATIVE,
    PARTITIVE,
    INTO_ACCUSATIVE,
    LOCATIVE,
];

static CASE_INDEX: LazyLock<HashMap<&'static str, &'static Case>> =
    LazyLock::new(|| AVAILABLE_CASES.iter().map(|case| (case.code, case)).collect());

/// A case code that is not part of `AVAILABLE_CASES`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown case \"{code}\". Known cases: {}", available_codes().join(", "))]
pub struct UnknownCaseError {
    pub code: String,
}

impl UnknownCaseError {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Look up a case by code.
pub fn lookup(code: &str) -> Result<&'static Case, UnknownCaseError> {
    CASE_INDEX
        .get(code)
        .copied()
        .ok_or_else(|| UnknownCaseError::new(code))
}

/// Look up several cases, failing on the first unknown code.
pub fn lookup_all<I, S>(codes: I) -> Result<Vec<&'static Case>, UnknownCaseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes.into_iter().map(|code| lookup(code.as_ref())).collect()
}

/// Whether `code` is one of the six primary cases.
pub fn is_default(code: &str) -> bool {
    DEFAULT_CASES.iter().any(|case| case.code == code)
}

pub fn is_available(code: &str) -> bool {
    CASE_INDEX.contains_key(code)
}

/// Codes of `DEFAULT_CASES`, in canonical order.
pub fn default_codes() -> Vec<&'static str> {
    DEFAULT_CASES.iter().map(|case| case.code).collect()
}

/// Codes of `AVAILABLE_CASES`, in display order.
pub fn available_codes() -> Vec<&'static str> {
    AVAILABLE_CASES.iter().map(|case| case.code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_cases_are_available() {
        for case in &DEFAULT_CASES {
            assert!(is_available(case.code), "{} missing from AVAILABLE_CASES", case.code);
            assert_eq!(lookup(case.code).unwrap(), case);
        }
    }

    #[test]
    fn test_defaults_prefix_available_cases() {
        assert_eq!(&AVAILABLE_CASES[..DEFAULT_CASES.len()], &DEFAULT_CASES[..]);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = AVAILABLE_CASES.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), AVAILABLE_CASES.len());
    }

    #[test]
    fn test_default_codes_order() {
        assert_eq!(default_codes(), vec![NOMN, GENT, DATV, ACCS, ABLT, LOCT]);
    }

    #[test]
    fn test_available_codes_order() {
        assert_eq!(
            available_codes(),
            vec![NOMN, GENT, DATV, ACCS, ABLT, LOCT, VOCT, GEN2, ACC2, LOC2]
        );
    }

    #[test]
    fn test_lookup_every_available_code() {
        for code in available_codes() {
            assert_eq!(lookup(code).unwrap().code, code);
        }
    }

    #[test]
    fn test_lookup_unknown_code() {
        let err = lookup("abcd").unwrap_err();
        assert_eq!(err.code, "abcd");

        let msg = err.to_string();
        assert!(msg.contains("abcd"));
        assert!(msg.contains("nomn"));
        assert!(msg.contains("loc2"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("NOMN").is_err());
    }

    #[test]
    fn test_is_default() {
        assert!(is_default(DATV));
        assert!(!is_default(VOCT));
        assert!(!is_default("nope"));
    }

    #[test]
    fn test_lookup_all() {
        let cases = lookup_all([GENT, VOCT]).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].code, GENT);
        assert_eq!(cases[1].code, VOCT);

        let err = lookup_all(["gent", "bogus", "also_bogus"]).unwrap_err();
        assert_eq!(err.code, "bogus");
    }
}
