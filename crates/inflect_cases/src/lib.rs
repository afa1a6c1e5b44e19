//! Grammatical Case Registry
//!
//! The fixed vocabulary of grammatical cases that model inflection can target.
//! Cases are identified by short, stable codes (`nomn`, `gent`, ...) and carry
//! human-readable metadata for labels and help text.
//!
//! The registry is split into two ordered collections:
//!
//! - [`DEFAULT_CASES`]: the six primary cases, in canonical order
//! - [`AVAILABLE_CASES`]: the default cases followed by the rare ones
//!
//! The registry is immutable and process-wide. Lookups go through a lazily
//! built index and are safe to perform from any thread.
//!
//! # Modules
//!
//! - [`case`]: The [`Case`] value object
//! - [`registry`]: The case tables and lookup functions

pub mod case;
pub mod registry;

pub use case::Case;
pub use registry::{
    available_codes, default_codes, is_available, is_default, lookup, lookup_all,
    UnknownCaseError, ABLT, ACC2, ACCS, AVAILABLE_CASES, DATV, DEFAULT_CASES, GEN2, GENT, LOC2,
    LOCT, NOMN, VOCT,
};
