//! Schema Field Deriver
//!
//! Expands a record definition that carries an inflection directive into one
//! extra field per `(text field, case)` pair.
//!
//! # Lifecycle
//!
//! 1. **Declare**: the author lists the record's fields and, optionally, which
//!    text fields need inflected variants ([`InflectDirective`])
//! 2. **Define**: [`RecordSchema::define`] validates the directive and appends
//!    the derived fields. Any misconfiguration fails here, before the schema
//!    exists
//! 3. **Use**: the finished [`RecordSchema`] is immutable. Populating derived
//!    values from the base values is left to the caller
//!
//! Derived fields are named `{field}_{case}` (e.g. `title_gent`), keep the
//! base field's kind and `max_length`, and are always optional.
//!
//! # Modules
//!
//! - [`field`]: Field declarations and kinds
//! - [`directive`]: The inflection directive and its normalization
//! - [`derive`]: The derivation itself and its errors
//! - [`record`]: Record definitions and finished schemas

pub mod derive;
pub mod directive;
pub mod field;
pub mod record;

pub use derive::{derive_fields, derived_field_name, ConfigurationError};
pub use directive::InflectDirective;
pub use field::{FieldDecl, FieldKind};
pub use record::{RecordDefinition, RecordSchema};
