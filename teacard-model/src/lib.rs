//! Core data model definitions shared across teacard crates.
#![allow(missing_docs)]

pub mod error;
pub mod field;
pub mod record;

pub use error::{ModelError, Result as ModelResult};
pub use field::{CardPosition, CardRole, FieldDef, FieldGroup, FieldMap};
pub use record::{FieldValue, Record};
