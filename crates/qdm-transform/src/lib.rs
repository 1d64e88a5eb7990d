//! Row transformation engine for Quick Data Mapper.
//!
//! [`apply`] reshapes source rows into the target field shape described by a
//! [`qdm_model::FieldMapping`]; [`apply_reverse`] runs the inverse direction
//! for the JSON-to-CSV path. [`TargetVocabulary`] manages the candidate
//! target names offered while a mapping is edited.

mod apply;
mod vocabulary;

pub use apply::{apply, apply_reverse};
pub use vocabulary::{DEFAULT_TARGET_FIELDS, TargetVocabulary};
