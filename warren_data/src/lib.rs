//! Shared data model for Warren content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{HANDS, ValidationError, validate_commands, validate_world};
