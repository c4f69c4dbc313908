//! Catalog domain model.
//!
//! # Responsibility
//! - Define the record shapes persisted by the catalog store.
//! - Validate records before they reach SQL.
//!
//! # Invariants
//! - Users store a password digest, never a plaintext secret.
//! - Pet enums persist as their upper-case wire names.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod pet;
pub mod user;

/// Rejected record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField(&'static str),
    InvalidEmail(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "field `{field}` must not be empty"),
            Self::InvalidEmail(email) => write!(f, "invalid email address `{email}`"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
