//! Adoptable animal record.
//!
//! # Invariants
//! - `age_months` is measured in months.
//! - `photos` keeps insertion order; the first entry is the cover photo.

use super::{require_non_empty, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Species {
    Dog,
    Cat,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

/// Adoption lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetStatus {
    /// Listed and open for adoption requests.
    Available,
    /// An adoption is being arranged.
    Pending,
    Adopted,
}

/// Animal record as persisted in `pets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub name: String,
    pub species: Species,
    pub breed: String,
    /// Serialized as `age` to match the table column.
    #[serde(rename = "age")]
    pub age_months: u32,
    pub gender: Gender,
    pub city: String,
    pub description: String,
    pub photos: Vec<String>,
    pub status: PetStatus,
}

impl Pet {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("breed", &self.breed)?;
        require_non_empty("city", &self.city)?;
        if self.photos.iter().any(|photo| photo.trim().is_empty()) {
            return Err(ValidationError::EmptyField("photos"));
        }
        Ok(())
    }
}
