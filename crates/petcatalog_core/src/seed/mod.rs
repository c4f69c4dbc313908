//! Deterministic first-run dataset.
//!
//! # Responsibility
//! - Build the optional administrator account and the sample animal roster.
//!
//! # Invariants
//! - Generation is pure apart from password salting.
//! - The dataset has no persisted identity; it is applied whole or not at all.

pub mod admin;
pub mod roster;
pub mod text;

use crate::auth::{PasswordHashError, PasswordHasher};
use crate::config::AdminSeedSettings;
use crate::model::pet::Pet;
use crate::model::user::User;

pub use admin::admin_user;
pub use roster::{city_at, roster_pets, SpeciesRoster, CATS, CITIES, DOGS};
pub use text::describe_pet;

/// Records to insert on first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDataset {
    pub admin: Option<User>,
    pub pets: Vec<Pet>,
}

impl SeedDataset {
    /// Fails only when the configured admin password cannot be hashed.
    pub fn generate(
        admin: Option<&AdminSeedSettings>,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self, PasswordHashError> {
        Ok(Self {
            admin: admin_user(admin, hasher)?,
            pets: roster_pets(),
        })
    }
}
