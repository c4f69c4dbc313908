//! Credential helpers used when seeding accounts.

pub mod password;

pub use password::{Argon2Hasher, PasswordHashError, PasswordHasher};
