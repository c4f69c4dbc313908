//! First-run bootstrap for the pet-adoption catalog store.
//! Prepares storage, creates the schema and seeds an empty store exactly once.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;

pub use auth::{Argon2Hasher, PasswordHashError, PasswordHasher};
pub use bootstrap::{
    run_bootstrap, store_is_empty, BootstrapError, BootstrapOutcome, BootstrapResult,
    Bootstrapper, StoreCounts,
};
pub use config::{AdminSeedSettings, BootstrapSettings};
pub use db::{
    ensure_schema, resolve_storage_target, DbError, DbResult, Session, SessionFactory,
    StorageTarget,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::pet::{Gender, Pet, PetStatus, Species};
pub use model::user::User;
pub use model::ValidationError;
pub use repo::pet_repo::{PetRepository, SqlitePetRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use seed::{describe_pet, SeedDataset};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
