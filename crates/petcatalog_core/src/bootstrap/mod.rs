//! First-run bootstrap orchestration.
//!
//! # Responsibility
//! - Sequence schema creation, the emptiness guard and seeding.
//! - Keep the animal roster all-or-nothing.
//!
//! # Invariants
//! - Seeding runs at most once per store: any existing user or pet skips it.
//! - The administrator commits in its own transaction, before the roster.
//! - The roster commits in one transaction; failures roll it back entirely.
//! - Every session opened here is released before returning.

pub mod guard;

use crate::auth::{PasswordHashError, PasswordHasher};
use crate::config::{AdminSeedSettings, BootstrapSettings};
use crate::db::{ensure_schema, resolve_storage_target, DbError, Session, SessionFactory};
use crate::repo::pet_repo::{PetRepository, SqlitePetRepository};
use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
use crate::repo::{RepoError, RepoResult};
use crate::seed::SeedDataset;
use log::{error, info, warn};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub use guard::{store_counts, store_is_empty, StoreCounts};

pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Terminal bootstrap failure, by stage.
#[derive(Debug)]
pub enum BootstrapError {
    /// Directory preparation or session acquisition failed.
    Storage(DbError),
    /// Schema creation failed; seeding was not attempted.
    Schema(DbError),
    /// Admin password could not be hashed; nothing was written.
    Credentials(PasswordHashError),
    /// Guard query or seed commit failed; the failing phase was rolled back.
    Seed(RepoError),
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "storage unavailable: {err}"),
            Self::Schema(err) => write!(f, "schema creation failed: {err}"),
            Self::Credentials(err) => write!(f, "{err}"),
            Self::Seed(err) => write!(f, "seeding failed: {err}"),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) | Self::Schema(err) => Some(err),
            Self::Credentials(err) => Some(err),
            Self::Seed(err) => Some(err),
        }
    }
}

impl From<DbError> for BootstrapError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<PasswordHashError> for BootstrapError {
    fn from(value: PasswordHashError) -> Self {
        Self::Credentials(value)
    }
}

impl From<RepoError> for BootstrapError {
    fn from(value: RepoError) -> Self {
        Self::Seed(value)
    }
}

/// Result of a successful bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Store already had data; nothing was written.
    AlreadySeeded(StoreCounts),
    Seeded {
        admin_created: bool,
        pets_created: usize,
    },
}

/// Bootstrap orchestrator over an injected session factory and hasher.
pub struct Bootstrapper<'a> {
    sessions: &'a SessionFactory,
    hasher: &'a dyn PasswordHasher,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(sessions: &'a SessionFactory, hasher: &'a dyn PasswordHasher) -> Self {
        Self { sessions, hasher }
    }

    /// Ensures the schema and seeds an empty store.
    ///
    /// # Errors
    /// - `BootstrapError::Storage` when a session cannot be opened.
    /// - `BootstrapError::Schema` when schema creation fails.
    /// - `BootstrapError::Credentials` when the admin password cannot be hashed.
    /// - `BootstrapError::Seed` when the guard or a seed commit fails. An
    ///   administrator committed before a roster failure stays committed.
    pub fn bootstrap(
        &self,
        admin: Option<&AdminSeedSettings>,
    ) -> BootstrapResult<BootstrapOutcome> {
        let started_at = Instant::now();
        info!("event=bootstrap module=bootstrap status=start");

        let result = self.run(admin);
        match &result {
            Ok(BootstrapOutcome::AlreadySeeded(counts)) => info!(
                "event=bootstrap module=bootstrap status=skipped duration_ms={} users={} pets={}",
                started_at.elapsed().as_millis(),
                counts.users,
                counts.pets
            ),
            Ok(BootstrapOutcome::Seeded {
                admin_created,
                pets_created,
            }) => info!(
                "event=bootstrap module=bootstrap status=ok duration_ms={} admin={} pets={}",
                started_at.elapsed().as_millis(),
                admin_created,
                pets_created
            ),
            Err(err) => error!(
                "event=bootstrap module=bootstrap status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn run(&self, admin: Option<&AdminSeedSettings>) -> BootstrapResult<BootstrapOutcome> {
        self.sessions
            .with_session(|session| ensure_schema(session).map_err(BootstrapError::Schema))?;

        // Schema session is released first; guard and seed phases see committed tables.
        self.sessions.with_session(|session| {
            let counts = store_counts(session.connection())?;
            if !counts.is_empty() {
                return Ok(BootstrapOutcome::AlreadySeeded(counts));
            }

            self.seed(session, admin)
        })
    }

    fn seed(
        &self,
        session: &mut Session,
        admin: Option<&AdminSeedSettings>,
    ) -> BootstrapResult<BootstrapOutcome> {
        let dataset = SeedDataset::generate(admin, self.hasher)?;

        let admin_created = match &dataset.admin {
            Some(user) => {
                commit_phase(session, "admin", |conn| {
                    SqliteUserRepository::new(conn).create_user(user)
                })?;
                true
            }
            None => {
                info!("event=seed_admin module=bootstrap status=skipped reason=absent");
                false
            }
        };

        let pets_created = commit_phase(session, "roster", |conn| {
            let repo = SqlitePetRepository::new(conn);
            for pet in &dataset.pets {
                repo.create_pet(pet)?;
            }
            Ok(dataset.pets.len())
        })?;

        Ok(BootstrapOutcome::Seeded {
            admin_created,
            pets_created,
        })
    }
}

/// Runs `work` in its own transaction; commits on success, rolls back otherwise.
fn commit_phase<T>(
    session: &mut Session,
    phase: &str,
    work: impl FnOnce(&Connection) -> RepoResult<T>,
) -> BootstrapResult<T> {
    let tx = session.transaction()?;

    let value = match work(&tx) {
        Ok(value) => value,
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                warn!(
                    "event=seed_{} module=bootstrap status=error error_code=rollback_failed err={}",
                    phase, rollback_err
                );
            }
            error!(
                "event=seed_{} module=bootstrap status=rolled_back error={}",
                phase, err
            );
            return Err(BootstrapError::Seed(err));
        }
    };

    // A failed commit leaves the transaction open; dropping it rolls back.
    tx.commit().map_err(|err| {
        error!(
            "event=seed_{} module=bootstrap status=rolled_back error_code=commit_failed error={}",
            phase, err
        );
        BootstrapError::Seed(RepoError::from(err))
    })?;
    info!("event=seed_{} module=bootstrap status=ok", phase);
    Ok(value)
}

/// Process entry point: resolves storage, then bootstraps with `settings`.
pub fn run_bootstrap(
    settings: &BootstrapSettings,
    hasher: &dyn PasswordHasher,
) -> BootstrapResult<BootstrapOutcome> {
    let target = resolve_storage_target(&settings.database_url)?;
    let sessions = SessionFactory::new(&target)?;
    Bootstrapper::new(&sessions, hasher).bootstrap(settings.admin.as_ref())
}
