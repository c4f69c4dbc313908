//! First-run detection.
//!
//! # Invariants
//! - A store counts as empty only when it has zero users AND zero pets.
//!   Any row in either table means "already seeded", including stores that
//!   hold pets but no users.

use crate::repo::pet_repo::{PetRepository, SqlitePetRepository};
use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
use crate::repo::RepoResult;
use rusqlite::Connection;

/// Row counts observed by the emptiness guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub users: u64,
    pub pets: u64,
}

impl StoreCounts {
    pub fn is_empty(&self) -> bool {
        !(self.users > 0 || self.pets > 0)
    }
}

pub fn store_counts(conn: &Connection) -> RepoResult<StoreCounts> {
    Ok(StoreCounts {
        users: SqliteUserRepository::new(conn).count_users()?,
        pets: SqlitePetRepository::new(conn).count_pets()?,
    })
}

/// Returns whether seeding should run against `conn`.
pub fn store_is_empty(conn: &Connection) -> RepoResult<bool> {
    Ok(store_counts(conn)?.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{store_is_empty, StoreCounts};
    use crate::db::{ensure_schema, SessionFactory, StorageTarget};

    #[test]
    fn only_zero_zero_is_empty() {
        assert!(StoreCounts { users: 0, pets: 0 }.is_empty());
        assert!(!StoreCounts { users: 1, pets: 0 }.is_empty());
        assert!(!StoreCounts { users: 0, pets: 1 }.is_empty());
        assert!(!StoreCounts { users: 3, pets: 30 }.is_empty());
    }

    #[test]
    fn user_only_store_is_not_empty() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let mut session = factory.open_session().unwrap();
        ensure_schema(&mut session).unwrap();
        assert!(store_is_empty(session.connection()).unwrap());

        session
            .connection()
            .execute_batch(
                "INSERT INTO users (full_name, email, city, password)
                 VALUES ('João Silva', 'joao@email.com', 'São Paulo', '$argon2id$v=19$placeholder');",
            )
            .unwrap();
        assert!(!store_is_empty(session.connection()).unwrap());
    }
}
