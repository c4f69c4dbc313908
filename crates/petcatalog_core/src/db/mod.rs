//! SQLite storage bootstrap: location resolution, sessions and schema.
//!
//! # Responsibility
//! - Resolve a `DATABASE_URL` into a concrete storage target.
//! - Open scoped sessions over that target.
//! - Create the catalog schema when it is missing.
//!
//! # Invariants
//! - The parent directory of a file-backed target exists before any
//!   connection is opened.
//! - Core code must not read/write catalog data before the schema exists.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod location;
mod open;
pub mod schema;

pub use location::{resolve_storage_target, resolve_storage_target_from, StorageTarget};
pub use open::{Session, SessionFactory};
pub use schema::{ensure_schema, table_exists};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Sqlite(rusqlite::Error),
    UnsupportedBackend(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to prepare `{}`: {source}", path.display())
            }
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedBackend(scheme) => {
                write!(f, "unsupported storage backend `{scheme}`; only sqlite is available")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedBackend(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
