//! Session provider over a resolved SQLite storage target.
//!
//! # Responsibility
//! - Construct sessions (configured SQLite connections) bound to one target.
//! - Offer scoped acquisition that releases the session on every exit path.
//!
//! # Invariants
//! - Returned sessions have `foreign_keys=ON`.
//! - Every opened session is released exactly once (explicit `close` or drop).
//! - In-memory targets are shared by all sessions of the same factory.

use super::location::StorageTarget;
use super::{DbError, DbResult};
use log::{error, info, warn};
use rusqlite::{Connection, Transaction};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use uuid::Uuid;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
enum OpenTarget {
    File(PathBuf),
    SharedMemory(String),
}

/// Process-scoped session factory.
///
/// Built once at startup and passed by reference to whoever needs sessions.
#[derive(Debug)]
pub struct SessionFactory {
    target: StorageTarget,
    open_target: OpenTarget,
    // Keeps a shared in-memory database alive between sessions.
    _memory_anchor: Option<Connection>,
}

impl SessionFactory {
    /// Creates a factory for `target`.
    ///
    /// # Errors
    /// - `DbError::UnsupportedBackend` for remote targets.
    /// - `DbError::Sqlite` when the in-memory anchor cannot be opened.
    pub fn new(target: &StorageTarget) -> DbResult<Self> {
        let (open_target, anchor) = match target {
            StorageTarget::File { path, .. } => (OpenTarget::File(path.clone()), None),
            StorageTarget::Memory => {
                let uri = format!("file:petcatalog-{}?mode=memory&cache=shared", Uuid::new_v4());
                let anchor = Connection::open(&uri)?;
                (OpenTarget::SharedMemory(uri), Some(anchor))
            }
            StorageTarget::Remote { scheme } => {
                error!(
                    "event=session_factory module=db status=error error_code=unsupported_backend scheme={}",
                    scheme
                );
                return Err(DbError::UnsupportedBackend(scheme.clone()));
            }
        };

        Ok(Self {
            target: target.clone(),
            open_target,
            _memory_anchor: anchor,
        })
    }

    /// Returns the storage target sessions are bound to.
    pub fn target(&self) -> &StorageTarget {
        &self.target
    }

    /// Opens a new session.
    ///
    /// # Side effects
    /// - Emits `session_open` logging events with duration and status.
    pub fn open_session(&self) -> DbResult<Session> {
        let started_at = Instant::now();
        let id = Uuid::new_v4();
        info!("event=session_open module=db status=start session={id}");

        match self.connect() {
            Ok(conn) => {
                info!(
                    "event=session_open module=db status=ok session={} duration_ms={}",
                    id,
                    started_at.elapsed().as_millis()
                );
                Ok(Session {
                    conn,
                    release: ReleaseGuard {
                        id,
                        opened_at: started_at,
                    },
                })
            }
            Err(err) => {
                error!(
                    "event=session_open module=db status=error session={} duration_ms={} error_code=db_open_failed error={}",
                    id,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Runs `work` with a freshly opened session and releases it afterwards.
    ///
    /// The session is released on success, on error and on unwinding.
    pub fn with_session<T, E>(
        &self,
        work: impl FnOnce(&mut Session) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<DbError>,
    {
        let mut session = self.open_session()?;
        work(&mut session)
    }

    fn connect(&self) -> DbResult<Connection> {
        let conn = match &self.open_target {
            OpenTarget::File(path) => Connection::open(path)?,
            OpenTarget::SharedMemory(uri) => Connection::open(uri)?,
        };
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

/// Unit-of-work handle owned by exactly one caller.
#[derive(Debug)]
pub struct Session {
    conn: Connection,
    release: ReleaseGuard,
}

impl Session {
    pub fn id(&self) -> Uuid {
        self.release.id
    }

    /// Borrows the underlying connection for repository access.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Starts a transaction that rolls back unless committed.
    pub fn transaction(&mut self) -> DbResult<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    /// Releases the session, surfacing close errors instead of dropping them.
    pub fn close(self) -> DbResult<()> {
        let Self { conn, release } = self;
        let result = conn.close().map_err(|(_, err)| DbError::Sqlite(err));
        if let Err(err) = &result {
            warn!(
                "event=session_close module=db status=error session={} error={}",
                release.id, err
            );
        }
        drop(release);
        result
    }
}

#[derive(Debug)]
struct ReleaseGuard {
    id: Uuid,
    opened_at: Instant,
}

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        info!(
            "event=session_close module=db status=ok session={} held_ms={}",
            self.id,
            self.opened_at.elapsed().as_millis()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::SessionFactory;
    use crate::db::{DbError, StorageTarget};

    #[test]
    fn memory_sessions_share_one_database() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();

        let first = factory.open_session().unwrap();
        first
            .connection()
            .execute_batch("CREATE TABLE marker (value INTEGER); INSERT INTO marker VALUES (7);")
            .unwrap();
        first.close().unwrap();

        let second = factory.open_session().unwrap();
        let value: i64 = second
            .connection()
            .query_row("SELECT value FROM marker;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn separate_memory_factories_are_isolated() {
        let first = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let second = SessionFactory::new(&StorageTarget::Memory).unwrap();

        first
            .open_session()
            .unwrap()
            .connection()
            .execute_batch("CREATE TABLE marker (value INTEGER);")
            .unwrap();

        let exists: i64 = second
            .open_session()
            .unwrap()
            .connection()
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE name = 'marker');",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(exists, 0);
    }

    #[test]
    fn sessions_enable_foreign_keys() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let session = factory.open_session().unwrap();
        let enabled: i64 = session
            .connection()
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn remote_target_is_rejected() {
        let err = SessionFactory::new(&StorageTarget::Remote {
            scheme: "postgresql".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, DbError::UnsupportedBackend(scheme) if scheme == "postgresql"));
    }

    #[test]
    fn with_session_propagates_work_errors() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let result: Result<(), DbError> = factory.with_session(|session| {
            session.connection().execute_batch("SELECT * FROM missing;")?;
            Ok(())
        });
        assert!(matches!(result, Err(DbError::Sqlite(_))));
    }

    #[test]
    fn uncommitted_transaction_rolls_back_on_drop() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let mut session = factory.open_session().unwrap();
        session
            .connection()
            .execute_batch("CREATE TABLE marker (value INTEGER);")
            .unwrap();

        {
            let tx = session.transaction().unwrap();
            tx.execute("INSERT INTO marker VALUES (1);", []).unwrap();
        }

        let count: i64 = session
            .connection()
            .query_row("SELECT COUNT(*) FROM marker;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
