//! Catalog schema creation.
//!
//! # Responsibility
//! - Create the `users` and `pets` tables when they are missing.
//!
//! # Invariants
//! - Schema application is additive: no drops, no alterations.
//! - Re-applying on an initialized store is a no-op.

use super::open::Session;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::time::Instant;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables created by [`ensure_schema`].
pub const CATALOG_TABLES: &[&str] = &["users", "pets"];

/// Applies the catalog schema inside one transaction.
///
/// # Side effects
/// - Emits `schema_apply` logging events with duration and status.
pub fn ensure_schema(session: &mut Session) -> DbResult<()> {
    let started_at = Instant::now();
    info!(
        "event=schema_apply module=db status=start session={}",
        session.id()
    );

    let result = session.transaction().and_then(|tx| {
        tx.execute_batch(SCHEMA_SQL)?;
        tx.commit()?;
        Ok(())
    });

    match &result {
        Ok(()) => info!(
            "event=schema_apply module=db status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=schema_apply module=db status=error duration_ms={} error_code=schema_create_failed error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Returns whether `table_name` exists in the connected database.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
