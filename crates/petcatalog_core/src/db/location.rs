//! Storage location resolution for `DATABASE_URL` values.
//!
//! # Responsibility
//! - Turn a connection string into a `StorageTarget`.
//! - Create missing parent directories for file-backed targets.
//!
//! # Invariants
//! - Resolution happens once per process; the target is read-only afterwards.
//! - Directory creation is idempotent and never touches the database file.

use super::{DbError, DbResult};
use log::{error, info};
use std::path::{Component, Path, PathBuf};

const SQLITE_PREFIX: &str = "sqlite://";
const MEMORY_MARKER: &str = ":memory:";

/// Concrete storage location derived from a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    /// SQLite database file at an absolute path.
    File {
        path: PathBuf,
        /// Whether the database file was already present at resolve time.
        existed: bool,
    },
    /// SQLite in-memory store, shared by every session of one factory.
    Memory,
    /// Network-addressed store; nothing to prepare locally.
    Remote { scheme: String },
}

impl StorageTarget {
    /// Returns the database file path for file-backed targets.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path.as_path()),
            Self::Memory | Self::Remote { .. } => None,
        }
    }

    fn mode(&self) -> &str {
        match self {
            Self::File { .. } => "file",
            Self::Memory => "memory",
            Self::Remote { .. } => "remote",
        }
    }
}

/// Resolves `url` relative to the process working directory.
///
/// # Errors
/// - `DbError::Io` when the working directory cannot be read or the parent
///   directory cannot be created.
/// - `DbError::UnsupportedBackend` when `url` has no scheme.
pub fn resolve_storage_target(url: &str) -> DbResult<StorageTarget> {
    let base = std::env::current_dir().map_err(|source| DbError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    resolve_storage_target_from(url, &base)
}

/// Resolves `url`, anchoring relative file paths at `base`.
///
/// Accepted forms:
/// - `sqlite:///relative/file.db` and `sqlite:///./relative/file.db`
/// - `sqlite:////absolute/file.db`
/// - `sqlite://`, `sqlite:///:memory:`
/// - any other `scheme://…` as a remote target
pub fn resolve_storage_target_from(url: &str, base: &Path) -> DbResult<StorageTarget> {
    let url = url.trim();
    let target = match url.strip_prefix(SQLITE_PREFIX) {
        Some(rest) => resolve_sqlite(rest, base)?,
        None => match url.split_once("://") {
            Some((scheme, _)) if !scheme.is_empty() => StorageTarget::Remote {
                scheme: scheme.to_string(),
            },
            _ => return Err(DbError::UnsupportedBackend(url.to_string())),
        },
    };

    match &target {
        StorageTarget::File { path, existed } => info!(
            "event=storage_resolve module=db status=ok mode={} path={} existing={}",
            target.mode(),
            path.display(),
            existed
        ),
        _ => info!(
            "event=storage_resolve module=db status=ok mode={}",
            target.mode()
        ),
    }
    Ok(target)
}

fn resolve_sqlite(rest: &str, base: &Path) -> DbResult<StorageTarget> {
    // `sqlite://` + `/path`: the third slash separates the empty host.
    let raw = rest.strip_prefix('/').unwrap_or(rest);
    let raw = raw.split_once('?').map_or(raw, |(path, _)| path);
    if raw.is_empty() || raw == MEMORY_MARKER {
        return Ok(StorageTarget::Memory);
    }

    let relative = raw.strip_prefix("./").unwrap_or(raw);
    let path = normalize(&base.join(relative));
    ensure_parent_dir(&path)?;
    let existed = path.exists();

    Ok(StorageTarget::File { path, existed })
}

fn ensure_parent_dir(path: &Path) -> DbResult<()> {
    let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
        return Ok(());
    };

    std::fs::create_dir_all(parent).map_err(|source| {
        error!(
            "event=storage_resolve module=db status=error error_code=dir_create_failed dir={} error={}",
            parent.display(),
            source
        );
        DbError::Io {
            path: parent.to_path_buf(),
            source,
        }
    })
}

/// Lexically removes `.` and `..` segments without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::{normalize, resolve_storage_target_from, StorageTarget};
    use crate::db::DbError;
    use std::path::{Path, PathBuf};

    #[test]
    fn relative_url_is_anchored_at_base_and_creates_parent_chain() {
        let dir = tempfile::tempdir().unwrap();
        let target =
            resolve_storage_target_from("sqlite:///./data/nested/pets.db", dir.path()).unwrap();

        let expected = dir.path().join("data").join("nested").join("pets.db");
        assert_eq!(
            target,
            StorageTarget::File {
                path: expected.clone(),
                existed: false,
            }
        );
        assert!(expected.parent().unwrap().is_dir());
        assert!(!expected.exists());
    }

    #[test]
    fn absolute_url_ignores_base() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("abs").join("pets.db");
        let url = format!("sqlite:///{}", absolute.display());

        let target = resolve_storage_target_from(&url, Path::new("/nonexistent-base")).unwrap();
        assert_eq!(target.path(), Some(absolute.as_path()));
        assert!(absolute.parent().unwrap().is_dir());
    }

    #[test]
    fn existing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pets.db"), b"").unwrap();

        let target = resolve_storage_target_from("sqlite:///pets.db", dir.path()).unwrap();
        assert!(matches!(target, StorageTarget::File { existed: true, .. }));
    }

    #[test]
    fn resolving_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = resolve_storage_target_from("sqlite:///db/pets.db", dir.path()).unwrap();
        let second = resolve_storage_target_from("sqlite:///db/pets.db", dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn memory_forms_resolve_to_memory() {
        let base = Path::new("/unused");
        for url in ["sqlite://", "sqlite:///", "sqlite:///:memory:"] {
            assert_eq!(
                resolve_storage_target_from(url, base).unwrap(),
                StorageTarget::Memory,
                "{url}"
            );
        }
    }

    #[test]
    fn network_url_is_a_noop_remote_target() {
        let target =
            resolve_storage_target_from("postgresql://user@db:5432/pets", Path::new("/unused"))
                .unwrap();
        assert_eq!(
            target,
            StorageTarget::Remote {
                scheme: "postgresql".to_string()
            }
        );
    }

    #[test]
    fn url_without_scheme_is_rejected() {
        let err = resolve_storage_target_from("pets.db", Path::new("/unused")).unwrap_err();
        assert!(matches!(err, DbError::UnsupportedBackend(_)));
    }

    #[test]
    fn parent_dir_blocked_by_file_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blocker"), b"").unwrap();

        let err = resolve_storage_target_from("sqlite:///blocker/pets.db", dir.path()).unwrap_err();
        match err {
            DbError::Io { path, .. } => assert_eq!(path, dir.path().join("blocker")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn normalize_drops_dot_segments() {
        assert_eq!(
            normalize(Path::new("/srv/app/./data/../db/pets.db")),
            PathBuf::from("/srv/app/db/pets.db")
        );
    }
}
