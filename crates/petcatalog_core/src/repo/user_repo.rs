//! User repository contracts and SQLite implementation.

use super::{count_rows, RepoResult};
use crate::model::user::User;
use rusqlite::{params, Connection, OptionalExtension, Row};

const USER_SELECT_SQL: &str = "SELECT
    full_name,
    email,
    whatsapp,
    city,
    password
FROM users";

/// Repository interface for user accounts.
pub trait UserRepository {
    fn count_users(&self) -> RepoResult<u64>;
    fn create_user(&self, user: &User) -> RepoResult<i64>;
    fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>>;
    fn list_users(&self) -> RepoResult<Vec<User>>;
}

/// SQLite-backed user repository.
///
/// Borrows a connection so it works on a plain session or inside an open
/// transaction alike.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn count_users(&self) -> RepoResult<u64> {
        count_rows(self.conn, "users")
    }

    fn create_user(&self, user: &User) -> RepoResult<i64> {
        user.validate()?;

        self.conn.execute(
            "INSERT INTO users (
                full_name,
                email,
                whatsapp,
                city,
                password
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                user.full_name.as_str(),
                user.email.as_str(),
                user.whatsapp.as_str(),
                user.city.as_str(),
                user.password.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("{USER_SELECT_SQL} WHERE email = ?1;"),
                [email],
                parse_user_row,
            )
            .optional()?;
        Ok(user)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;
        let users = stmt
            .query_map([], parse_user_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }
}

fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        full_name: row.get("full_name")?,
        email: row.get("email")?,
        whatsapp: row.get("whatsapp")?,
        city: row.get("city")?,
        password: row.get("password")?,
    })
}

#[cfg(test)]
mod tests {
    use super::{SqliteUserRepository, UserRepository};
    use crate::db::{ensure_schema, SessionFactory, StorageTarget};
    use crate::model::user::User;
    use crate::repo::RepoError;

    fn user(email: &str) -> User {
        User {
            full_name: "Maria Santos".to_string(),
            email: email.to_string(),
            whatsapp: "21999999999".to_string(),
            city: "Rio de Janeiro".to_string(),
            password: "$argon2id$v=19$placeholder".to_string(),
        }
    }

    #[test]
    fn create_count_and_find() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let mut session = factory.open_session().unwrap();
        ensure_schema(&mut session).unwrap();
        let repo = SqliteUserRepository::new(session.connection());

        assert_eq!(repo.count_users().unwrap(), 0);
        repo.create_user(&user("maria@email.com")).unwrap();
        assert_eq!(repo.count_users().unwrap(), 1);

        let loaded = repo.find_user_by_email("maria@email.com").unwrap().unwrap();
        assert_eq!(loaded, user("maria@email.com"));
        assert!(repo.find_user_by_email("nobody@email.com").unwrap().is_none());
    }

    #[test]
    fn duplicate_email_is_a_db_error() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let mut session = factory.open_session().unwrap();
        ensure_schema(&mut session).unwrap();
        let repo = SqliteUserRepository::new(session.connection());

        repo.create_user(&user("maria@email.com")).unwrap();
        let err = repo.create_user(&user("maria@email.com")).unwrap_err();
        assert!(matches!(err, RepoError::Db(_)));
        assert_eq!(repo.list_users().unwrap().len(), 1);
    }

    #[test]
    fn invalid_user_never_reaches_sql() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let mut session = factory.open_session().unwrap();
        ensure_schema(&mut session).unwrap();
        let repo = SqliteUserRepository::new(session.connection());

        let err = repo.create_user(&user("broken")).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert_eq!(repo.count_users().unwrap(), 0);
    }
}
