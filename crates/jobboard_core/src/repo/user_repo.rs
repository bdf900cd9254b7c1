//! Account repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide registration, lookup, listing and profile update APIs over
//!   the `users` table.
//!
//! # Invariants
//! - Emails are persisted normalized (lowercase) and unique; a duplicate
//!   surfaces as `Validation(DuplicateEmail)`, not a raw constraint error.
//! - `is_company` is written once at registration; no update path exists.
//! - Profile updates only ever target the acting account; claiming an
//!   email held by another account is denied before SQL runs.

use crate::model::user::{normalize_email, NewUser, User, UserId, UserUpdate};
use crate::model::ValidationError;
use crate::repo::{bool_to_int, ensure_connection_ready, int_to_bool, RepoError, RepoResult};
use rusqlite::{params, Connection, ErrorCode, Row};

const USER_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    password_hash,
    is_company,
    created_at
FROM users";

const USERS_DEFAULT_LIMIT: u32 = 100;

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[(
    "users",
    &[
        "id",
        "name",
        "email",
        "password_hash",
        "is_company",
        "created_at",
    ],
)];

/// Repository interface for account operations.
pub trait UserRepository {
    /// Registers one account and returns the stored record.
    fn create_user(&self, new_user: &NewUser) -> RepoResult<User>;
    /// Gets one account by id.
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Gets one account by (normalized) email.
    fn get_user_by_email(&self, email: &str) -> RepoResult<Option<User>>;
    /// Lists accounts ordered by id ascending. Limit defaults to 100.
    fn list_users(&self, limit: Option<u32>, offset: u32) -> RepoResult<Vec<User>>;
    /// Overwrites the profile of the acting account.
    fn update_user(&self, update: &UserUpdate, actor_id: UserId) -> RepoResult<User>;
}

/// SQLite-backed account repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, new_user: &NewUser) -> RepoResult<User> {
        new_user.validate()?;
        let email = normalize_email(&new_user.email);

        let inserted = self.conn.execute(
            "INSERT INTO users (name, email, password_hash, is_company) VALUES (?1, ?2, ?3, ?4);",
            params![
                new_user.name.as_str(),
                email.as_str(),
                new_user.password_hash.as_str(),
                bool_to_int(new_user.is_company),
            ],
        );
        if let Err(err) = inserted {
            if is_unique_email_violation(&err) {
                return Err(ValidationError::DuplicateEmail(email).into());
            }
            return Err(err.into());
        }

        let id = self.conn.last_insert_rowid();
        load_required_user(self.conn, id)
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let normalized = normalize_email(email);
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE email = ?1;"))?;
        let mut rows = stmt.query([normalized.as_str()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn list_users(&self, limit: Option<u32>, offset: u32) -> RepoResult<Vec<User>> {
        let limit = normalize_user_limit(limit);
        let mut stmt = self.conn.prepare(&format!(
            "{USER_SELECT_SQL} ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?;
        let mut rows = stmt.query(params![i64::from(limit), i64::from(offset)])?;

        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }
        Ok(users)
    }

    fn update_user(&self, update: &UserUpdate, actor_id: UserId) -> RepoResult<User> {
        update.validate()?;
        let email = normalize_email(&update.email);

        // The target is always the acting account; the only cross-account
        // hazard is claiming an email already held by someone else.
        if let Some(holder) = self.get_user_by_email(&email)? {
            if holder.id != actor_id {
                return Err(RepoError::PermissionDenied {
                    action: "claim this email",
                    user_id: actor_id,
                });
            }
        }

        let changed = match &update.password_hash {
            Some(hash) => self.conn.execute(
                "UPDATE users SET name = ?1, email = ?2, password_hash = ?3 WHERE id = ?4;",
                params![update.name.as_str(), email.as_str(), hash.as_str(), actor_id],
            )?,
            None => self.conn.execute(
                "UPDATE users SET name = ?1, email = ?2 WHERE id = ?3;",
                params![update.name.as_str(), email.as_str(), actor_id],
            )?,
        };
        if changed == 0 {
            return Err(RepoError::UserNotFound(actor_id));
        }

        load_required_user(self.conn, actor_id)
    }
}

/// Normalizes a user list limit to the documented default.
pub fn normalize_user_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) | None => USERS_DEFAULT_LIMIT,
        Some(value) => value,
    }
}

fn load_required_user(conn: &Connection, id: UserId) -> RepoResult<User> {
    let mut stmt = conn.prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_user_row(row);
    }
    Err(RepoError::InvalidData(format!(
        "user {id} missing after write"
    )))
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let is_company = int_to_bool(row.get("is_company")?, "users.is_company")?;
    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        is_company,
        created_at: row.get("created_at")?,
    })
}

fn is_unique_email_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, Some(message)) => {
            failure.code == ErrorCode::ConstraintViolation && message.contains("users.email")
        }
        _ => false,
    }
}
