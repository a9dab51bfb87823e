//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own all SQL touching the `users` and `users_roles` tables.
//! - Provide the role-link ensure operation used by the user service.
//!
//! # Invariants
//! - Users are retired through `status`, never deleted.
//! - `add_role` returns an existing link unchanged, whatever its status.

use rusqlite::{params, Connection, Row};

use crate::model::access::{User, UserRole};
use crate::model::{RecordId, Status};
use crate::repo::{missing_after_write, parse_status, RepoResult};

const USER_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    area_id,
    company_id,
    status,
    created_at,
    updated_at
FROM users";

/// Repository interface for user records and their role links.
pub trait UserRepository {
    /// Inserts one user with default active status and returns the stored
    /// record, storage timestamps included.
    fn create_user(
        &self,
        name: &str,
        email: &str,
        area_id: Option<RecordId>,
        company_id: Option<RecordId>,
    ) -> RepoResult<User>;
    /// Gets one user by id. Missing ids are `Ok(None)`.
    fn get_user_by_id(&self, user_id: RecordId) -> RepoResult<Option<User>>;
    /// Lists every user regardless of status, in insertion order.
    fn get_all_users(&self) -> RepoResult<Vec<User>>;
    /// Sets the status flag and refreshes `updated_at`.
    ///
    /// Missing ids are `Ok(None)` and persist nothing.
    fn update_user_status(&self, user_id: RecordId, status: Status) -> RepoResult<Option<User>>;
    /// Ensures one user/role link exists.
    ///
    /// An existing link for the pair is returned unchanged; otherwise a new
    /// link is inserted with the given `status`. The check and the insert
    /// are not one atomic unit.
    fn add_role(
        &self,
        user_id: RecordId,
        role_id: RecordId,
        status: Status,
    ) -> RepoResult<UserRole>;
}

/// SQLite-backed user repository over a caller-owned connection.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(
        &self,
        name: &str,
        email: &str,
        area_id: Option<RecordId>,
        company_id: Option<RecordId>,
    ) -> RepoResult<User> {
        self.conn.execute(
            "INSERT INTO users (name, email, area_id, company_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![name, email, area_id, company_id],
        )?;
        fetch_user(self.conn, self.conn.last_insert_rowid())
    }

    fn get_user_by_id(&self, user_id: RecordId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([user_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn get_all_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }
        Ok(users)
    }

    fn update_user_status(&self, user_id: RecordId, status: Status) -> RepoResult<Option<User>> {
        let changed = self.conn.execute(
            "UPDATE users
             SET status = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![user_id, status.to_db()],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(fetch_user(self.conn, user_id)?))
    }

    fn add_role(
        &self,
        user_id: RecordId,
        role_id: RecordId,
        status: Status,
    ) -> RepoResult<UserRole> {
        // The lookup ignores status: an inactive link still counts as existing.
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, role_id, status, created_at
             FROM users_roles
             WHERE user_id = ?1 AND role_id = ?2;",
        )?;
        let mut rows = stmt.query(params![user_id, role_id])?;
        if let Some(row) = rows.next()? {
            return parse_user_role_row(row);
        }

        self.conn.execute(
            "INSERT INTO users_roles (user_id, role_id, status)
             VALUES (?1, ?2, ?3);",
            params![user_id, role_id, status.to_db()],
        )?;
        fetch_user_role(self.conn, self.conn.last_insert_rowid())
    }
}

fn fetch_user(conn: &Connection, id: RecordId) -> RepoResult<User> {
    let mut stmt = conn.prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_user_row(row);
    }
    Err(missing_after_write("users", id))
}

fn fetch_user_role(conn: &Connection, id: RecordId) -> RepoResult<UserRole> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, role_id, status, created_at
         FROM users_roles
         WHERE id = ?1;",
    )?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_user_role_row(row);
    }
    Err(missing_after_write("users_roles", id))
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        area_id: row.get("area_id")?,
        company_id: row.get("company_id")?,
        status: parse_status("users", row.get("status")?)?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_user_role_row(row: &Row<'_>) -> RepoResult<UserRole> {
    Ok(UserRole {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        role_id: row.get("role_id")?,
        status: parse_status("users_roles", row.get("status")?)?,
        created_at: row.get("created_at")?,
    })
}
