//! Role repository contract and SQLite implementation.
//!
//! # Invariants
//! - `add_permission` returns an existing grant unchanged, whatever its
//!   status.

use rusqlite::{params, Connection, Row};

use crate::model::access::{Role, RolePermission};
use crate::model::{RecordId, Status};
use crate::repo::{missing_after_write, parse_status, RepoResult};

const ROLE_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    status,
    created_at,
    updated_at
FROM roles";

/// Repository interface for role records and their permission grants.
pub trait RoleRepository {
    fn create_role(&self, name: &str, description: Option<&str>) -> RepoResult<Role>;
    fn get_role_by_id(&self, role_id: RecordId) -> RepoResult<Option<Role>>;
    fn get_all_roles(&self) -> RepoResult<Vec<Role>>;
    fn update_role_status(&self, role_id: RecordId, status: Status) -> RepoResult<Option<Role>>;
    /// Ensures one role/permission grant exists, inserting it with `status`
    /// when absent. An existing grant is returned unchanged.
    fn add_permission(
        &self,
        role_id: RecordId,
        permission_id: RecordId,
        status: Status,
    ) -> RepoResult<RolePermission>;
}

/// SQLite-backed role repository over a caller-owned connection.
pub struct SqliteRoleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRoleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RoleRepository for SqliteRoleRepository<'_> {
    fn create_role(&self, name: &str, description: Option<&str>) -> RepoResult<Role> {
        self.conn.execute(
            "INSERT INTO roles (name, description) VALUES (?1, ?2);",
            params![name, description],
        )?;
        fetch_role(self.conn, self.conn.last_insert_rowid())
    }

    fn get_role_by_id(&self, role_id: RecordId) -> RepoResult<Option<Role>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROLE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([role_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_role_row(row)?));
        }
        Ok(None)
    }

    fn get_all_roles(&self) -> RepoResult<Vec<Role>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROLE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut roles = Vec::new();
        while let Some(row) = rows.next()? {
            roles.push(parse_role_row(row)?);
        }
        Ok(roles)
    }

    fn update_role_status(&self, role_id: RecordId, status: Status) -> RepoResult<Option<Role>> {
        let changed = self.conn.execute(
            "UPDATE roles
             SET status = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![role_id, status.to_db()],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(fetch_role(self.conn, role_id)?))
    }

    fn add_permission(
        &self,
        role_id: RecordId,
        permission_id: RecordId,
        status: Status,
    ) -> RepoResult<RolePermission> {
        let mut stmt = self.conn.prepare(
            "SELECT id, role_id, permission_id, status, created_at
             FROM roles_permissions
             WHERE role_id = ?1 AND permission_id = ?2;",
        )?;
        let mut rows = stmt.query(params![role_id, permission_id])?;
        if let Some(row) = rows.next()? {
            return parse_role_permission_row(row);
        }

        self.conn.execute(
            "INSERT INTO roles_permissions (role_id, permission_id, status)
             VALUES (?1, ?2, ?3);",
            params![role_id, permission_id, status.to_db()],
        )?;
        fetch_role_permission(self.conn, self.conn.last_insert_rowid())
    }
}

fn fetch_role(conn: &Connection, id: RecordId) -> RepoResult<Role> {
    let mut stmt = conn.prepare(&format!("{ROLE_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_role_row(row);
    }
    Err(missing_after_write("roles", id))
}

fn fetch_role_permission(conn: &Connection, id: RecordId) -> RepoResult<RolePermission> {
    let mut stmt = conn.prepare(
        "SELECT id, role_id, permission_id, status, created_at
         FROM roles_permissions
         WHERE id = ?1;",
    )?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_role_permission_row(row);
    }
    Err(missing_after_write("roles_permissions", id))
}

fn parse_role_row(row: &Row<'_>) -> RepoResult<Role> {
    Ok(Role {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        status: parse_status("roles", row.get("status")?)?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_role_permission_row(row: &Row<'_>) -> RepoResult<RolePermission> {
    Ok(RolePermission {
        id: row.get("id")?,
        role_id: row.get("role_id")?,
        permission_id: row.get("permission_id")?,
        status: parse_status("roles_permissions", row.get("status")?)?,
        created_at: row.get("created_at")?,
    })
}
