//! Permission repository contract and SQLite implementation.
//!
//! Permissions form a mostly-static catalog: they can be created and read,
//! but expose no status update.

use rusqlite::{params, Connection, Row};

use crate::model::access::Permission;
use crate::model::RecordId;
use crate::repo::{missing_after_write, parse_status, RepoResult};

const PERMISSION_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    status,
    created_at,
    updated_at
FROM permissions";

/// Repository interface for the permission catalog.
pub trait PermissionRepository {
    fn create_permission(&self, name: &str, description: Option<&str>) -> RepoResult<Permission>;
    fn get_permission_by_id(&self, permission_id: RecordId) -> RepoResult<Option<Permission>>;
    fn get_all_permissions(&self) -> RepoResult<Vec<Permission>>;
}

/// SQLite-backed permission repository over a caller-owned connection.
pub struct SqlitePermissionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePermissionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PermissionRepository for SqlitePermissionRepository<'_> {
    fn create_permission(&self, name: &str, description: Option<&str>) -> RepoResult<Permission> {
        self.conn.execute(
            "INSERT INTO permissions (name, description) VALUES (?1, ?2);",
            params![name, description],
        )?;
        fetch_permission(self.conn, self.conn.last_insert_rowid())
    }

    fn get_permission_by_id(&self, permission_id: RecordId) -> RepoResult<Option<Permission>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERMISSION_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([permission_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_permission_row(row)?));
        }
        Ok(None)
    }

    fn get_all_permissions(&self) -> RepoResult<Vec<Permission>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERMISSION_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut permissions = Vec::new();
        while let Some(row) = rows.next()? {
            permissions.push(parse_permission_row(row)?);
        }
        Ok(permissions)
    }
}

fn fetch_permission(conn: &Connection, id: RecordId) -> RepoResult<Permission> {
    let mut stmt = conn.prepare(&format!("{PERMISSION_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_permission_row(row);
    }
    Err(missing_after_write("permissions", id))
}

fn parse_permission_row(row: &Row<'_>) -> RepoResult<Permission> {
    Ok(Permission {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        status: parse_status("permissions", row.get("status")?)?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
