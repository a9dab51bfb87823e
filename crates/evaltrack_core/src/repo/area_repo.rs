//! Area repository contract and SQLite implementation.

use rusqlite::{params, Connection, Row};

use crate::model::evaluation::AreaSkill;
use crate::model::org::Area;
use crate::model::{RecordId, Status};
use crate::repo::{missing_after_write, parse_status, RepoResult};

const AREA_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    status,
    created_at,
    updated_at
FROM areas";

/// Repository interface for area records and their skill links.
pub trait AreaRepository {
    fn create_area(&self, name: &str, description: Option<&str>, status: Status)
        -> RepoResult<Area>;
    fn get_area_by_id(&self, area_id: RecordId) -> RepoResult<Option<Area>>;
    fn get_all_areas(&self) -> RepoResult<Vec<Area>>;
    fn update_area_status(&self, area_id: RecordId, status: Status) -> RepoResult<Option<Area>>;
    /// Ensures one area/skill link exists, inserting it with `status` when
    /// absent. An existing link is returned unchanged.
    fn add_skill(
        &self,
        area_id: RecordId,
        skill_id: RecordId,
        status: Status,
    ) -> RepoResult<AreaSkill>;
}

/// SQLite-backed area repository over a caller-owned connection.
pub struct SqliteAreaRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAreaRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AreaRepository for SqliteAreaRepository<'_> {
    fn create_area(
        &self,
        name: &str,
        description: Option<&str>,
        status: Status,
    ) -> RepoResult<Area> {
        self.conn.execute(
            "INSERT INTO areas (name, description, status) VALUES (?1, ?2, ?3);",
            params![name, description, status.to_db()],
        )?;
        fetch_area(self.conn, self.conn.last_insert_rowid())
    }

    fn get_area_by_id(&self, area_id: RecordId) -> RepoResult<Option<Area>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AREA_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([area_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_area_row(row)?));
        }
        Ok(None)
    }

    fn get_all_areas(&self) -> RepoResult<Vec<Area>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AREA_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut areas = Vec::new();
        while let Some(row) = rows.next()? {
            areas.push(parse_area_row(row)?);
        }
        Ok(areas)
    }

    fn update_area_status(&self, area_id: RecordId, status: Status) -> RepoResult<Option<Area>> {
        let changed = self.conn.execute(
            "UPDATE areas
             SET status = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![area_id, status.to_db()],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(fetch_area(self.conn, area_id)?))
    }

    fn add_skill(
        &self,
        area_id: RecordId,
        skill_id: RecordId,
        status: Status,
    ) -> RepoResult<AreaSkill> {
        let mut stmt = self.conn.prepare(
            "SELECT id, area_id, skill_id, status, created_at
             FROM areas_skills
             WHERE area_id = ?1 AND skill_id = ?2;",
        )?;
        let mut rows = stmt.query(params![area_id, skill_id])?;
        if let Some(row) = rows.next()? {
            return parse_area_skill_row(row);
        }

        self.conn.execute(
            "INSERT INTO areas_skills (area_id, skill_id, status)
             VALUES (?1, ?2, ?3);",
            params![area_id, skill_id, status.to_db()],
        )?;
        fetch_area_skill(self.conn, self.conn.last_insert_rowid())
    }
}

fn fetch_area(conn: &Connection, id: RecordId) -> RepoResult<Area> {
    let mut stmt = conn.prepare(&format!("{AREA_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_area_row(row);
    }
    Err(missing_after_write("areas", id))
}

fn fetch_area_skill(conn: &Connection, id: RecordId) -> RepoResult<AreaSkill> {
    let mut stmt = conn.prepare(
        "SELECT id, area_id, skill_id, status, created_at
         FROM areas_skills
         WHERE id = ?1;",
    )?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_area_skill_row(row);
    }
    Err(missing_after_write("areas_skills", id))
}

fn parse_area_row(row: &Row<'_>) -> RepoResult<Area> {
    Ok(Area {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        status: parse_status("areas", row.get("status")?)?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_area_skill_row(row: &Row<'_>) -> RepoResult<AreaSkill> {
    Ok(AreaSkill {
        id: row.get("id")?,
        area_id: row.get("area_id")?,
        skill_id: row.get("skill_id")?,
        status: parse_status("areas_skills", row.get("status")?)?,
        created_at: row.get("created_at")?,
    })
}
