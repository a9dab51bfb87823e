//! Skill repository contract and SQLite implementation.

use rusqlite::{params, Connection, Row};

use crate::model::evaluation::{Skill, SkillKind};
use crate::model::{RecordId, Status};
use crate::repo::{missing_after_write, parse_status, RepoError, RepoResult};

const SKILL_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    type,
    status,
    created_at,
    updated_at
FROM skills";

/// Repository interface for the skill catalog.
pub trait SkillRepository {
    fn create_skill(
        &self,
        name: &str,
        description: Option<&str>,
        kind: SkillKind,
        status: Status,
    ) -> RepoResult<Skill>;
    fn get_skill_by_id(&self, skill_id: RecordId) -> RepoResult<Option<Skill>>;
    fn get_all_skills(&self) -> RepoResult<Vec<Skill>>;
    fn update_skill_status(&self, skill_id: RecordId, status: Status)
        -> RepoResult<Option<Skill>>;
}

/// SQLite-backed skill repository over a caller-owned connection.
pub struct SqliteSkillRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSkillRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SkillRepository for SqliteSkillRepository<'_> {
    fn create_skill(
        &self,
        name: &str,
        description: Option<&str>,
        kind: SkillKind,
        status: Status,
    ) -> RepoResult<Skill> {
        self.conn.execute(
            "INSERT INTO skills (name, description, type, status)
             VALUES (?1, ?2, ?3, ?4);",
            params![name, description, kind.to_db(), status.to_db()],
        )?;
        fetch_skill(self.conn, self.conn.last_insert_rowid())
    }

    fn get_skill_by_id(&self, skill_id: RecordId) -> RepoResult<Option<Skill>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SKILL_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([skill_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_skill_row(row)?));
        }
        Ok(None)
    }

    fn get_all_skills(&self) -> RepoResult<Vec<Skill>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SKILL_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut skills = Vec::new();
        while let Some(row) = rows.next()? {
            skills.push(parse_skill_row(row)?);
        }
        Ok(skills)
    }

    fn update_skill_status(
        &self,
        skill_id: RecordId,
        status: Status,
    ) -> RepoResult<Option<Skill>> {
        let changed = self.conn.execute(
            "UPDATE skills
             SET status = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![skill_id, status.to_db()],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(fetch_skill(self.conn, skill_id)?))
    }
}

fn fetch_skill(conn: &Connection, id: RecordId) -> RepoResult<Skill> {
    let mut stmt = conn.prepare(&format!("{SKILL_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_skill_row(row);
    }
    Err(missing_after_write("skills", id))
}

fn parse_skill_row(row: &Row<'_>) -> RepoResult<Skill> {
    let kind_value: i64 = row.get("type")?;
    let kind = SkillKind::parse(kind_value).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid type value `{kind_value}` in skills.type"))
    })?;

    Ok(Skill {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        kind,
        status: parse_status("skills", row.get("status")?)?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
