//! Result repository contract and SQLite implementation.
//!
//! Scores are immutable once recorded; the only lifecycle is the shared
//! `status` flag, and no update operation is exposed for it here.

use rusqlite::{params, Connection, Row};

use crate::model::evaluation::SkillResult;
use crate::model::RecordId;
use crate::repo::{missing_after_write, parse_status, RepoResult};

const RESULT_SELECT_SQL: &str = "SELECT
    id,
    user_id,
    skill_id,
    score,
    status,
    created_at
FROM results";

/// Repository interface for scored evaluation results.
pub trait ResultRepository {
    /// Inserts one scored result with default active status.
    fn record_result(
        &self,
        user_id: RecordId,
        skill_id: RecordId,
        score: f64,
    ) -> RepoResult<SkillResult>;
    fn get_result_by_id(&self, result_id: RecordId) -> RepoResult<Option<SkillResult>>;
    fn get_all_results(&self) -> RepoResult<Vec<SkillResult>>;
    /// Lists every result recorded for one user, in insertion order.
    fn get_results_for_user(&self, user_id: RecordId) -> RepoResult<Vec<SkillResult>>;
}

/// SQLite-backed result repository over a caller-owned connection.
pub struct SqliteResultRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteResultRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ResultRepository for SqliteResultRepository<'_> {
    fn record_result(
        &self,
        user_id: RecordId,
        skill_id: RecordId,
        score: f64,
    ) -> RepoResult<SkillResult> {
        self.conn.execute(
            "INSERT INTO results (user_id, skill_id, score) VALUES (?1, ?2, ?3);",
            params![user_id, skill_id, score],
        )?;
        fetch_result(self.conn, self.conn.last_insert_rowid())
    }

    fn get_result_by_id(&self, result_id: RecordId) -> RepoResult<Option<SkillResult>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESULT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([result_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_result_row(row)?));
        }
        Ok(None)
    }

    fn get_all_results(&self) -> RepoResult<Vec<SkillResult>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESULT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            results.push(parse_result_row(row)?);
        }
        Ok(results)
    }

    fn get_results_for_user(&self, user_id: RecordId) -> RepoResult<Vec<SkillResult>> {
        let mut stmt = self.conn.prepare(&format!(
            "{RESULT_SELECT_SQL} WHERE user_id = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([user_id])?;
        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            results.push(parse_result_row(row)?);
        }
        Ok(results)
    }
}

fn fetch_result(conn: &Connection, id: RecordId) -> RepoResult<SkillResult> {
    let mut stmt = conn.prepare(&format!("{RESULT_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_result_row(row);
    }
    Err(missing_after_write("results", id))
}

fn parse_result_row(row: &Row<'_>) -> RepoResult<SkillResult> {
    Ok(SkillResult {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        skill_id: row.get("skill_id")?,
        score: row.get("score")?,
        status: parse_status("results", row.get("status")?)?,
        created_at: row.get("created_at")?,
    })
}
