//! Period repository contract and SQLite implementation.
//!
//! # Invariants
//! - `auto_close` and `closed_by` are persisted and read back verbatim; no
//!   operation in this crate closes a period.

use rusqlite::{params, Connection, Row};

use crate::model::evaluation::{Period, PeriodCompany};
use crate::model::{RecordId, Status};
use crate::repo::{missing_after_write, parse_flag, parse_status, RepoResult};

const PERIOD_SELECT_SQL: &str = "SELECT
    id,
    name,
    start_date,
    end_date,
    closed_by,
    auto_close,
    status,
    created_at,
    updated_at
FROM periods";

/// Repository interface for evaluation periods and their company links.
pub trait PeriodRepository {
    fn create_period(
        &self,
        name: &str,
        start_date: i64,
        end_date: i64,
        closed_by: Option<RecordId>,
        auto_close: bool,
        status: Status,
    ) -> RepoResult<Period>;
    fn get_period_by_id(&self, period_id: RecordId) -> RepoResult<Option<Period>>;
    fn get_all_periods(&self) -> RepoResult<Vec<Period>>;
    fn update_period_status(
        &self,
        period_id: RecordId,
        status: Status,
    ) -> RepoResult<Option<Period>>;
    /// Ensures one period/company link exists, inserting it with `status`
    /// when absent. An existing link is returned unchanged.
    fn add_company(
        &self,
        period_id: RecordId,
        company_id: RecordId,
        status: Status,
    ) -> RepoResult<PeriodCompany>;
}

/// SQLite-backed period repository over a caller-owned connection.
pub struct SqlitePeriodRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePeriodRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PeriodRepository for SqlitePeriodRepository<'_> {
    fn create_period(
        &self,
        name: &str,
        start_date: i64,
        end_date: i64,
        closed_by: Option<RecordId>,
        auto_close: bool,
        status: Status,
    ) -> RepoResult<Period> {
        self.conn.execute(
            "INSERT INTO periods (name, start_date, end_date, closed_by, auto_close, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                name,
                start_date,
                end_date,
                closed_by,
                i64::from(auto_close),
                status.to_db(),
            ],
        )?;
        fetch_period(self.conn, self.conn.last_insert_rowid())
    }

    fn get_period_by_id(&self, period_id: RecordId) -> RepoResult<Option<Period>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERIOD_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([period_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_period_row(row)?));
        }
        Ok(None)
    }

    fn get_all_periods(&self) -> RepoResult<Vec<Period>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERIOD_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut periods = Vec::new();
        while let Some(row) = rows.next()? {
            periods.push(parse_period_row(row)?);
        }
        Ok(periods)
    }

    fn update_period_status(
        &self,
        period_id: RecordId,
        status: Status,
    ) -> RepoResult<Option<Period>> {
        let changed = self.conn.execute(
            "UPDATE periods
             SET status = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![period_id, status.to_db()],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(fetch_period(self.conn, period_id)?))
    }

    fn add_company(
        &self,
        period_id: RecordId,
        company_id: RecordId,
        status: Status,
    ) -> RepoResult<PeriodCompany> {
        let mut stmt = self.conn.prepare(
            "SELECT id, period_id, company_id, status, created_at
             FROM periods_companies
             WHERE period_id = ?1 AND company_id = ?2;",
        )?;
        let mut rows = stmt.query(params![period_id, company_id])?;
        if let Some(row) = rows.next()? {
            return parse_period_company_row(row);
        }

        self.conn.execute(
            "INSERT INTO periods_companies (period_id, company_id, status)
             VALUES (?1, ?2, ?3);",
            params![period_id, company_id, status.to_db()],
        )?;
        fetch_period_company(self.conn, self.conn.last_insert_rowid())
    }
}

fn fetch_period(conn: &Connection, id: RecordId) -> RepoResult<Period> {
    let mut stmt = conn.prepare(&format!("{PERIOD_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_period_row(row);
    }
    Err(missing_after_write("periods", id))
}

fn fetch_period_company(conn: &Connection, id: RecordId) -> RepoResult<PeriodCompany> {
    let mut stmt = conn.prepare(
        "SELECT id, period_id, company_id, status, created_at
         FROM periods_companies
         WHERE id = ?1;",
    )?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_period_company_row(row);
    }
    Err(missing_after_write("periods_companies", id))
}

fn parse_period_row(row: &Row<'_>) -> RepoResult<Period> {
    Ok(Period {
        id: row.get("id")?,
        name: row.get("name")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        closed_by: row.get("closed_by")?,
        auto_close: parse_flag("periods", "auto_close", row.get("auto_close")?)?,
        status: parse_status("periods", row.get("status")?)?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_period_company_row(row: &Row<'_>) -> RepoResult<PeriodCompany> {
    Ok(PeriodCompany {
        id: row.get("id")?,
        period_id: row.get("period_id")?,
        company_id: row.get("company_id")?,
        status: parse_status("periods_companies", row.get("status")?)?,
        created_at: row.get("created_at")?,
    })
}
