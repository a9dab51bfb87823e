//! Company repository contract and SQLite implementation.

use rusqlite::{params, Connection, Row};

use crate::model::org::{Company, CompanyArea};
use crate::model::{RecordId, Status};
use crate::repo::{missing_after_write, parse_status, RepoResult};

const COMPANY_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    status,
    created_at,
    updated_at
FROM companies";

/// Repository interface for company records and their area links.
pub trait CompanyRepository {
    fn create_company(
        &self,
        name: &str,
        description: Option<&str>,
        status: Status,
    ) -> RepoResult<Company>;
    fn get_company_by_id(&self, company_id: RecordId) -> RepoResult<Option<Company>>;
    fn get_all_companies(&self) -> RepoResult<Vec<Company>>;
    fn update_company_status(
        &self,
        company_id: RecordId,
        status: Status,
    ) -> RepoResult<Option<Company>>;
    /// Ensures one company/area link exists, inserting it with `status`
    /// when absent. An existing link is returned unchanged.
    fn add_area(
        &self,
        company_id: RecordId,
        area_id: RecordId,
        status: Status,
    ) -> RepoResult<CompanyArea>;
}

/// SQLite-backed company repository over a caller-owned connection.
pub struct SqliteCompanyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCompanyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CompanyRepository for SqliteCompanyRepository<'_> {
    fn create_company(
        &self,
        name: &str,
        description: Option<&str>,
        status: Status,
    ) -> RepoResult<Company> {
        self.conn.execute(
            "INSERT INTO companies (name, description, status) VALUES (?1, ?2, ?3);",
            params![name, description, status.to_db()],
        )?;
        fetch_company(self.conn, self.conn.last_insert_rowid())
    }

    fn get_company_by_id(&self, company_id: RecordId) -> RepoResult<Option<Company>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COMPANY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([company_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_company_row(row)?));
        }
        Ok(None)
    }

    fn get_all_companies(&self) -> RepoResult<Vec<Company>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COMPANY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut companies = Vec::new();
        while let Some(row) = rows.next()? {
            companies.push(parse_company_row(row)?);
        }
        Ok(companies)
    }

    fn update_company_status(
        &self,
        company_id: RecordId,
        status: Status,
    ) -> RepoResult<Option<Company>> {
        let changed = self.conn.execute(
            "UPDATE companies
             SET status = ?2,
                 updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![company_id, status.to_db()],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(fetch_company(self.conn, company_id)?))
    }

    fn add_area(
        &self,
        company_id: RecordId,
        area_id: RecordId,
        status: Status,
    ) -> RepoResult<CompanyArea> {
        let mut stmt = self.conn.prepare(
            "SELECT id, company_id, area_id, status, created_at
             FROM companies_areas
             WHERE company_id = ?1 AND area_id = ?2;",
        )?;
        let mut rows = stmt.query(params![company_id, area_id])?;
        if let Some(row) = rows.next()? {
            return parse_company_area_row(row);
        }

        self.conn.execute(
            "INSERT INTO companies_areas (company_id, area_id, status)
             VALUES (?1, ?2, ?3);",
            params![company_id, area_id, status.to_db()],
        )?;
        fetch_company_area(self.conn, self.conn.last_insert_rowid())
    }
}

fn fetch_company(conn: &Connection, id: RecordId) -> RepoResult<Company> {
    let mut stmt = conn.prepare(&format!("{COMPANY_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_company_row(row);
    }
    Err(missing_after_write("companies", id))
}

fn fetch_company_area(conn: &Connection, id: RecordId) -> RepoResult<CompanyArea> {
    let mut stmt = conn.prepare(
        "SELECT id, company_id, area_id, status, created_at
         FROM companies_areas
         WHERE id = ?1;",
    )?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return parse_company_area_row(row);
    }
    Err(missing_after_write("companies_areas", id))
}

fn parse_company_row(row: &Row<'_>) -> RepoResult<Company> {
    Ok(Company {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        status: parse_status("companies", row.get("status")?)?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_company_area_row(row: &Row<'_>) -> RepoResult<CompanyArea> {
    Ok(CompanyArea {
        id: row.get("id")?,
        company_id: row.get("company_id")?,
        area_id: row.get("area_id")?,
        status: parse_status("companies_areas", row.get("status")?)?,
        created_at: row.get("created_at")?,
    })
}
