//! Repository layer: entity-scoped persistence contracts and their SQLite
//! implementations.
//!
//! # Responsibility
//! - Keep every SQL statement behind an entity-scoped trait.
//! - Translate rows into domain records, rejecting invalid persisted state.
//!
//! # Invariants
//! - A missing row on by-id lookup or status update is `Ok(None)`, never an
//!   error.
//! - Association lookups ignore `status`, so an inactive link still counts
//!   as existing.

pub mod area_repo;
pub mod company_repo;
pub mod period_repo;
pub mod permission_repo;
pub mod result_repo;
pub mod role_repo;
pub mod skill_repo;
pub mod user_repo;

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;
use crate::model::Status;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer failure shared by every repository.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A persisted value does not parse into its domain type.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn parse_status(table: &str, value: i64) -> RepoResult<Status> {
    Status::parse(value).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status value `{value}` in {table}.status"))
    })
}

pub(crate) fn parse_flag(table: &str, column: &str, value: i64) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid flag value `{other}` in {table}.{column}"
        ))),
    }
}

pub(crate) fn missing_after_write(table: &str, id: i64) -> RepoError {
    RepoError::InvalidData(format!("{table} row {id} missing after write"))
}
