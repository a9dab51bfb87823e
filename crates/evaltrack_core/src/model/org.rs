//! Organizational records: companies, areas and their link rows.

use serde::{Deserialize, Serialize};

use crate::model::{RecordId, Status};

/// Company owning users and evaluation setups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Department-level grouping of users and skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Link row attaching one area to one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyArea {
    pub id: RecordId,
    pub company_id: RecordId,
    pub area_id: RecordId,
    pub status: Status,
    pub created_at: i64,
}
