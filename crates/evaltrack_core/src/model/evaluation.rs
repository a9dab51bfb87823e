//! Evaluation records: periods, skills, scored results and link rows.
//!
//! # Responsibility
//! - Define read models for the evaluation-cycle side of the schema.
//! - Provide the skill `type` discriminant shared with row parsing.
//!
//! # Invariants
//! - `Period.auto_close` and `Period.closed_by` are stored data only; no
//!   closing logic exists anywhere in this crate.
//! - `SkillResult.score` carries no range constraint.

use serde::{Deserialize, Serialize};

use crate::model::{RecordId, Status};

/// Category of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Soft,
    Technical,
}

impl SkillKind {
    /// Integer discriminant persisted in the `type` column.
    pub fn to_db(self) -> i64 {
        match self {
            Self::Soft => 0,
            Self::Technical => 1,
        }
    }

    /// Parses the persisted discriminant. Unknown values are rejected.
    pub fn parse(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Soft),
            1 => Some(Self::Technical),
            _ => None,
        }
    }
}

/// Evaluable skill, soft or technical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    /// Serialized as `type` to match the persisted column name.
    #[serde(rename = "type")]
    pub kind: SkillKind,
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Evaluation cycle bounded by a start and end date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub id: RecordId,
    pub name: String,
    /// Unix epoch milliseconds.
    pub start_date: i64,
    /// Unix epoch milliseconds.
    pub end_date: i64,
    /// User who closed the period, when closed.
    pub closed_by: Option<RecordId>,
    /// Declared in the schema; no operation acts on it.
    pub auto_close: bool,
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Link row attaching one skill to one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSkill {
    pub id: RecordId,
    pub area_id: RecordId,
    pub skill_id: RecordId,
    pub status: Status,
    pub created_at: i64,
}

/// Link row attaching one evaluation period to one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCompany {
    pub id: RecordId,
    pub period_id: RecordId,
    pub company_id: RecordId,
    pub status: Status,
    pub created_at: i64,
}

/// Scored evaluation of one user against one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResult {
    pub id: RecordId,
    pub user_id: RecordId,
    pub skill_id: RecordId,
    /// Decimal score; scale and range are conventions of the caller.
    pub score: f64,
    pub status: Status,
    pub created_at: i64,
}
