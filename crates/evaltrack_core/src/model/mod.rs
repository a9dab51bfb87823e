//! Relational domain model for the evaluation data core.
//!
//! # Responsibility
//! - Define the record structs mirroring the persisted tables.
//! - Provide discriminant helpers shared by repository row parsing.
//!
//! # Invariants
//! - Every record is identified by a storage-generated integer id.
//! - Retirement is represented by the `status` flag, not row deletion.

pub mod access;
pub mod evaluation;
pub mod org;

use serde::{Deserialize, Serialize};

/// Stable integer identifier generated by storage for every record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// Activity flag shared by every persisted record.
///
/// Flipping to `Inactive` is the only supported retirement mechanism;
/// rows are never hard-deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Inactive,
    Active,
}

impl Status {
    /// Integer discriminant persisted in the `status` column.
    pub fn to_db(self) -> i64 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }

    /// Parses the persisted discriminant. Unknown values are rejected.
    pub fn parse(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Inactive),
            1 => Some(Self::Active),
            _ => None,
        }
    }

    /// Returns whether a record with this flag is considered active.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
