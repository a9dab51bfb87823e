//! Access-control records: users, roles, permissions and their links.
//!
//! # Responsibility
//! - Define read models for the `users`, `roles` and `permissions` tables.
//! - Keep role/permission links as first-class records with their own
//!   lifecycle.
//!
//! # Invariants
//! - `name`/`email` uniqueness is enforced by storage, not by this layer.
//! - Link rows carry their own `status` and creation timestamp; the pair
//!   of foreign keys is deduplicated by an application-level check only.

use serde::{Deserialize, Serialize};

use crate::model::{RecordId, Status};

/// Employee account, optionally scoped to one area and one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub area_id: Option<RecordId>,
    pub company_id: Option<RecordId>,
    pub status: Status,
    /// Unix epoch milliseconds, set by storage at insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every mutation.
    pub updated_at: i64,
}

/// Named role grouping a set of permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Grantable capability referenced by roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Link row assigning one role to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub id: RecordId,
    pub user_id: RecordId,
    pub role_id: RecordId,
    pub status: Status,
    pub created_at: i64,
}

/// Link row granting one permission to one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermission {
    pub id: RecordId,
    pub role_id: RecordId,
    pub permission_id: RecordId,
    pub status: Status,
    pub created_at: i64,
}
