//! Per-entity use-case services and the uniform error boundary.
//!
//! # Responsibility
//! - Expose the operation surface callers are allowed to touch.
//! - Translate every repository failure into the two service error kinds.
//!
//! # Invariants
//! - No public operation leaks a raw storage error to its caller.
//! - Absent records are `Ok(None)`, never an error.

pub mod area_service;
pub mod company_service;
pub mod period_service;
pub mod permission_service;
pub mod result_service;
pub mod role_service;
pub mod skill_service;
pub mod user_service;

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::repo::RepoError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure taxonomy exposed to service callers.
///
/// Storage-layer failures keep their original message under `Database`;
/// everything else is wrapped as `Operation` together with the name of the
/// operation that raised it.
#[derive(Debug)]
pub enum ServiceError {
    Database(String),
    Operation {
        operation: &'static str,
        message: String,
    },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database(message) => write!(f, "database error: {message}"),
            Self::Operation { operation, message } => {
                write!(f, "error in {operation}: {message}")
            }
        }
    }
}

impl Error for ServiceError {}

/// Runs one repository operation behind the uniform error boundary.
///
/// Every public service method routes through here so the translation into
/// `ServiceError` applies to the whole operation surface.
pub(crate) fn run<T>(
    operation: &'static str,
    f: impl FnOnce() -> Result<T, RepoError>,
) -> ServiceResult<T> {
    f().map_err(|err| match err {
        RepoError::Db(db) => ServiceError::Database(db.to_string()),
        other => ServiceError::Operation {
            operation,
            message: other.to_string(),
        },
    })
}
