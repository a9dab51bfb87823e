//! User use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for user records.
//! - Delegate persistence to the user repository.
//!
//! # Invariants
//! - Service APIs never bypass the repository contracts.
//! - Every method runs behind the uniform error boundary.

use crate::model::access::{User, UserRole};
use crate::model::{RecordId, Status};
use crate::repo::user_repo::UserRepository;
use crate::service::{run, ServiceResult};

/// Service facade over user persistence.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a user with default active status.
    ///
    /// A duplicate name or email surfaces as the `Database` error kind.
    pub fn create_user(
        &self,
        name: &str,
        email: &str,
        area_id: Option<RecordId>,
        company_id: Option<RecordId>,
    ) -> ServiceResult<User> {
        run("create_user", || {
            self.repo.create_user(name, email, area_id, company_id)
        })
    }

    /// Gets one user by id. Missing ids are `Ok(None)`.
    pub fn get_user_by_id(&self, user_id: RecordId) -> ServiceResult<Option<User>> {
        run("get_user_by_id", || self.repo.get_user_by_id(user_id))
    }

    /// Lists every user regardless of status.
    pub fn get_all_users(&self) -> ServiceResult<Vec<User>> {
        run("get_all_users", || self.repo.get_all_users())
    }

    /// Sets the status flag on one user. Missing ids are `Ok(None)`.
    pub fn update_user_status(
        &self,
        user_id: RecordId,
        status: Status,
    ) -> ServiceResult<Option<User>> {
        run("update_user_status", || {
            self.repo.update_user_status(user_id, status)
        })
    }

    /// Ensures one user/role link; an existing link is returned unchanged,
    /// keeping its original status even when a different one is passed.
    pub fn add_role(
        &self,
        user_id: RecordId,
        role_id: RecordId,
        status: Status,
    ) -> ServiceResult<UserRole> {
        run("add_role", || self.repo.add_role(user_id, role_id, status))
    }
}
