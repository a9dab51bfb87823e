//! Role use-case service.

use crate::model::access::{Role, RolePermission};
use crate::model::{RecordId, Status};
use crate::repo::role_repo::RoleRepository;
use crate::service::{run, ServiceResult};

/// Service facade over role persistence.
pub struct RoleService<R: RoleRepository> {
    repo: R,
}

impl<R: RoleRepository> RoleService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a role with default active status.
    pub fn create_role(&self, name: &str, description: Option<&str>) -> ServiceResult<Role> {
        run("create_role", || self.repo.create_role(name, description))
    }

    pub fn get_role_by_id(&self, role_id: RecordId) -> ServiceResult<Option<Role>> {
        run("get_role_by_id", || self.repo.get_role_by_id(role_id))
    }

    pub fn get_all_roles(&self) -> ServiceResult<Vec<Role>> {
        run("get_all_roles", || self.repo.get_all_roles())
    }

    pub fn update_role_status(
        &self,
        role_id: RecordId,
        status: Status,
    ) -> ServiceResult<Option<Role>> {
        run("update_role_status", || {
            self.repo.update_role_status(role_id, status)
        })
    }

    /// Ensures one role/permission grant; an existing grant is returned
    /// unchanged, keeping its original status.
    pub fn add_permission(
        &self,
        role_id: RecordId,
        permission_id: RecordId,
        status: Status,
    ) -> ServiceResult<RolePermission> {
        run("add_permission", || {
            self.repo.add_permission(role_id, permission_id, status)
        })
    }
}
