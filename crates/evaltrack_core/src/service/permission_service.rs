//! Permission use-case service.
//!
//! Permissions expose no status update; the catalog is written once and
//! read thereafter.

use crate::model::access::Permission;
use crate::model::RecordId;
use crate::repo::permission_repo::PermissionRepository;
use crate::service::{run, ServiceResult};

/// Service facade over the permission catalog.
pub struct PermissionService<R: PermissionRepository> {
    repo: R,
}

impl<R: PermissionRepository> PermissionService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_permission(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> ServiceResult<Permission> {
        run("create_permission", || {
            self.repo.create_permission(name, description)
        })
    }

    pub fn get_permission_by_id(
        &self,
        permission_id: RecordId,
    ) -> ServiceResult<Option<Permission>> {
        run("get_permission_by_id", || {
            self.repo.get_permission_by_id(permission_id)
        })
    }

    pub fn get_all_permissions(&self) -> ServiceResult<Vec<Permission>> {
        run("get_all_permissions", || self.repo.get_all_permissions())
    }
}
