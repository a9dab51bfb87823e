//! Core data layer for evaltrack.
//! This crate is the single source of truth for the evaluation schema and
//! its access operations.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::access::{Permission, Role, RolePermission, User, UserRole};
pub use model::evaluation::{AreaSkill, Period, PeriodCompany, Skill, SkillKind, SkillResult};
pub use model::org::{Area, Company, CompanyArea};
pub use model::{RecordId, Status};
pub use repo::area_repo::{AreaRepository, SqliteAreaRepository};
pub use repo::company_repo::{CompanyRepository, SqliteCompanyRepository};
pub use repo::period_repo::{PeriodRepository, SqlitePeriodRepository};
pub use repo::permission_repo::{PermissionRepository, SqlitePermissionRepository};
pub use repo::result_repo::{ResultRepository, SqliteResultRepository};
pub use repo::role_repo::{RoleRepository, SqliteRoleRepository};
pub use repo::skill_repo::{SkillRepository, SqliteSkillRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::area_service::AreaService;
pub use service::company_service::CompanyService;
pub use service::period_service::PeriodService;
pub use service::permission_service::PermissionService;
pub use service::result_service::ResultService;
pub use service::role_service::RoleService;
pub use service::skill_service::SkillService;
pub use service::user_service::UserService;
pub use service::{ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
