//! Company use-case service.

use crate::model::org::{Company, CompanyArea};
use crate::model::{RecordId, Status};
use crate::repo::company_repo::CompanyRepository;
use crate::service::{run, ServiceResult};

/// Service facade over company persistence.
pub struct CompanyService<R: CompanyRepository> {
    repo: R,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a company with the given status flag.
    pub fn create_company(
        &self,
        name: &str,
        description: Option<&str>,
        status: Status,
    ) -> ServiceResult<Company> {
        run("create_company", || {
            self.repo.create_company(name, description, status)
        })
    }

    pub fn get_company_by_id(&self, company_id: RecordId) -> ServiceResult<Option<Company>> {
        run("get_company_by_id", || {
            self.repo.get_company_by_id(company_id)
        })
    }

    pub fn get_all_companies(&self) -> ServiceResult<Vec<Company>> {
        run("get_all_companies", || self.repo.get_all_companies())
    }

    pub fn update_company_status(
        &self,
        company_id: RecordId,
        status: Status,
    ) -> ServiceResult<Option<Company>> {
        run("update_company_status", || {
            self.repo.update_company_status(company_id, status)
        })
    }

    /// Ensures one company/area link; an existing link is returned unchanged.
    pub fn add_area(
        &self,
        company_id: RecordId,
        area_id: RecordId,
        status: Status,
    ) -> ServiceResult<CompanyArea> {
        run("add_area", || {
            self.repo.add_area(company_id, area_id, status)
        })
    }
}
