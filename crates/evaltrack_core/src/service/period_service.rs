//! Period use-case service.
//!
//! `auto_close` and `closed_by` pass through to storage untouched; nothing
//! here closes a period.

use crate::model::evaluation::{Period, PeriodCompany};
use crate::model::{RecordId, Status};
use crate::repo::period_repo::PeriodRepository;
use crate::service::{run, ServiceResult};

/// Service facade over evaluation-period persistence.
pub struct PeriodService<R: PeriodRepository> {
    repo: R,
}

impl<R: PeriodRepository> PeriodService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an evaluation period with the given status flag.
    pub fn create_period(
        &self,
        name: &str,
        start_date: i64,
        end_date: i64,
        closed_by: Option<RecordId>,
        auto_close: bool,
        status: Status,
    ) -> ServiceResult<Period> {
        run("create_period", || {
            self.repo
                .create_period(name, start_date, end_date, closed_by, auto_close, status)
        })
    }

    pub fn get_period_by_id(&self, period_id: RecordId) -> ServiceResult<Option<Period>> {
        run("get_period_by_id", || self.repo.get_period_by_id(period_id))
    }

    pub fn get_all_periods(&self) -> ServiceResult<Vec<Period>> {
        run("get_all_periods", || self.repo.get_all_periods())
    }

    pub fn update_period_status(
        &self,
        period_id: RecordId,
        status: Status,
    ) -> ServiceResult<Option<Period>> {
        run("update_period_status", || {
            self.repo.update_period_status(period_id, status)
        })
    }

    /// Ensures one period/company link; an existing link is returned unchanged.
    pub fn add_company(
        &self,
        period_id: RecordId,
        company_id: RecordId,
        status: Status,
    ) -> ServiceResult<PeriodCompany> {
        run("add_company", || {
            self.repo.add_company(period_id, company_id, status)
        })
    }
}
