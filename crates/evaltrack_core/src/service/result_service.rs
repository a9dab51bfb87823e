//! Result use-case service.
//!
//! Scores are recorded once and never updated; no status mutation is
//! exposed for results.

use crate::model::evaluation::SkillResult;
use crate::model::RecordId;
use crate::repo::result_repo::ResultRepository;
use crate::service::{run, ServiceResult};

/// Service facade over scored evaluation results.
pub struct ResultService<R: ResultRepository> {
    repo: R,
}

impl<R: ResultRepository> ResultService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records one score for a user/skill pair. The score range is not
    /// validated here.
    pub fn record_result(
        &self,
        user_id: RecordId,
        skill_id: RecordId,
        score: f64,
    ) -> ServiceResult<SkillResult> {
        run("record_result", || {
            self.repo.record_result(user_id, skill_id, score)
        })
    }

    pub fn get_result_by_id(&self, result_id: RecordId) -> ServiceResult<Option<SkillResult>> {
        run("get_result_by_id", || self.repo.get_result_by_id(result_id))
    }

    pub fn get_all_results(&self) -> ServiceResult<Vec<SkillResult>> {
        run("get_all_results", || self.repo.get_all_results())
    }

    pub fn get_results_for_user(&self, user_id: RecordId) -> ServiceResult<Vec<SkillResult>> {
        run("get_results_for_user", || {
            self.repo.get_results_for_user(user_id)
        })
    }
}
