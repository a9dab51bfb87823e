//! Skill use-case service.

use crate::model::evaluation::{Skill, SkillKind};
use crate::model::{RecordId, Status};
use crate::repo::skill_repo::SkillRepository;
use crate::service::{run, ServiceResult};

/// Service facade over the skill catalog.
pub struct SkillService<R: SkillRepository> {
    repo: R,
}

impl<R: SkillRepository> SkillService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a skill of the given kind with the given status flag.
    pub fn create_skill(
        &self,
        name: &str,
        description: Option<&str>,
        kind: SkillKind,
        status: Status,
    ) -> ServiceResult<Skill> {
        run("create_skill", || {
            self.repo.create_skill(name, description, kind, status)
        })
    }

    pub fn get_skill_by_id(&self, skill_id: RecordId) -> ServiceResult<Option<Skill>> {
        run("get_skill_by_id", || self.repo.get_skill_by_id(skill_id))
    }

    pub fn get_all_skills(&self) -> ServiceResult<Vec<Skill>> {
        run("get_all_skills", || self.repo.get_all_skills())
    }

    pub fn update_skill_status(
        &self,
        skill_id: RecordId,
        status: Status,
    ) -> ServiceResult<Option<Skill>> {
        run("update_skill_status", || {
            self.repo.update_skill_status(skill_id, status)
        })
    }
}
