//! Area use-case service.

use crate::model::evaluation::AreaSkill;
use crate::model::org::Area;
use crate::model::{RecordId, Status};
use crate::repo::area_repo::AreaRepository;
use crate::service::{run, ServiceResult};

/// Service facade over area persistence.
pub struct AreaService<R: AreaRepository> {
    repo: R,
}

impl<R: AreaRepository> AreaService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an area with the given status flag.
    pub fn create_area(
        &self,
        name: &str,
        description: Option<&str>,
        status: Status,
    ) -> ServiceResult<Area> {
        run("create_area", || {
            self.repo.create_area(name, description, status)
        })
    }

    pub fn get_area_by_id(&self, area_id: RecordId) -> ServiceResult<Option<Area>> {
        run("get_area_by_id", || self.repo.get_area_by_id(area_id))
    }

    pub fn get_all_areas(&self) -> ServiceResult<Vec<Area>> {
        run("get_all_areas", || self.repo.get_all_areas())
    }

    pub fn update_area_status(
        &self,
        area_id: RecordId,
        status: Status,
    ) -> ServiceResult<Option<Area>> {
        run("update_area_status", || {
            self.repo.update_area_status(area_id, status)
        })
    }

    /// Ensures one area/skill link; an existing link is returned unchanged.
    pub fn add_skill(
        &self,
        area_id: RecordId,
        skill_id: RecordId,
        status: Status,
    ) -> ServiceResult<AreaSkill> {
        run("add_skill", || {
            self.repo.add_skill(area_id, skill_id, status)
        })
    }
}
