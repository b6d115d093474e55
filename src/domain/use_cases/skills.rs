use std::sync::Arc;

use crate::{
    cache::content_cache::{CacheKey, ContentCache},
    entities::skill::{NewSkillRequest, Skill, SkillInsert, UpdateSkillRequest},
    errors::AppError,
    repositories::skill::SkillRepository,
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
    cache: ContentCache,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R, cache: ContentCache) -> Self {
        SkillHandler { skill_repo, cache }
    }

    pub async fn list_skills(&self) -> Result<Arc<Vec<Skill>>, AppError> {
        self.cache
            .get_or_load(CacheKey::Skills, || self.skill_repo.list_skills())
            .await
    }

    pub async fn get_skill(&self, id: i64) -> Result<Skill, AppError> {
        self.skill_repo.get_skill(id).await
    }

    pub async fn create_skill(&self, request: NewSkillRequest) -> Result<Skill, AppError> {
        let insert = SkillInsert::try_from(request)?;

        let skill = self.skill_repo.create_skill(&insert).await?;
        self.cache.invalidate(CacheKey::Skills);

        tracing::info!(skill_id = skill.id, "Skill created");
        Ok(skill)
    }

    pub async fn update_skill(&self, id: i64, changes: UpdateSkillRequest) -> Result<Skill, AppError> {
        let current = self.skill_repo.get_skill(id).await?;
        let insert = SkillInsert::try_from(current.merged_with(changes))?;

        let skill = self.skill_repo.update_skill(id, &insert).await?;
        self.cache.invalidate(CacheKey::Skills);

        tracing::info!(skill_id = id, "Skill updated");
        Ok(skill)
    }

    pub async fn delete_skill(&self, id: i64) -> Result<(), AppError> {
        self.skill_repo.delete_skill(id).await?;
        self.cache.invalidate(CacheKey::Skills);

        tracing::info!(skill_id = id, "Skill deleted");
        Ok(())
    }
}
