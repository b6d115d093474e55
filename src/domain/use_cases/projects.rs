use std::sync::Arc;

use crate::{
    cache::content_cache::{CacheKey, ContentCache},
    entities::project::{NewProjectRequest, Project, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
    cache: ContentCache,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R, cache: ContentCache) -> Self {
        ProjectHandler { project_repo, cache }
    }

    /// Public list, ordered by display order, served through the cache
    pub async fn list_projects(&self) -> Result<Arc<Vec<Project>>, AppError> {
        self.cache
            .get_or_load(CacheKey::Projects, || self.project_repo.list_projects())
            .await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        self.project_repo.get_project(id).await
    }

    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        let insert = ProjectInsert::try_from(request)?;

        let project = self.project_repo.create_project(&insert).await?;
        self.cache.invalidate(CacheKey::Projects);

        tracing::info!(project_id = project.id, "Project created");
        Ok(project)
    }

    /// Merges `changes` onto the stored project and validates the result as a whole
    pub async fn update_project(
        &self,
        id: i64,
        changes: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let current = self.project_repo.get_project(id).await?;
        let insert = ProjectInsert::try_from(current.merged_with(changes))?;

        let project = self.project_repo.update_project(id, &insert).await?;
        self.cache.invalidate(CacheKey::Projects);

        tracing::info!(project_id = id, "Project updated");
        Ok(project)
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        self.project_repo.delete_project(id).await?;
        self.cache.invalidate(CacheKey::Projects);

        tracing::info!(project_id = id, "Project deleted");
        Ok(())
    }
}
