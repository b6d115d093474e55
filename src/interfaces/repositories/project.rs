use async_trait::async_trait;
use sqlx::types::Json;

use crate::{
    entities::project::{Project, ProjectInsert},
    errors::AppError,
    repositories::sqlx_repo::{expect_affected, not_found, SqlxProjectRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects in display order
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    async fn get_project(&self, id: i64) -> Result<Project, AppError>;

    /// Inserts the project and returns the stored row
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;

    /// Overwrites every editable column; `created_at` is kept
    async fn update_project(&self, id: i64, project: &ProjectInsert) -> Result<Project, AppError>;

    async fn delete_project(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY display_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found("Project"))
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
                (title, description, image_url, github_url, live_url, technologies, featured, display_order, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(Json(&project.technologies))
        .bind(project.featured)
        .bind(project.display_order)
        .bind(project.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_project(&self, id: i64, project: &ProjectInsert) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET title = ?, description = ?, image_url = ?, github_url = ?, live_url = ?,
                technologies = ?, featured = ?, display_order = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(Json(&project.technologies))
        .bind(project.featured)
        .bind(project.display_order)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(not_found("Project"))
    }

    async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        expect_affected(result.rows_affected(), "Project")
    }
}
