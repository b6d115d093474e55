use async_trait::async_trait;

use crate::{
    entities::about_info::{AboutInfo, AboutInfoUpdate, ABOUT_INFO_ID},
    errors::AppError,
    repositories::sqlx_repo::{not_found, SqlxAboutRepo},
};

/// The about record is a singleton: there is no id to pass and nothing to
/// create or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AboutRepository: Send + Sync {
    async fn get_about(&self) -> Result<AboutInfo, AppError>;
    async fn update_about(&self, about: &AboutInfoUpdate) -> Result<AboutInfo, AppError>;
}

impl SqlxAboutRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxAboutRepo { pool }
    }
}

#[async_trait]
impl AboutRepository for SqlxAboutRepo {
    async fn get_about(&self) -> Result<AboutInfo, AppError> {
        sqlx::query_as::<_, AboutInfo>("SELECT * FROM about_info WHERE id = ?")
            .bind(ABOUT_INFO_ID)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found("About info"))
    }

    async fn update_about(&self, about: &AboutInfoUpdate) -> Result<AboutInfo, AppError> {
        sqlx::query_as::<_, AboutInfo>(
            r#"
            UPDATE about_info
            SET headline = ?, bio = ?, email = ?, phone = ?, location = ?,
                github_url = ?, linkedin_url = ?, twitter_url = ?, instagram_url = ?, resume_url = ?,
                available_for_work = ?, available_for_freelance = ?,
                projects_completed = ?, happy_clients = ?, years_experience = ?, technologies_count = ?,
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&about.headline)
        .bind(&about.bio)
        .bind(&about.email)
        .bind(&about.phone)
        .bind(&about.location)
        .bind(&about.github_url)
        .bind(&about.linkedin_url)
        .bind(&about.twitter_url)
        .bind(&about.instagram_url)
        .bind(&about.resume_url)
        .bind(about.available_for_work)
        .bind(about.available_for_freelance)
        .bind(about.projects_completed)
        .bind(about.happy_clients)
        .bind(about.years_experience)
        .bind(about.technologies_count)
        .bind(about.updated_at)
        .bind(ABOUT_INFO_ID)
        .fetch_one(&self.pool)
        .await
        .map_err(not_found("About info"))
    }
}
