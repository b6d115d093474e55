use async_trait::async_trait;

use crate::{
    entities::skill::{Skill, SkillInsert},
    errors::AppError,
    repositories::sqlx_repo::{expect_affected, not_found, SqlxSkillRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn get_skill(&self, id: i64) -> Result<Skill, AppError>;
    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError>;
    async fn update_skill(&self, id: i64, skill: &SkillInsert) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills ORDER BY display_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn get_skill(&self, id: i64) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found("Skill"))
    }

    async fn create_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, proficiency, icon, display_order)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&skill.name)
        .bind(skill.category)
        .bind(skill.proficiency)
        .bind(&skill.icon)
        .bind(skill.display_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_skill(&self, id: i64, skill: &SkillInsert) -> Result<Skill, AppError> {
        sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
            SET name = ?, category = ?, proficiency = ?, icon = ?, display_order = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&skill.name)
        .bind(skill.category)
        .bind(skill.proficiency)
        .bind(&skill.icon)
        .bind(skill.display_order)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(not_found("Skill"))
    }

    async fn delete_skill(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        expect_affected(result.rows_affected(), "Skill")
    }
}
