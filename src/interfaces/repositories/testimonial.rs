use async_trait::async_trait;

use crate::{
    entities::testimonial::{Testimonial, TestimonialInsert},
    errors::AppError,
    repositories::sqlx_repo::{expect_affected, not_found, SqlxTestimonialRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError>;
    async fn get_testimonial(&self, id: i64) -> Result<Testimonial, AppError>;
    async fn create_testimonial(&self, testimonial: &TestimonialInsert) -> Result<Testimonial, AppError>;
    async fn update_testimonial(&self, id: i64, testimonial: &TestimonialInsert) -> Result<Testimonial, AppError>;
    async fn delete_testimonial(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxTestimonialRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxTestimonialRepo { pool }
    }
}

#[async_trait]
impl TestimonialRepository for SqlxTestimonialRepo {
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            "SELECT * FROM testimonials ORDER BY display_order ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(testimonials)
    }

    async fn get_testimonial(&self, id: i64) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found("Testimonial"))
    }

    async fn create_testimonial(&self, testimonial: &TestimonialInsert) -> Result<Testimonial, AppError> {
        let created = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials
                (name, role, company, content, rating, avatar, display_order, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&testimonial.name)
        .bind(&testimonial.role)
        .bind(&testimonial.company)
        .bind(&testimonial.content)
        .bind(testimonial.rating)
        .bind(&testimonial.avatar)
        .bind(testimonial.display_order)
        .bind(testimonial.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_testimonial(&self, id: i64, testimonial: &TestimonialInsert) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>(
            r#"
            UPDATE testimonials
            SET name = ?, role = ?, company = ?, content = ?, rating = ?, avatar = ?, display_order = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&testimonial.name)
        .bind(&testimonial.role)
        .bind(&testimonial.company)
        .bind(&testimonial.content)
        .bind(testimonial.rating)
        .bind(&testimonial.avatar)
        .bind(testimonial.display_order)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(not_found("Testimonial"))
    }

    async fn delete_testimonial(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        expect_affected(result.rows_affected(), "Testimonial")
    }
}
