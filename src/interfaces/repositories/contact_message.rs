use async_trait::async_trait;

use crate::{
    entities::contact_message::{ContactMessage, ContactMessageInsert, ContactStatusUpdate},
    errors::AppError,
    repositories::sqlx_repo::{expect_affected, not_found, SqlxContactMessageRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_contact_message(&self, message: &ContactMessageInsert) -> Result<i64, AppError>;

    /// Newest first
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;

    async fn get_contact_message(&self, id: i64) -> Result<ContactMessage, AppError>;

    /// Applies only the flags that are set
    async fn set_contact_status(&self, id: i64, status: &ContactStatusUpdate) -> Result<ContactMessage, AppError>;

    async fn delete_contact_message(&self, id: i64) -> Result<(), AppError>;

    async fn count_contact_messages(&self) -> Result<i64, AppError>;

    async fn count_unread_contact_messages(&self) -> Result<i64, AppError>;
}

impl SqlxContactMessageRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(&self, message: &ContactMessageInsert) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO contact_messages (name, email, subject, project_type, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.project_type)
        .bind(&message.message)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn get_contact_message(&self, id: i64) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found("Contact message"))
    }

    async fn set_contact_status(&self, id: i64, status: &ContactStatusUpdate) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>(
            r#"
            UPDATE contact_messages
            SET read = COALESCE(?, read), starred = COALESCE(?, starred)
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(status.read)
        .bind(status.starred)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(not_found("Contact message"))
    }

    async fn delete_contact_message(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        expect_affected(result.rows_affected(), "Contact message")
    }

    async fn count_contact_messages(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn count_unread_contact_messages(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_messages WHERE read = 0")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
