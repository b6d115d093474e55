use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    entities::legal_doc::{LegalDoc, LegalDocType},
    errors::AppError,
    repositories::sqlx_repo::{not_found, SqlxLegalRepo},
};

/// One fixed row per document type.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LegalRepository: Send + Sync {
    async fn get_legal_doc(&self, doc_type: LegalDocType) -> Result<LegalDoc, AppError>;

    async fn update_legal_doc(
        &self,
        doc_type: LegalDocType,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<LegalDoc, AppError>;
}

impl SqlxLegalRepo {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        SqlxLegalRepo { pool }
    }
}

#[async_trait]
impl LegalRepository for SqlxLegalRepo {
    async fn get_legal_doc(&self, doc_type: LegalDocType) -> Result<LegalDoc, AppError> {
        sqlx::query_as::<_, LegalDoc>("SELECT * FROM legal_docs WHERE doc_type = ?")
            .bind(doc_type)
            .fetch_one(&self.pool)
            .await
            .map_err(not_found("Legal document"))
    }

    async fn update_legal_doc(
        &self,
        doc_type: LegalDocType,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<LegalDoc, AppError> {
        sqlx::query_as::<_, LegalDoc>(
            r#"
            UPDATE legal_docs
            SET content = ?, updated_at = ?
            WHERE doc_type = ?
            RETURNING *
            "#,
        )
        .bind(content)
        .bind(updated_at)
        .bind(doc_type)
        .fetch_one(&self.pool)
        .await
        .map_err(not_found("Legal document"))
    }
}
