use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    cache::content_cache::{CacheKey, ContentCache},
    entities::legal_doc::{LegalDoc, LegalDocType, UpdateLegalDocRequest},
    errors::AppError,
    repositories::legal::LegalRepository,
    utils::sanitize::sanitize_rich_text,
};

pub struct LegalHandler<R>
where
    R: LegalRepository,
{
    pub legal_repo: R,
    cache: ContentCache,
}

impl<R> LegalHandler<R>
where
    R: LegalRepository,
{
    pub fn new(legal_repo: R, cache: ContentCache) -> Self {
        LegalHandler { legal_repo, cache }
    }

    pub async fn get_legal_doc(&self, doc_type: LegalDocType) -> Result<Arc<LegalDoc>, AppError> {
        self.cache
            .get_or_load(CacheKey::Legal(doc_type), || self.legal_repo.get_legal_doc(doc_type))
            .await
    }

    /// Replaces the document body with a sanitized copy of the submitted HTML
    pub async fn update_legal_doc(
        &self,
        doc_type: LegalDocType,
        request: UpdateLegalDocRequest,
    ) -> Result<LegalDoc, AppError> {
        request.validate()?;

        let content = sanitize_rich_text(&request.content);
        if content.trim().is_empty() {
            return Err(AppError::field("content", "Content is empty after removing unsafe markup"));
        }

        let doc = self
            .legal_repo
            .update_legal_doc(doc_type, &content, Utc::now())
            .await?;
        self.cache.invalidate(CacheKey::Legal(doc_type));

        tracing::info!(doc_type = %doc_type, "Legal document updated");
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::repositories::legal::MockLegalRepository;

    #[tokio::test]
    async fn stores_sanitized_content() {
        let mut repo = MockLegalRepository::new();
        repo.expect_update_legal_doc()
            .withf(|doc_type, content, _| {
                *doc_type == LegalDocType::PrivacyPolicy && content == "<p>We respect you</p>"
            })
            .times(1)
            .returning(|doc_type, content, updated_at| {
                Ok(LegalDoc { doc_type, content: content.to_string(), updated_at })
            });

        let handler = LegalHandler::new(repo, ContentCache::new(Duration::from_secs(60)));
        let doc = handler
            .update_legal_doc(
                LegalDocType::PrivacyPolicy,
                UpdateLegalDocRequest {
                    content: "<p>We respect you</p><script>track()</script>".into(),
                },
            )
            .await
            .unwrap();

        assert!(!doc.content.contains("script"));
    }

    #[tokio::test]
    async fn script_only_content_is_rejected() {
        let mut repo = MockLegalRepository::new();
        repo.expect_update_legal_doc().times(0);

        let handler = LegalHandler::new(repo, ContentCache::new(Duration::from_secs(60)));
        let result = handler
            .update_legal_doc(
                LegalDocType::TermsOfService,
                UpdateLegalDocRequest { content: "<script>alert(1)</script>".into() },
            )
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
