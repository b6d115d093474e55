use crate::{
    entities::contact_message::{
        ContactCreatedResponse, ContactMessage, ContactMessageInsert, ContactMessageListResponse,
        ContactStatusUpdate, NewContactMessageRequest,
    },
    errors::AppError,
    repositories::contact_message::ContactMessageRepository,
};

pub struct ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Validates and stores a visitor's message
    pub async fn submit_contact_message(
        &self,
        request: NewContactMessageRequest,
    ) -> Result<ContactCreatedResponse, AppError> {
        let new_msg = ContactMessageInsert::try_from(request)?;

        let id = self.contact_repo.create_contact_message(&new_msg).await?;

        tracing::info!(contact_id = id, "Contact message received");
        Ok(ContactCreatedResponse {
            id,
            message: "Your message has been received.".to_string(),
        })
    }

    pub async fn list_contact_messages(&self) -> Result<ContactMessageListResponse, AppError> {
        let messages = self.contact_repo.list_contact_messages().await?;
        let total = self.contact_repo.count_contact_messages().await?;
        let unread = self.contact_repo.count_unread_contact_messages().await?;

        Ok(ContactMessageListResponse {
            messages,
            total,
            unread,
        })
    }

    pub async fn get_contact_message(&self, id: i64) -> Result<ContactMessage, AppError> {
        self.contact_repo.get_contact_message(id).await
    }

    /// Toggles read/starred. An empty body changes nothing and returns the record.
    pub async fn update_contact_status(
        &self,
        id: i64,
        status: ContactStatusUpdate,
    ) -> Result<ContactMessage, AppError> {
        if status.is_empty() {
            return self.contact_repo.get_contact_message(id).await;
        }
        self.contact_repo.set_contact_status(id, &status).await
    }

    pub async fn delete_contact_message(&self, id: i64) -> Result<(), AppError> {
        self.contact_repo.delete_contact_message(id).await?;

        tracing::info!(contact_id = id, "Contact message deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::contact_message::MockContactMessageRepository;

    #[tokio::test]
    async fn rejected_submission_is_not_stored() {
        let mut repo = MockContactMessageRepository::new();
        repo.expect_create_contact_message().times(0);

        let handler = ContactHandler::new(repo);
        let result = handler
            .submit_contact_message(NewContactMessageRequest {
                name: "Jo".into(),
                email: "x".into(),
                message: "short".into(),
                ..Default::default()
            })
            .await;

        match result {
            Err(AppError::ValidationError(fields)) => {
                let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["email", "message", "subject"]);
            }
            other => panic!("expected validation error, got {:?}", other.map(|r| r.id)),
        }
    }

    #[tokio::test]
    async fn list_reports_totals() {
        let mut repo = MockContactMessageRepository::new();
        repo.expect_list_contact_messages().returning(|| Ok(vec![]));
        repo.expect_count_contact_messages().returning(|| Ok(4));
        repo.expect_count_unread_contact_messages().returning(|| Ok(1));

        let handler = ContactHandler::new(repo);
        let list = handler.list_contact_messages().await.unwrap();

        assert_eq!((list.total, list.unread), (4, 1));
    }

    #[tokio::test]
    async fn empty_status_update_skips_the_write() {
        let mut repo = MockContactMessageRepository::new();
        repo.expect_set_contact_status().times(0);
        repo.expect_get_contact_message()
            .returning(|_| Err(AppError::NotFound("Contact message not found".into())));

        let handler = ContactHandler::new(repo);
        let result = handler.update_contact_status(8, ContactStatusUpdate::default()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
