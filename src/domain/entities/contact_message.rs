use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::validation::{trim_owned, validate_not_blank, validate_person_name};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub project_type: String,
    pub message: String,
    pub read: bool,
    pub starred: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessageInsert {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub project_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Visitor submission. Missing fields default to empty and fail their own rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct NewContactMessageRequest {
    #[validate(
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"),
        custom(function = "validate_not_blank"),
        custom(function = "validate_person_name")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(
        length(min = 1, max = 200, message = "Subject must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub subject: String,

    #[validate(length(max = 100, message = "Project type must be at most 100 characters"))]
    pub project_type: String,

    #[validate(
        length(min = 10, max = 1000, message = "Message must be between 10 and 1000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub message: String,
}

impl NewContactMessageRequest {
    /// Length rules apply to what gets stored, so padding is removed first.
    pub fn trimmed(self) -> Self {
        NewContactMessageRequest {
            name: trim_owned(self.name),
            email: trim_owned(self.email),
            subject: trim_owned(self.subject),
            project_type: trim_owned(self.project_type),
            message: trim_owned(self.message),
        }
    }
}

impl TryFrom<NewContactMessageRequest> for ContactMessageInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewContactMessageRequest) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;

        Ok(ContactMessageInsert {
            name: value.name,
            email: value.email.to_lowercase(),
            subject: value.subject,
            project_type: value.project_type,
            message: value.message,
            created_at: Utc::now(),
        })
    }
}

/// Moderation flags; absent flags are left as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactStatusUpdate {
    pub read: Option<bool>,
    pub starred: Option<bool>,
}

impl ContactStatusUpdate {
    pub fn is_empty(&self) -> bool {
        self.read.is_none() && self.starred.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct ContactMessageListResponse {
    pub messages: Vec<ContactMessage>,
    pub total: i64,
    pub unread: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactCreatedResponse {
    pub id: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn field_names(err: ValidationErrors) -> Vec<String> {
        match AppError::from(err) {
            AppError::ValidationError(fields) => fields.into_iter().map(|f| f.field).collect(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_submission_reports_every_broken_field() {
        let request: NewContactMessageRequest =
            serde_json::from_str(r#"{"name": "Jo", "email": "x", "message": "short"}"#).unwrap();

        let err = ContactMessageInsert::try_from(request).unwrap_err();
        assert_eq!(field_names(err), vec!["email", "message", "subject"]);
    }

    #[test]
    fn name_with_digits_is_rejected() {
        let request = NewContactMessageRequest {
            name: "Agent 47".into(),
            email: "agent@example.com".into(),
            subject: "Hello".into(),
            project_type: "".into(),
            message: "I would like to talk about a project.".into(),
        };

        let err = ContactMessageInsert::try_from(request).unwrap_err();
        assert_eq!(field_names(err), vec!["name"]);
    }

    #[test]
    fn valid_submission_is_trimmed() {
        let request = NewContactMessageRequest {
            name: " Ada Lovelace ".into(),
            email: "Ada@Example.com".into(),
            subject: " Engines ".into(),
            project_type: "Consulting".into(),
            message: "Let us build an analytical engine.".into(),
        };

        let insert = ContactMessageInsert::try_from(request).unwrap();
        assert_eq!(insert.name, "Ada Lovelace");
        assert_eq!(insert.email, "ada@example.com");
        assert_eq!(insert.subject, "Engines");
    }

    fn submission(name: &str, message: &str) -> NewContactMessageRequest {
        NewContactMessageRequest {
            name: name.into(),
            email: "visitor@example.com".into(),
            subject: "Hello".into(),
            project_type: "".into(),
            message: message.into(),
        }
    }

    #[test]
    fn padding_does_not_count_towards_message_length() {
        let err = ContactMessageInsert::try_from(submission("Ada", "        ok")).unwrap_err();
        assert_eq!(field_names(err), vec!["message"]);

        let err = ContactMessageInsert::try_from(submission("Ada", &" ".repeat(12))).unwrap_err();
        assert_eq!(field_names(err), vec!["message"]);

        let insert =
            ContactMessageInsert::try_from(submission("Ada", "   ten chars!   ")).unwrap();
        assert_eq!(insert.message, "ten chars!");
    }

    #[test]
    fn blank_or_padded_short_names_are_rejected() {
        let err = ContactMessageInsert::try_from(submission("  ", "A perfectly fine message.")).unwrap_err();
        assert_eq!(field_names(err), vec!["name"]);

        let err = ContactMessageInsert::try_from(submission(" A ", "A perfectly fine message.")).unwrap_err();
        assert_eq!(field_names(err), vec!["name"]);
    }

    #[test]
    fn accented_names_are_accepted() {
        let insert =
            ContactMessageInsert::try_from(submission("José Álvarez", "A perfectly fine message.")).unwrap();
        assert_eq!(insert.name, "José Álvarez");
    }

    #[test]
    fn empty_status_update_is_detected() {
        assert!(ContactStatusUpdate::default().is_empty());
        assert!(!ContactStatusUpdate { read: Some(true), starred: None }.is_empty());
    }
}
