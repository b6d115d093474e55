use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::validation::{
    normalize_url, trim_owned, validate_not_blank, validate_optional_url,
};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: i64,
    pub avatar: String,
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialInsert {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: i64,
    pub avatar: String,
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct NewTestimonialRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 100, message = "Role must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub role: String,

    #[validate(length(max = 100, message = "Company must be at most 100 characters"))]
    pub company: String,

    #[validate(
        length(min = 10, max = 1000, message = "Content must be between 10 and 1000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub content: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,

    #[validate(custom(function = "validate_optional_url"))]
    pub avatar: String,

    #[validate(range(min = 0, message = "Display order cannot be negative"))]
    pub display_order: i64,
}

impl NewTestimonialRequest {
    pub fn trimmed(self) -> Self {
        NewTestimonialRequest {
            name: trim_owned(self.name),
            role: trim_owned(self.role),
            company: trim_owned(self.company),
            content: trim_owned(self.content),
            avatar: trim_owned(self.avatar),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i64>,
    pub avatar: Option<String>,
    pub display_order: Option<i64>,
}

impl TryFrom<NewTestimonialRequest> for TestimonialInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewTestimonialRequest) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;

        Ok(TestimonialInsert {
            name: value.name,
            role: value.role,
            company: value.company,
            content: value.content,
            rating: value.rating,
            avatar: normalize_url(&value.avatar),
            display_order: value.display_order,
            created_at: Utc::now(),
        })
    }
}

impl Testimonial {
    pub fn merged_with(&self, changes: UpdateTestimonialRequest) -> NewTestimonialRequest {
        NewTestimonialRequest {
            name: changes.name.unwrap_or_else(|| self.name.clone()),
            role: changes.role.unwrap_or_else(|| self.role.clone()),
            company: changes.company.unwrap_or_else(|| self.company.clone()),
            content: changes.content.unwrap_or_else(|| self.content.clone()),
            rating: changes.rating.unwrap_or(self.rating),
            avatar: changes.avatar.unwrap_or_else(|| self.avatar.clone()),
            display_order: changes.display_order.unwrap_or(self.display_order),
        }
    }
}
