use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::validation::{
    normalize_technologies, normalize_url, trim_owned, validate_not_blank,
    validate_optional_url, validate_technologies,
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 200;
const MAX_DESCRIPTION_LENGTH: u64 = 5000;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub github_url: String,
    pub live_url: String,
    #[sqlx(json)]
    pub technologies: Vec<String>,
    pub featured: bool,
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
}

/// A validated, normalized project ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub github_url: String,
    pub live_url: String,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub display_order: i64,
    pub created_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct NewProjectRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description must be between 1 and 5000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub description: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub image_url: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub live_url: String,

    #[validate(
        length(min = 1, message = "At least one technology is required"),
        custom(function = "validate_technologies")
    )]
    pub technologies: Vec<String>,

    pub featured: bool,

    #[validate(range(min = 0, message = "Display order cannot be negative"))]
    pub display_order: i64,
}

impl NewProjectRequest {
    pub fn trimmed(self) -> Self {
        NewProjectRequest {
            title: trim_owned(self.title),
            description: trim_owned(self.description),
            image_url: trim_owned(self.image_url),
            github_url: trim_owned(self.github_url),
            live_url: trim_owned(self.live_url),
            technologies: normalize_technologies(self.technologies),
            ..self
        }
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub display_order: Option<i64>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewProjectRequest) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;

        Ok(ProjectInsert {
            title: value.title,
            description: value.description,
            image_url: normalize_url(&value.image_url),
            github_url: normalize_url(&value.github_url),
            live_url: normalize_url(&value.live_url),
            technologies: value.technologies,
            featured: value.featured,
            display_order: value.display_order,
            created_at: Utc::now(),
        })
    }
}

impl Project {
    /// Applies `changes` over this record, producing a full candidate to validate.
    pub fn merged_with(&self, changes: UpdateProjectRequest) -> NewProjectRequest {
        NewProjectRequest {
            title: changes.title.unwrap_or_else(|| self.title.clone()),
            description: changes.description.unwrap_or_else(|| self.description.clone()),
            image_url: changes.image_url.unwrap_or_else(|| self.image_url.clone()),
            github_url: changes.github_url.unwrap_or_else(|| self.github_url.clone()),
            live_url: changes.live_url.unwrap_or_else(|| self.live_url.clone()),
            technologies: changes.technologies.unwrap_or_else(|| self.technologies.clone()),
            featured: changes.featured.unwrap_or(self.featured),
            display_order: changes.display_order.unwrap_or(self.display_order),
        }
    }
}
