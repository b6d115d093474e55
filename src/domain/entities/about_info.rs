use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::validation::{
    normalize_url, trim_owned, validate_optional_email, validate_optional_url,
};

/// Fixed key of the single about row.
pub const ABOUT_INFO_ID: i64 = 1;

const MAX_METRIC: i64 = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AboutInfo {
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub resume_url: String,
    pub available_for_work: bool,
    pub available_for_freelance: bool,
    pub projects_completed: i64,
    pub happy_clients: i64,
    pub years_experience: i64,
    pub technologies_count: i64,
    pub updated_at: DateTime<Utc>,
}

/// Full candidate for the about row, validated as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutInfoInput {
    #[validate(length(max = 200, message = "Headline must be at most 200 characters"))]
    pub headline: String,

    #[validate(length(max = 5000, message = "Bio must be at most 5000 characters"))]
    pub bio: String,

    #[validate(custom(function = "validate_optional_email"))]
    pub email: String,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: String,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_url: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub linkedin_url: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub twitter_url: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub instagram_url: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub resume_url: String,

    pub available_for_work: bool,
    pub available_for_freelance: bool,

    #[validate(range(min = 0, max = MAX_METRIC, message = "Must be between 0 and 100000"))]
    pub projects_completed: i64,

    #[validate(range(min = 0, max = MAX_METRIC, message = "Must be between 0 and 100000"))]
    pub happy_clients: i64,

    #[validate(range(min = 0, max = MAX_METRIC, message = "Must be between 0 and 100000"))]
    pub years_experience: i64,

    #[validate(range(min = 0, max = MAX_METRIC, message = "Must be between 0 and 100000"))]
    pub technologies_count: i64,
}

impl AboutInfoInput {
    pub fn trimmed(self) -> Self {
        AboutInfoInput {
            headline: trim_owned(self.headline),
            bio: trim_owned(self.bio),
            email: trim_owned(self.email),
            phone: trim_owned(self.phone),
            location: trim_owned(self.location),
            github_url: trim_owned(self.github_url),
            linkedin_url: trim_owned(self.linkedin_url),
            twitter_url: trim_owned(self.twitter_url),
            instagram_url: trim_owned(self.instagram_url),
            resume_url: trim_owned(self.resume_url),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateAboutInfoRequest {
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub resume_url: Option<String>,
    pub available_for_work: Option<bool>,
    pub available_for_freelance: Option<bool>,
    pub projects_completed: Option<i64>,
    pub happy_clients: Option<i64>,
    pub years_experience: Option<i64>,
    pub technologies_count: Option<i64>,
}

/// Normalized about row ready to overwrite the stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct AboutInfoUpdate {
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub resume_url: String,
    pub available_for_work: bool,
    pub available_for_freelance: bool,
    pub projects_completed: i64,
    pub happy_clients: i64,
    pub years_experience: i64,
    pub technologies_count: i64,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<AboutInfoInput> for AboutInfoUpdate {
    type Error = ValidationErrors;

    fn try_from(value: AboutInfoInput) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;

        Ok(AboutInfoUpdate {
            headline: value.headline,
            bio: value.bio,
            email: value.email.to_lowercase(),
            phone: value.phone,
            location: value.location,
            github_url: normalize_url(&value.github_url),
            linkedin_url: normalize_url(&value.linkedin_url),
            twitter_url: normalize_url(&value.twitter_url),
            instagram_url: normalize_url(&value.instagram_url),
            resume_url: normalize_url(&value.resume_url),
            available_for_work: value.available_for_work,
            available_for_freelance: value.available_for_freelance,
            projects_completed: value.projects_completed,
            happy_clients: value.happy_clients,
            years_experience: value.years_experience,
            technologies_count: value.technologies_count,
            updated_at: Utc::now(),
        })
    }
}

impl AboutInfo {
    pub fn merged_with(&self, changes: UpdateAboutInfoRequest) -> AboutInfoInput {
        AboutInfoInput {
            headline: changes.headline.unwrap_or_else(|| self.headline.clone()),
            bio: changes.bio.unwrap_or_else(|| self.bio.clone()),
            email: changes.email.unwrap_or_else(|| self.email.clone()),
            phone: changes.phone.unwrap_or_else(|| self.phone.clone()),
            location: changes.location.unwrap_or_else(|| self.location.clone()),
            github_url: changes.github_url.unwrap_or_else(|| self.github_url.clone()),
            linkedin_url: changes.linkedin_url.unwrap_or_else(|| self.linkedin_url.clone()),
            twitter_url: changes.twitter_url.unwrap_or_else(|| self.twitter_url.clone()),
            instagram_url: changes.instagram_url.unwrap_or_else(|| self.instagram_url.clone()),
            resume_url: changes.resume_url.unwrap_or_else(|| self.resume_url.clone()),
            available_for_work: changes.available_for_work.unwrap_or(self.available_for_work),
            available_for_freelance: changes
                .available_for_freelance
                .unwrap_or(self.available_for_freelance),
            projects_completed: changes.projects_completed.unwrap_or(self.projects_completed),
            happy_clients: changes.happy_clients.unwrap_or(self.happy_clients),
            years_experience: changes.years_experience.unwrap_or(self.years_experience),
            technologies_count: changes.technologies_count.unwrap_or(self.technologies_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn stored() -> AboutInfo {
        AboutInfo {
            headline: "Engineer".into(),
            bio: "Builds things".into(),
            email: "".into(),
            phone: "".into(),
            location: "Lagos".into(),
            github_url: "https://github.com/me".into(),
            linkedin_url: "".into(),
            twitter_url: "".into(),
            instagram_url: "".into(),
            resume_url: "".into(),
            available_for_work: true,
            available_for_freelance: false,
            projects_completed: 12,
            happy_clients: 8,
            years_experience: 5,
            technologies_count: 20,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn partial_update_keeps_other_fields() {
        let merged = stored().merged_with(UpdateAboutInfoRequest {
            headline: Some("Staff Engineer".into()),
            twitter_url: Some("x.com/me".into()),
            ..Default::default()
        });

        let update = AboutInfoUpdate::try_from(merged).unwrap();
        assert_eq!(update.headline, "Staff Engineer");
        assert_eq!(update.location, "Lagos");
        assert_eq!(update.twitter_url, "https://x.com/me");
        assert_eq!(update.projects_completed, 12);
    }

    #[test]
    fn padded_headline_is_measured_after_trimming() {
        let merged = stored().merged_with(UpdateAboutInfoRequest {
            headline: Some(format!("   {}   ", "h".repeat(200))),
            ..Default::default()
        });
        let update = AboutInfoUpdate::try_from(merged).unwrap();
        assert_eq!(update.headline.len(), 200);
    }

    #[test]
    fn rejects_bad_email_and_negative_metric() {
        let merged = stored().merged_with(UpdateAboutInfoRequest {
            email: Some("not-an-email".into()),
            happy_clients: Some(-1),
            ..Default::default()
        });

        let err = AboutInfoUpdate::try_from(merged).unwrap_err();
        match AppError::from(err) {
            AppError::ValidationError(fields) => {
                let names: Vec<_> = fields.into_iter().map(|f| f.field).collect();
                assert_eq!(names, vec!["email", "happyClients"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
