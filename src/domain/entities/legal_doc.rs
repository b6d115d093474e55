use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum LegalDocType {
    PrivacyPolicy,
    TermsOfService,
}

impl LegalDocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegalDocType::PrivacyPolicy => "privacy_policy",
            LegalDocType::TermsOfService => "terms_of_service",
        }
    }
}

impl fmt::Display for LegalDocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegalDocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "privacy_policy" => Ok(LegalDocType::PrivacyPolicy),
            "terms_of_service" => Ok(LegalDocType::TermsOfService),
            other => Err(format!("Unknown legal document type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LegalDoc {
    pub doc_type: LegalDocType,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateLegalDocRequest {
    #[validate(length(min = 1, max = 100000, message = "Content must be between 1 and 100000 characters"))]
    pub content: String,
}
