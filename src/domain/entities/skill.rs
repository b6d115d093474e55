use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::validation::{new_validation_error, trim_owned, validate_not_blank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum SkillCategory {
    Frontend,
    Backend,
    #[serde(rename = "3D-Graphics")]
    #[sqlx(rename = "3D-Graphics")]
    ThreeDGraphics,
    Tools,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::ThreeDGraphics,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::ThreeDGraphics => "3D-Graphics",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    /// Case-insensitive; "3D Graphics" is accepted for the graphics category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(' ', "-");
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("Unknown skill category: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: i64,
    pub icon: String,
    pub display_order: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillInsert {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: i64,
    pub icon: String,
    pub display_order: i64,
}

/// Category arrives as free text so an unknown value is a field error rather
/// than a body parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct NewSkillRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(custom(function = "validate_skill_category"))]
    pub category: String,

    #[validate(range(min = 1, max = 100, message = "Proficiency must be between 1 and 100"))]
    pub proficiency: i64,

    #[validate(length(max = 200, message = "Icon reference must be at most 200 characters"))]
    pub icon: String,

    #[validate(range(min = 0, message = "Display order cannot be negative"))]
    pub display_order: i64,
}

impl NewSkillRequest {
    pub fn trimmed(self) -> Self {
        NewSkillRequest {
            name: trim_owned(self.name),
            category: trim_owned(self.category),
            icon: trim_owned(self.icon),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateSkillRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub proficiency: Option<i64>,
    pub icon: Option<String>,
    pub display_order: Option<i64>,
}

pub fn validate_skill_category(value: &str) -> Result<(), ValidationError> {
    SkillCategory::from_str(value)
        .map(|_| ())
        .map_err(|_| new_validation_error(
            "invalid_category",
            "Category must be one of Frontend, Backend, 3D-Graphics, Tools, Other",
        ))
}

impl TryFrom<NewSkillRequest> for SkillInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewSkillRequest) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;

        let category = SkillCategory::from_str(&value.category).map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.add("category", new_validation_error("invalid_category", "Unknown category"));
            errors
        })?;

        Ok(SkillInsert {
            name: value.name,
            category,
            proficiency: value.proficiency,
            icon: value.icon,
            display_order: value.display_order,
        })
    }
}

impl Skill {
    pub fn merged_with(&self, changes: UpdateSkillRequest) -> NewSkillRequest {
        NewSkillRequest {
            name: changes.name.unwrap_or_else(|| self.name.clone()),
            category: changes.category.unwrap_or_else(|| self.category.to_string()),
            proficiency: changes.proficiency.unwrap_or(self.proficiency),
            icon: changes.icon.unwrap_or_else(|| self.icon.clone()),
            display_order: changes.display_order.unwrap_or(self.display_order),
        }
    }
}
