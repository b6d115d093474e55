//! Field rules shared by every entity request type.
//!
//! Each helper has the signature `validator`'s `custom(function = ...)` expects,
//! so the same rule runs on create and on merged updates.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use validator::{ValidateEmail, ValidationError};

pub const MAX_URL_LENGTH: usize = 2048;
pub const MAX_TECHNOLOGIES: usize = 30;
pub const MAX_TECHNOLOGY_LENGTH: usize = 50;

static PERSON_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L} ]+$").expect("person name pattern is valid")
});

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

/// Strips surrounding whitespace, reusing the buffer when nothing changes.
pub fn trim_owned(value: String) -> String {
    if value.len() == value.trim().len() {
        value
    } else {
        value.trim().to_string()
    }
}

/// Rejects whitespace-only values. Empty values are left to the length rule.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.trim().is_empty() {
        return Err(new_validation_error("blank", "Value cannot be blank"));
    }
    Ok(())
}

/// Letters (any script) and plain spaces only. Empty values are left to the
/// length rule.
pub fn validate_person_name(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && !PERSON_NAME.is_match(value) {
        return Err(new_validation_error(
            "invalid_name",
            "Name may only contain letters and spaces",
        ));
    }
    Ok(())
}

/// Empty string, or an http(s) URL. A missing scheme is read as `https://`.
pub fn validate_optional_url(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(new_validation_error("url_too_long", "URL is too long"));
    }
    match parse_with_default_scheme(trimmed) {
        Some(_) => Ok(()),
        None => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.validate_email() {
        Ok(())
    } else {
        Err(new_validation_error("invalid_email", "Invalid email address"))
    }
}

pub fn validate_technologies(technologies: &[String]) -> Result<(), ValidationError> {
    if technologies.len() > MAX_TECHNOLOGIES {
        return Err(new_validation_error("too_many_technologies", "Too many technologies listed"));
    }
    for tech in technologies {
        let tech = tech.trim();
        if tech.is_empty() {
            return Err(new_validation_error("blank_technology", "Technology names cannot be blank"));
        }
        if tech.chars().count() > MAX_TECHNOLOGY_LENGTH {
            return Err(new_validation_error(
                "technology_too_long",
                "Technology names must be at most 50 characters",
            ));
        }
    }
    Ok(())
}

/// Trims and prefixes `https://` when the scheme is missing; empty stays empty.
pub fn normalize_url(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

pub fn normalize_technologies(technologies: Vec<String>) -> Vec<String> {
    technologies
        .into_iter()
        .map(|t| t.trim().to_string())
        .collect()
}

fn has_scheme(value: &str) -> bool {
    value.contains("://")
}

fn parse_with_default_scheme(value: &str) -> Option<Url> {
    let candidate: Cow<'_, str> = if has_scheme(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("https://{value}"))
    };

    let parsed = Url::parse(&candidate).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let host = parsed.host_str()?;
    if host.contains('.') || host == "localhost" {
        Some(parsed)
    } else {
        None
    }
}
