//! Best-effort per-field validation.
//!
//! Validation is cosmetic: each field's error state is independent and
//! never blocks collection or rendering. Rules mirror the form surface:
//! required-ness, email shape, URL shape.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    Email,
    Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    RequiredButEmpty,
    MalformedEmail,
    MalformedUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(kind: FieldErrorKind, message: &str) -> Self {
        FieldError {
            kind,
            message: message.to_string(),
        }
    }
}

/// Rules attached to the fixed form fields. Fields without rules always
/// validate clean.
pub fn rules_for(field: &str) -> &'static [FieldRule] {
    match field {
        "fullName" => &[FieldRule::Required],
        "email" => &[FieldRule::Required, FieldRule::Email],
        "website" => &[FieldRule::Url],
        _ => &[],
    }
}

/// Checks a value against a rule set. First failing rule wins; empty
/// values only fail the `Required` rule (shape checks skip empties).
pub fn validate_field(value: &str, rules: &[FieldRule]) -> Option<FieldError> {
    let trimmed = value.trim();
    for rule in rules {
        match rule {
            FieldRule::Required if trimmed.is_empty() => {
                return Some(FieldError::new(
                    FieldErrorKind::RequiredButEmpty,
                    "This field is required",
                ));
            }
            FieldRule::Email if !value.is_empty() && !is_valid_email(value) => {
                return Some(FieldError::new(
                    FieldErrorKind::MalformedEmail,
                    "Please enter a valid email address",
                ));
            }
            FieldRule::Url if !value.is_empty() && Url::parse(value).is_err() => {
                return Some(FieldError::new(
                    FieldErrorKind::MalformedUrl,
                    "Please enter a valid URL",
                ));
            }
            _ => {}
        }
    }
    None
}

/// Loose email shape: no whitespace, exactly one '@', and a dot somewhere
/// in a non-empty domain.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot with text on both sides.
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}
