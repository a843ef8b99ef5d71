// SPDX-License-Identifier: MPL-2.0
//! Field validation shared by the page forms.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        };
        f.write_str(name)
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    InvalidEmail,
    TooShort { min: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    #[must_use]
    pub fn new(field: FormField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self.kind {
            FieldErrorKind::Required => "form-error-required",
            FieldErrorKind::InvalidEmail => "form-error-email",
            FieldErrorKind::TooShort { .. } => "form-error-too-short",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::InvalidEmail => write!(f, "{} is not a valid address", self.field),
            FieldErrorKind::TooShort { min } => {
                write!(f, "{} needs at least {} characters", self.field, min)
            }
        }
    }
}

/// Returns `true` if `value` looks like an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

pub(crate) fn require(field: FormField, value: &str, errors: &mut Vec<FieldError>) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, FieldErrorKind::Required));
        false
    } else {
        true
    }
}

pub(crate) fn require_email(field: FormField, value: &str, errors: &mut Vec<FieldError>) {
    if require(field, value, errors) && !is_valid_email(value) {
        errors.push(FieldError::new(field, FieldErrorKind::InvalidEmail));
    }
}

pub(crate) fn require_min_chars(
    field: FormField,
    value: &str,
    min: usize,
    errors: &mut Vec<FieldError>,
) {
    if require(field, value, errors) && value.trim().chars().count() < min {
        errors.push(FieldError::new(field, FieldErrorKind::TooShort { min }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("contact@example.com"));
        assert!(is_valid_email("  jean.dupont@formation.fr "));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for value in ["", "plainaddress", "a@b", "@example.com", "a b@example.com", "a@@b.com"] {
            assert!(!is_valid_email(value), "{value} should be rejected");
        }
    }

    #[test]
    fn too_short_counts_characters_not_bytes() {
        let mut errors = Vec::new();
        require_min_chars(FormField::Message, "éééééééééé", 10, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_email_reports_required_only() {
        let mut errors = Vec::new();
        require_email(FormField::Email, "   ", &mut errors);
        assert_eq!(
            errors,
            vec![FieldError::new(FormField::Email, FieldErrorKind::Required)]
        );
    }

    #[test]
    fn display_describes_the_problem() {
        let err = FieldError::new(FormField::Message, FieldErrorKind::TooShort { min: 10 });
        assert_eq!(err.to_string(), "message needs at least 10 characters");
        assert_eq!(err.i18n_key(), "form-error-too-short");
    }
}
