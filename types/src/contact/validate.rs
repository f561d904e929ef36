//! Contact form validation rules.
//!
//! Every field is checked on every call; one field failing never hides
//! another field's error. A field absent from [`FieldErrors`] is valid.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::{ContactFields, FieldName};

/// `local@domain.tld` with no whitespace or extra `@` in any part.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// A failed rule. `Display` is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please select or describe a service")]
    ServiceRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    #[must_use]
    pub const fn field(self) -> FieldName {
        match self {
            Self::NameRequired | Self::NameTooShort => FieldName::Name,
            Self::EmailRequired | Self::EmailInvalid => FieldName::Email,
            Self::ServiceRequired => FieldName::Service,
            Self::MessageRequired | Self::MessageTooShort => FieldName::Message,
        }
    }
}

/// Failing fields and their error, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<FieldName, FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<FieldError> {
        self.entries.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    /// Drop a single field's error, returning it if there was one.
    pub fn clear(&mut self, field: FieldName) -> Option<FieldError> {
        self.entries.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldError)> + '_ {
        self.entries.iter().map(|(field, error)| (*field, *error))
    }

    fn record(&mut self, error: FieldError) {
        self.entries.insert(error.field(), error);
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.record(error);
        }
        errors
    }
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Counted in chars, which differs from a UTF-16 length only for astral-plane text.
fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn check_name(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::NameRequired)
    } else if trimmed_len(value) < NAME_MIN_CHARS {
        Some(FieldError::NameTooShort)
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::EmailRequired)
    } else if !is_valid_email(value) {
        // The pattern sees the raw value, so surrounding spaces are rejected.
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

fn check_service(value: &str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then_some(FieldError::ServiceRequired)
}

fn check_message(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::MessageRequired)
    } else if trimmed_len(value) < MESSAGE_MIN_CHARS {
        Some(FieldError::MessageTooShort)
    } else {
        None
    }
}

/// Validate all four fields independently.
#[must_use]
pub fn validate(fields: &ContactFields) -> FieldErrors {
    [
        check_name(&fields.name),
        check_email(&fields.email),
        check_service(&fields.service),
        check_message(&fields.message),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{FieldError, FieldErrors, is_valid_email, validate};
    use crate::contact::{ContactFields, FieldName};

    fn fields(name: &str, email: &str, service: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    fn messages(errors: &FieldErrors) -> Vec<(FieldName, String)> {
        errors
            .iter()
            .map(|(field, error)| (field, error.to_string()))
            .collect()
    }

    #[test]
    fn valid_record_has_no_errors() {
        let errors = validate(&fields("Al", "a@b.com", "Web", "Hello there, this works"));
        assert!(errors.is_empty());
    }

    #[test]
    fn every_field_failing_reports_all_four() {
        let errors = validate(&fields("", "bad", "", "short"));
        assert_eq!(
            messages(&errors),
            vec![
                (FieldName::Name, "Name is required".to_string()),
                (
                    FieldName::Email,
                    "Please enter a valid email address".to_string()
                ),
                (
                    FieldName::Service,
                    "Please select or describe a service".to_string()
                ),
                (
                    FieldName::Message,
                    "Message must be at least 10 characters".to_string()
                ),
            ]
        );
    }

    #[test]
    fn empty_record_reports_required_messages() {
        let errors = validate(&ContactFields::default());
        assert_eq!(errors.get(FieldName::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(FieldName::Email), Some(FieldError::EmailRequired));
        assert_eq!(
            errors.get(FieldName::Message).map(|e| e.to_string()),
            Some("Message is required".to_string())
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate(&fields("   ", "\t", " ", "\n\n"));
        assert_eq!(errors.get(FieldName::Name), Some(FieldError::NameRequired));
        assert_eq!(errors.get(FieldName::Email), Some(FieldError::EmailRequired));
        assert_eq!(
            errors.get(FieldName::Service),
            Some(FieldError::ServiceRequired)
        );
        assert_eq!(
            errors.get(FieldName::Message),
            Some(FieldError::MessageRequired)
        );
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        let errors = validate(&fields(" A ", "a@b.co", "x", "  123456789  "));
        assert_eq!(errors.get(FieldName::Name), Some(FieldError::NameTooShort));
        assert_eq!(
            errors.get(FieldName::Message),
            Some(FieldError::MessageTooShort)
        );
        assert!(!errors.contains(FieldName::Email));
        assert!(!errors.contains(FieldName::Service));

        let errors = validate(&fields("Jo", "a@b.co", "x", "1234567890"));
        assert!(errors.is_empty());
    }

    #[test]
    fn only_disqualifying_fields_are_reported() {
        let errors = validate(&fields("Alice", "alice@example.org", "", "A long enough note"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldName::Service),
            Some(FieldError::ServiceRequired)
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let input = fields("B", "nope@", "Repair", "hi");
        assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn email_pattern_is_minimal() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("a@b..c"), "consecutive dots are accepted");
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
    }

    #[test]
    fn padded_email_is_invalid_not_missing() {
        let errors = validate(&fields("Al", " a@b.com ", "Web", "Hello there!"));
        assert_eq!(errors.get(FieldName::Email), Some(FieldError::EmailInvalid));
    }

    #[test]
    fn each_error_maps_back_to_its_field() {
        assert_eq!(FieldError::NameTooShort.field(), FieldName::Name);
        assert_eq!(FieldError::EmailInvalid.field(), FieldName::Email);
        assert_eq!(FieldError::ServiceRequired.field(), FieldName::Service);
        assert_eq!(FieldError::MessageTooShort.field(), FieldName::Message);
    }
}
