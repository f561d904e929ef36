//! Contact form domain: field names, values, validation, and the controller.

mod controller;
mod validate;

pub use controller::{ContactForm, SubmitOutcome};
pub use validate::{FieldError, FieldErrors, is_valid_email, validate};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four inputs of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Service,
    Message,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown contact field: {0}")]
pub struct ParseFieldError(String);

impl FieldName {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Service, Self::Message];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Service => "Service Interest",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your@email.com",
            Self::Service => "e.g., Website Development, Phone Consulting",
            Self::Message => "Describe your project or inquiry...",
        }
    }

    /// The message box spans several rows; the rest are single-line inputs.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Service => 2,
            Self::Message => 3,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Email),
            Self::Email => Some(Self::Service),
            Self::Service => Some(Self::Message),
            Self::Message => None,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Name => None,
            Self::Email => Some(Self::Name),
            Self::Service => Some(Self::Email),
            Self::Message => Some(Self::Service),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

/// Plain field values, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Service => &self.service,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Service => &mut self.service,
            FieldName::Message => &mut self.message,
        };
        *slot = value.into();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactFields, FieldName};

    #[test]
    fn field_names_round_trip_through_strings() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
        assert!("phone".parse::<FieldName>().is_err());
    }

    #[test]
    fn tab_order_is_linear() {
        assert_eq!(FieldName::Name.prev(), None);
        assert_eq!(FieldName::Name.next(), Some(FieldName::Email));
        assert_eq!(FieldName::Message.next(), None);
        assert_eq!(FieldName::Message.prev(), Some(FieldName::Service));
    }

    #[test]
    fn fields_get_and_set_by_name() {
        let mut fields = ContactFields::default();
        assert!(fields.is_empty());
        fields.set(FieldName::Service, "Web");
        assert_eq!(fields.get(FieldName::Service), "Web");
        assert_eq!(fields.service, "Web");
        assert!(!fields.is_empty());
    }

    #[test]
    fn field_name_serializes_lowercase() {
        let json = serde_json::to_string(&FieldName::Email).unwrap();
        assert_eq!(json, "\"email\"");
    }
}
