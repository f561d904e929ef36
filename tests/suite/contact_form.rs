//! Contact form rules and controller behavior across crate boundaries.

use folio_types::ui::{Toast, ToastKind};
use folio_types::{ContactFields, ContactForm, FieldError, FieldName, SubmitOutcome, validate};

fn fields(name: &str, email: &str, service: &str, message: &str) -> ContactFields {
    ContactFields {
        name: name.to_string(),
        email: email.to_string(),
        service: service.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn minimal_valid_input_has_no_errors() {
    let errors = validate(&fields("Al", "a@b.com", "Web", "Hello there, this works"));
    assert!(errors.is_empty());
}

#[test]
fn every_failing_field_reports_its_message() {
    let errors = validate(&fields("", "bad", "", "short"));

    let messages: Vec<(FieldName, String)> = errors
        .iter()
        .map(|(field, error)| (field, error.to_string()))
        .collect();
    assert_eq!(
        messages,
        vec![
            (FieldName::Name, "Name is required".to_string()),
            (FieldName::Email, "Please enter a valid email address".to_string()),
            (FieldName::Service, "Please select or describe a service".to_string()),
            (FieldName::Message, "Message must be at least 10 characters".to_string()),
        ]
    );
}

#[test]
fn whitespace_only_values_count_as_empty() {
    let errors = validate(&fields("   ", "\t", " ", "\n\n"));
    assert_eq!(errors.get(FieldName::Name), Some(FieldError::NameRequired));
    assert_eq!(errors.get(FieldName::Email), Some(FieldError::EmailRequired));
    assert_eq!(errors.get(FieldName::Service), Some(FieldError::ServiceRequired));
    assert_eq!(errors.get(FieldName::Message), Some(FieldError::MessageRequired));
}

#[test]
fn lengths_are_measured_after_trimming() {
    let errors = validate(&fields(" A ", "a@b.co", "x", "  123456789  "));
    assert_eq!(errors.get(FieldName::Name), Some(FieldError::NameTooShort));
    assert_eq!(errors.get(FieldName::Message), Some(FieldError::MessageTooShort));
    assert_eq!(errors.len(), 2);
}

#[test]
fn email_shape_is_minimal() {
    for ok in ["a@b.c", "first.last@mail.example.org", "x+tag@y.io"] {
        assert!(validate(&fields("Al", ok, "Web", "long enough text")).is_empty(), "{ok}");
    }
    for bad in ["a@b", "@b.com", "a b@c.com", "a@@b.com", "a@b.", "plain"] {
        assert_eq!(
            validate(&fields("Al", bad, "Web", "long enough text")).get(FieldName::Email),
            Some(FieldError::EmailInvalid),
            "{bad}"
        );
    }
}

#[test]
fn validate_is_idempotent() {
    let input = fields("A", "nope", "", "hi");
    assert_eq!(validate(&input), validate(&input));
}

#[test]
fn valid_submit_notifies_once_and_clears_everything() {
    let mut form = ContactForm::new();
    form.update_field(FieldName::Name, "Al");
    form.update_field(FieldName::Email, "a@b.com");
    form.update_field(FieldName::Service, "Web");
    form.update_field(FieldName::Message, "Hello there, this works");

    let mut toasts: Vec<Toast> = Vec::new();
    let outcome = form.submit(&mut toasts);

    assert!(outcome.is_sent());
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind(), ToastKind::Success);
    assert_eq!(toasts[0].title(), "Message Sent!");
    assert_eq!(
        toasts[0].description(),
        "Thank you for reaching out. I'll get back to you soon!"
    );
    assert!(form.fields().is_empty());
    assert!(form.errors().is_empty());
}

#[test]
fn rejected_submit_keeps_values_and_sends_nothing() {
    let mut form = ContactForm::new();
    form.update_field(FieldName::Name, "Al");

    let mut toasts: Vec<Toast> = Vec::new();
    let outcome = form.submit(&mut toasts);

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(errors.len(), 3);
    assert!(toasts.is_empty());
    assert_eq!(form.value(FieldName::Name), "Al");
    assert_eq!(form.errors(), &errors);
}

#[test]
fn editing_clears_only_that_fields_error() {
    let mut form = ContactForm::new();
    form.submit(&mut Vec::<Toast>::new());
    assert_eq!(form.errors().len(), 4);

    // Still invalid, but the error is cleared without re-validating.
    form.update_field(FieldName::Email, "x");

    assert_eq!(form.error(FieldName::Email), None);
    assert_eq!(form.error(FieldName::Name), Some(FieldError::NameRequired));
    assert_eq!(form.error(FieldName::Service), Some(FieldError::ServiceRequired));
    assert_eq!(form.error(FieldName::Message), Some(FieldError::MessageRequired));
}
