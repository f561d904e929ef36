//! Contact form controller: owns field drafts and the error snapshot.

use crate::draft::DraftInput;
use crate::ui::{Notify, Toast};

use super::{ContactFields, FieldError, FieldErrors, FieldName, validate};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed. Carries the values that were accepted; the form
    /// has already been reset.
    Sent(ContactFields),
    /// At least one rule failed. The same errors are now on the form.
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

/// Field state plus the errors from the last validation pass.
///
/// Invariant: an error is present only if its field failed the last
/// `submit`. Editing a field drops its error without re-validating, so the
/// errors are a snapshot, not a live view.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    drafts: [DraftInput; 4],
    errors: FieldErrors,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: FieldName) -> &str {
        self.drafts[field.index()].text()
    }

    #[must_use]
    pub fn draft(&self, field: FieldName) -> &DraftInput {
        &self.drafts[field.index()]
    }

    #[must_use]
    pub fn fields(&self) -> ContactFields {
        let mut fields = ContactFields::default();
        for field in FieldName::ALL {
            fields.set(field, self.value(field));
        }
        fields
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: FieldName) -> Option<FieldError> {
        self.errors.get(field)
    }

    /// Replace a field's value. Any error on that field is dropped.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.drafts[field.index()].set_text(value);
        self.errors.clear(field);
    }

    /// Apply an in-place edit (keystroke, deletion, cursor move).
    ///
    /// The field's error is dropped only if the text actually changed, so
    /// moving the cursor across an invalid value leaves its message up.
    pub fn edit_field(&mut self, field: FieldName, edit: impl FnOnce(&mut DraftInput)) {
        let draft = &mut self.drafts[field.index()];
        let before = draft.text().to_owned();
        edit(draft);
        if draft.text() != before {
            self.errors.clear(field);
        }
    }

    /// Validate and, if everything passes, notify and reset.
    pub fn submit<N: Notify + ?Sized>(&mut self, notifier: &mut N) -> SubmitOutcome {
        let fields = self.fields();
        self.errors = validate(&fields);
        if !self.errors.is_empty() {
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        notifier.notify(Toast::message_sent());
        self.reset();
        SubmitOutcome::Sent(fields)
    }

    pub fn reset(&mut self) {
        for draft in &mut self.drafts {
            draft.clear();
        }
        self.errors = FieldErrors::new();
    }
}
