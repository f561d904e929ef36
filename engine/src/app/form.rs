//! Contact form editing, available only while the form has focus.

use folio_types::{DraftInput, FieldName, SubmitOutcome};
use folio_utils::sanitize_pasted_text;
use tracing::{debug, info};

use super::App;
use crate::focus::{Focus, FormFocus};

/// Proof that the contact form has focus.
#[derive(Debug)]
pub struct FormToken(pub(super) ());

/// Mode wrapper for form operations.
pub struct FormMode<'a> {
    pub(super) app: &'a mut App,
}

impl FormMode<'_> {
    #[must_use]
    pub fn focus(&self) -> FormFocus {
        match self.app.ui.focus {
            Focus::Form(focus) => focus,
            _ => FormFocus::FIRST,
        }
    }

    fn set_focus(&mut self, focus: FormFocus) {
        self.app.ui.focus = Focus::Form(focus);
    }

    /// Apply `edit` to the focused field. No-op while Send is focused.
    fn edit(&mut self, edit: impl FnOnce(&mut DraftInput)) {
        if let Some(field) = self.focus().field() {
            let had_error = self.app.page.form.error(field).is_some();
            self.app.page.form.edit_field(field, edit);
            if had_error && self.app.page.form.error(field).is_none() {
                debug!(%field, "Field error cleared by edit");
            }
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.edit(|draft| draft.enter_char(c));
    }

    /// Insert pasted text. Control sequences are stripped and single-line
    /// fields get newlines flattened to spaces.
    pub fn enter_text(&mut self, text: &str) {
        let Some(field) = self.focus().field() else {
            return;
        };
        let clean = sanitize_pasted_text(text);
        // Single-line fields drop line breaks at either end of the text and
        // turn inner ones into spaces.
        let clean = if field.is_multiline() {
            clean.into_owned()
        } else {
            clean.trim_matches('\n').replace(['\n', '\t'], " ")
        };
        if !clean.is_empty() {
            self.edit(|draft| draft.enter_text(&clean));
        }
    }

    pub fn delete_char(&mut self) {
        self.edit(|draft| {
            draft.delete_char();
        });
    }

    pub fn delete_char_forward(&mut self) {
        self.edit(|draft| {
            draft.delete_char_forward();
        });
    }

    pub fn move_cursor_left(&mut self) {
        self.edit(DraftInput::move_cursor_left);
    }

    pub fn move_cursor_right(&mut self) {
        self.edit(DraftInput::move_cursor_right);
    }

    pub fn move_cursor_home(&mut self) {
        self.edit(DraftInput::move_cursor_home);
    }

    pub fn move_cursor_end(&mut self) {
        self.edit(DraftInput::move_cursor_end);
    }

    pub fn focus_next(&mut self) {
        let next = self.focus().next();
        self.set_focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = self.focus().prev();
        self.set_focus(prev);
    }

    /// Enter: advance to the next stop, or submit from Send.
    pub fn activate(&mut self) -> Option<SubmitOutcome> {
        match self.focus() {
            FormFocus::Send => Some(self.submit()),
            FormFocus::Field(_) => {
                self.focus_next();
                None
            }
        }
    }

    /// Validate and submit. On success focus returns to the first field.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.app.page.form.submit(&mut self.app.ui.toasts);
        match &outcome {
            SubmitOutcome::Sent(fields) => {
                info!(
                    service = %fields.service.trim(),
                    message_chars = fields.message.trim().chars().count(),
                    "Contact form submitted"
                );
                self.set_focus(FormFocus::FIRST);
            }
            SubmitOutcome::Rejected(errors) => {
                let fields: Vec<FieldName> = errors.iter().map(|(field, _)| field).collect();
                debug!(?fields, "Contact form rejected");
            }
        }
        outcome
    }

    /// Return focus to the page; values and errors stay as they are.
    pub fn leave(self) {
        self.app.ui.focus = Focus::Page;
    }
}
