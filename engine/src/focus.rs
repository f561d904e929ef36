use folio_types::FieldName;

/// Which part of the page receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scrolling and global shortcuts.
    #[default]
    Page,
    /// Editing the contact form.
    Form(FormFocus),
    /// Moving through the FAQ accordion.
    Faq,
    /// Full-size certificate overlay.
    CertificateModal,
    /// Collapsed navigation menu on narrow terminals.
    Menu { selected: usize },
}

/// Tab stops of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldName),
    Send,
}

impl FormFocus {
    pub const FIRST: Self = Self::Field(FieldName::Name);

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Field(field) => field.next().map_or(Self::Send, Self::Field),
            Self::Send => Self::FIRST,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Field(field) => field.prev().map_or(Self::Send, Self::Field),
            Self::Send => Self::Field(FieldName::Message),
        }
    }

    #[must_use]
    pub fn field(self) -> Option<FieldName> {
        match self {
            Self::Field(field) => Some(field),
            Self::Send => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FormFocus;
    use folio_types::FieldName;

    #[test]
    fn tab_order_wraps_through_send() {
        let mut focus = FormFocus::FIRST;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(focus);
            focus = focus.next();
        }
        assert_eq!(
            seen,
            vec![
                FormFocus::Field(FieldName::Name),
                FormFocus::Field(FieldName::Email),
                FormFocus::Field(FieldName::Service),
                FormFocus::Field(FieldName::Message),
                FormFocus::Send,
            ]
        );
        assert_eq!(focus, FormFocus::FIRST);
        assert_eq!(FormFocus::FIRST.prev(), FormFocus::Send);
    }
}
