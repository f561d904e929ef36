//! Page engine for Folio: application state without TUI dependencies.
//!
//! [`App`] owns the scroll position, focus, section reveals, contact form,
//! FAQ accordion, and theme preference. The TUI crate measures the page,
//! renders from `App` accessors, and maps key presses onto its transitions.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod app;
pub mod content;
mod faq;
mod focus;
mod layout;
mod reveal;
mod section;
mod share;
mod skills;

pub use app::{App, AppInit, FormMode, FormToken};
pub use faq::Accordion;
pub use focus::{Focus, FormFocus};
pub use layout::{Anchor, PageLayout, RowSpan, intersection_ratio, reveal_ratio};
pub use reveal::PageReveals;
pub use section::{RevealPolicy, SectionId};
pub use share::{Clipboard, ClipboardError, MemoryClipboard, NoClipboard};
pub use skills::SkillMeters;

pub use folio_config::{PreferenceStore, ThemePreference};
pub use folio_types::ui::{Toast, ToastKind, UiOptions};
pub use folio_types::{ContactForm, FieldError, FieldName, SubmitOutcome, ThemeMode};
