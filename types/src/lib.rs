//! Core domain types for Folio.
//!
//! Pure state machines with no IO, no async, and no terminal dependency:
//! contact form validation and its controller, reveal latches, the theme
//! mode, and the small UI value types the engine and TUI share.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod contact;
mod draft;
mod reveal;
mod theme;
pub mod ui;

pub use contact::{
    ContactFields, ContactForm, FieldError, FieldErrors, FieldName, ParseFieldError,
    SubmitOutcome, validate,
};
pub use draft::DraftInput;
pub use reveal::{
    Observation, Reported, RevealLatch, RevealObserver, RevealState, Threshold, ThresholdError,
    VisibleIndexSet,
};
pub use theme::{ParseThemeError, ThemeMode};
