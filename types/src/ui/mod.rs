//! UI state types shared by the engine and the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod animation;
mod options;
mod toast;

pub use animation::{AnimPhase, EffectTimer, staggered_progress};
pub use options::UiOptions;
pub use toast::{Notify, Toast, ToastKind, ToastQueue};
