//! Transient notifications shown over the page.
//!
//! One toast is visible at a time; the rest wait in FIFO order. A toast
//! that is already visible or queued is not queued again.

use std::collections::VecDeque;
use std::time::Duration;

use super::animation::EffectTimer;

/// How long a toast stays up once it becomes visible.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    kind: ToastKind,
    title: String,
    description: String,
}

impl Toast {
    #[must_use]
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Confirmation after a contact form passes validation.
    #[must_use]
    pub fn message_sent() -> Self {
        Self::new(
            ToastKind::Success,
            "Message Sent!",
            "Thank you for reaching out. I'll get back to you soon!",
        )
    }

    #[must_use]
    pub fn link_copied(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, "Link copied to clipboard!", text)
    }

    #[must_use]
    pub fn share_unavailable() -> Self {
        Self::new(
            ToastKind::Warning,
            "Sharing is not available in this terminal",
            "Copy the link from the project card instead.",
        )
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Fire-and-forget sink for toasts.
pub trait Notify {
    fn notify(&mut self, toast: Toast);
}

impl Notify for Vec<Toast> {
    fn notify(&mut self, toast: Toast) {
        self.push(toast);
    }
}

#[derive(Debug)]
struct ActiveToast {
    toast: Toast,
    timer: EffectTimer,
}

#[derive(Debug)]
pub struct ToastQueue {
    active: Option<ActiveToast>,
    pending: VecDeque<Toast>,
    lifetime: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_LIFETIME)
    }
}

impl ToastQueue {
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            active: None,
            pending: VecDeque::new(),
            lifetime,
        }
    }

    /// The toast currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.active.as_ref().map(|active| &active.toast)
    }

    /// Fraction of the visible toast's lifetime already spent.
    #[must_use]
    pub fn current_progress(&self) -> Option<f32> {
        self.active.as_ref().map(|active| active.timer.progress())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len() + usize::from(self.active.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Age the visible toast; expire it and promote the next one.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(active) = self.active.as_mut() {
            active.timer.advance(delta);
            if active.timer.is_finished() {
                self.active = None;
            }
        }
        if self.active.is_none() {
            self.promote();
        }
    }

    /// Close the visible toast early.
    pub fn dismiss(&mut self) {
        self.active = None;
        self.promote();
    }

    fn promote(&mut self) {
        self.active = self.pending.pop_front().map(|toast| ActiveToast {
            toast,
            timer: EffectTimer::new(self.lifetime),
        });
    }
}

impl Notify for ToastQueue {
    fn notify(&mut self, toast: Toast) {
        if self.current() == Some(&toast) || self.pending.contains(&toast) {
            return;
        }
        self.pending.push_back(toast);
        if self.active.is_none() {
            self.promote();
        }
    }
}
