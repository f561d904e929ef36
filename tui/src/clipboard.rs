//! System clipboard behind the engine's [`Clipboard`] seam.

use folio_engine::{Clipboard, ClipboardError};
use tracing::debug;

/// The desktop clipboard via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Fails on headless sessions (no X11/Wayland display, SSH without
    /// forwarding).
    pub fn new() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|err| ClipboardError(err.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|err| ClipboardError(err.to_string()))?;
        debug!(chars = text.chars().count(), "Copied to system clipboard");
        Ok(())
    }
}
