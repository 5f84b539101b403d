//! System clipboard capability.

use log::warn;

/// Write-only clipboard access.
///
/// Clipboard writes are best-effort: the dialog treats the platform clipboard
/// as always available, so implementations log failures instead of surfacing
/// them.
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str);
}

/// [`ClipboardSink`] over the system clipboard.
pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Connects to the system clipboard. An unavailable clipboard (headless
    /// session, missing display server) is logged and turns writes into
    /// no-ops.
    pub fn new() -> Self {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| warn!("system clipboard unavailable: {e}"))
            .ok();
        Self { clipboard }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) {
        if let Some(clipboard) = self.clipboard.as_mut()
            && let Err(e) = clipboard.set_text(text.to_string())
        {
            warn!("failed to write error text to clipboard: {e}");
        }
    }
}
