//! Default-browser launch capability.

use std::io;

/// Opens a URL in the user's default external browser.
pub trait BrowserLauncher {
    /// Launches `url` externally. One attempt, no retries; the error is
    /// surfaced to the presenter as a report-launch failure.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// [`BrowserLauncher`] over the desktop's default URL handler.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}
