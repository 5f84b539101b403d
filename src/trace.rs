//! Textual trace rendering for error values.

use std::error::Error;

/// Renders the full textual trace of an error: its own message followed by
/// one `Caused by:` line per link in the `source()` chain.
///
/// This is the exact text handed to the clipboard on a copy action, before
/// any instructions prefix or display truncation is applied.
pub fn render(error: &dyn Error) -> String {
    let mut trace = error.to_string();
    let mut cause = error.source();
    while let Some(err) = cause {
        trace.push_str("\nCaused by: ");
        trace.push_str(&err.to_string());
        cause = err.source();
    }
    trace
}
