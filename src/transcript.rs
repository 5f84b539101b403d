//! Transcript assembly and display truncation.
//!
//! The transcript is the text block shown in the dialog's scrollable area:
//! the instructions line, then the short message (when one was given), then
//! the full trace. The *combined* string is clipped for display; the raw
//! trace handed to the clipboard is never clipped.

use std::borrow::Cow;

/// Maximum number of characters shown in the dialog's text area.
pub const MAX_TRANSCRIPT_CHARS: usize = 1500;

/// Marker appended when the transcript was cut at the display limit.
pub const TRUNCATION_MARKER: &str = "...";

/// Builds the transcript: `instructions`, a newline, then `message` and the
/// trace on separate lines. An empty message contributes nothing.
pub fn compose(instructions: &str, message: &str, trace: &str) -> String {
    if message.is_empty() {
        format!("{instructions}\n{trace}")
    } else {
        format!("{instructions}\n{message}\n{trace}")
    }
}

/// Clips `text` to [`MAX_TRANSCRIPT_CHARS`] characters, appending
/// [`TRUNCATION_MARKER`] when anything was cut.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn clip(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_TRANSCRIPT_CHARS) {
        Some((cut, _)) => {
            let mut clipped = String::with_capacity(cut + TRUNCATION_MARKER.len());
            clipped.push_str(&text[..cut]);
            clipped.push_str(TRUNCATION_MARKER);
            Cow::Owned(clipped)
        }
        None => Cow::Borrowed(text),
    }
}
