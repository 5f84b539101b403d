//! Typed error types for error-popup.
//!
//! The component has exactly two failure surfaces: configuration mistakes
//! caught at construction time, and a report-launch failure at runtime.
//! Everything else (clipboard writes, transcript assembly, button-row
//! construction) is treated as infallible.

use std::io;

use thiserror::Error;

/// Top-level error type for the error dialog.
#[derive(Debug, Error)]
pub enum PopupError {
    /// Reporting was enabled without a usable report URL.
    ///
    /// Raised at construction time; the caller must supply a non-empty URL
    /// or disable reporting and construct again.
    #[error("a report URL is required when error reporting is enabled")]
    MissingReportUrl,

    /// The RGBA buffer handed to [`DialogIcon::from_rgba`] does not match
    /// the stated dimensions.
    ///
    /// [`DialogIcon::from_rgba`]: crate::DialogIcon::from_rgba
    #[error("invalid icon data: expected {expected} RGBA bytes, got {actual}")]
    InvalidIcon {
        /// Expected byte count (`width * height * 4`).
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },

    /// The report URL could not be opened in the default browser.
    ///
    /// The modal interaction continues after this failure; it is returned
    /// from `present` once the user closes the dialog.
    #[error("failed to open report URL '{url}': {source}")]
    ReportLaunch {
        /// The URL that could not be opened.
        url: String,
        /// Underlying launch error.
        #[source]
        source: io::Error,
    },
}
