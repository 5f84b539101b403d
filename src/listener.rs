//! Listener hooks for dialog actions.

/// Observer for user actions taken in the error dialog.
///
/// Every hook has a no-op default, so implementors override only what they
/// care about. Registering no listener at all is equally fine; the presenter
/// simply skips the notifications.
pub trait DialogListener {
    /// The user copied the trace to the clipboard. `stack_trace` is the full
    /// untruncated text, exactly what landed on the clipboard.
    fn on_copy_to_clipboard(&mut self, stack_trace: &str) {
        let _ = stack_trace;
    }

    /// The user asked to report the error and `report_url` was opened in the
    /// browser. Not called when the launch fails.
    fn on_report_error(&mut self, report_url: &str) {
        let _ = report_url;
    }

    /// The user closed the dialog, by button or window dismiss.
    fn on_close(&mut self) {}
}
