//! The error dialog presenter.

use std::error::Error;

use log::{debug, error, info};

use crate::browser::{BrowserLauncher, SystemBrowser};
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::error::PopupError;
use crate::host::{ButtonRole, DialogButton, DialogHost, DialogSpec, NativeDialogHost};
use crate::icon::DialogIcon;
use crate::listener::DialogListener;
use crate::parent::ParentWindow;
use crate::{trace, transcript};

/// Preferred width of the dialog's text area in logical units.
const DIALOG_WIDTH: u32 = 500;

const DEFAULT_INSTRUCTIONS: &str = "Please report this error, either with an image of the screen \
     or by copying the following error text (it is appreciable to provide a description of the \
     operations performed before the error):";
const DEFAULT_CLOSE_LABEL: &str = "Close";
const DEFAULT_COPY_LABEL: &str = "Copy error to the clipboard";
const DEFAULT_REPORT_LABEL: &str = "Report the error";
const COPY_ACKNOWLEDGMENT: &str = "Error text has been copied to the clipboard";

/// A modal error dialog with optional copy-to-clipboard and report actions.
///
/// [`present`] blocks until the user closes the dialog. The copy and report
/// buttons perform their side effect and re-show the same dialog, so the
/// user is never left without it; only Close (or a window dismiss) ends the
/// interaction.
///
/// ```no_run
/// use error_popup::ErrorPopup;
///
/// # fn main() -> Result<(), error_popup::PopupError> {
/// let mut popup = ErrorPopup::new(
///     "Unexpected error",
///     None,
///     true,
///     true,
///     Some("https://example.com/bugs/new".into()),
/// )?;
/// let err = std::io::Error::other("configuration file corrupted");
/// popup.present("Failed to load settings", &err)?;
/// # Ok(())
/// # }
/// ```
///
/// [`present`]: ErrorPopup::present
pub struct ErrorPopup {
    title: String,
    icon: Option<DialogIcon>,
    copy_to_clipboard: bool,
    report_error: bool,
    report_url: Option<String>,
    instructions: String,
    close_button_text: String,
    copy_button_text: String,
    report_button_text: String,
    parent: Option<ParentWindow>,
    listener: Option<Box<dyn DialogListener>>,
    host: Box<dyn DialogHost>,
    clipboard: Box<dyn ClipboardSink>,
    browser: Box<dyn BrowserLauncher>,
}

impl std::fmt::Debug for ErrorPopup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorPopup")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("copy_to_clipboard", &self.copy_to_clipboard)
            .field("report_error", &self.report_error)
            .field("report_url", &self.report_url)
            .field("instructions", &self.instructions)
            .field("close_button_text", &self.close_button_text)
            .field("copy_button_text", &self.copy_button_text)
            .field("report_button_text", &self.report_button_text)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

impl ErrorPopup {
    /// Creates a presenter.
    ///
    /// `report_url` must be a non-empty URL whenever `report_error` is true;
    /// with reporting disabled, `None` is accepted. Violation fails with
    /// [`PopupError::MissingReportUrl`] here rather than at `present` time.
    pub fn new(
        title: impl Into<String>,
        icon: Option<DialogIcon>,
        copy_to_clipboard: bool,
        report_error: bool,
        report_url: Option<String>,
    ) -> Result<Self, PopupError> {
        if report_error && report_url.as_deref().is_none_or(str::is_empty) {
            return Err(PopupError::MissingReportUrl);
        }
        Ok(Self {
            title: title.into(),
            icon,
            copy_to_clipboard,
            report_error,
            report_url,
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            close_button_text: DEFAULT_CLOSE_LABEL.to_string(),
            copy_button_text: DEFAULT_COPY_LABEL.to_string(),
            report_button_text: DEFAULT_REPORT_LABEL.to_string(),
            parent: None,
            listener: None,
            host: Box::new(NativeDialogHost),
            clipboard: Box::new(SystemClipboard::new()),
            browser: Box::new(SystemBrowser),
        })
    }

    /// Replaces the instruction text shown above the trace.
    pub fn set_instructions_message(&mut self, instructions: impl Into<String>) {
        self.instructions = instructions.into();
    }

    /// Replaces the label of the Close button.
    pub fn set_close_button_text(&mut self, text: impl Into<String>) {
        self.close_button_text = text.into();
    }

    /// Replaces the label of the Copy button.
    pub fn set_copy_button_text(&mut self, text: impl Into<String>) {
        self.copy_button_text = text.into();
    }

    /// Replaces the label of the Report button.
    pub fn set_report_button_text(&mut self, text: impl Into<String>) {
        self.report_button_text = text.into();
    }

    /// Anchors future dialogs to `parent`; `None` shows them top-level.
    pub fn set_parent_window(&mut self, parent: Option<ParentWindow>) {
        self.parent = parent;
    }

    /// Registers the listener notified of copy, report and close actions.
    pub fn set_listener(&mut self, listener: Box<dyn DialogListener>) {
        self.listener = Some(listener);
    }

    /// Replaces the modal-dialog host. Native platform dialogs by default.
    pub fn set_dialog_host(&mut self, host: Box<dyn DialogHost>) {
        self.host = host;
    }

    /// Replaces the clipboard capability. The system clipboard by default.
    pub fn set_clipboard(&mut self, clipboard: Box<dyn ClipboardSink>) {
        self.clipboard = clipboard;
    }

    /// Replaces the browser-launch capability. The default URL handler by
    /// default.
    pub fn set_browser(&mut self, browser: Box<dyn BrowserLauncher>) {
        self.browser = browser;
    }

    /// Presents `error` modally and blocks until the user closes the dialog.
    ///
    /// `message` is an optional short description shown between the
    /// instructions and the trace; pass `""` to omit it. Copy and report
    /// re-show the dialog after their side effect. A failed report launch
    /// keeps the dialog alive and is returned as
    /// [`PopupError::ReportLaunch`] once the interaction ends (first failure
    /// wins if there were several).
    pub fn present(&mut self, message: &str, error: &dyn Error) -> Result<(), PopupError> {
        let stack_trace = trace::render(error);
        let full_transcript = transcript::compose(&self.instructions, message, &stack_trace);
        let buttons = self.button_row();
        let mut launch_failure = None;

        loop {
            let body = transcript::clip(&full_transcript);
            let spec = DialogSpec {
                title: &self.title,
                body: &body,
                buttons: &buttons,
                icon: self.icon.as_ref(),
                parent: self.parent.as_ref(),
                width: DIALOG_WIDTH,
            };
            match self.host.show_modal(&spec) {
                ButtonRole::Copy if self.copy_to_clipboard => {
                    info!("copying error trace to clipboard ({} bytes)", stack_trace.len());
                    self.clipboard.set_text(&stack_trace);
                    self.host.acknowledge(COPY_ACKNOWLEDGMENT);
                    if let Some(listener) = self.listener.as_mut() {
                        listener.on_copy_to_clipboard(&stack_trace);
                    }
                }
                ButtonRole::Report if self.report_error => {
                    // Construction guarantees a URL whenever reporting is on.
                    let url = self.report_url.as_deref().unwrap_or_default();
                    match self.browser.open(url) {
                        Ok(()) => {
                            info!("opened report URL {url}");
                            if let Some(listener) = self.listener.as_mut() {
                                listener.on_report_error(url);
                            }
                        }
                        Err(e) => {
                            error!("failed to open report URL {url}: {e}");
                            if launch_failure.is_none() {
                                launch_failure = Some(PopupError::ReportLaunch {
                                    url: url.to_string(),
                                    source: e,
                                });
                            }
                        }
                    }
                }
                // Close, a window dismiss, or a role the row never offered.
                _ => {
                    debug!("error dialog closed");
                    if let Some(listener) = self.listener.as_mut() {
                        listener.on_close();
                    }
                    break;
                }
            }
        }

        match launch_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Close always leads the row; Copy and Report follow their flags.
    fn button_row(&self) -> Vec<DialogButton> {
        let mut row = vec![DialogButton {
            role: ButtonRole::Close,
            label: self.close_button_text.clone(),
        }];
        if self.copy_to_clipboard {
            row.push(DialogButton {
                role: ButtonRole::Copy,
                label: self.copy_button_text.clone(),
            });
        }
        if self.report_error {
            row.push(DialogButton {
                role: ButtonRole::Report,
                label: self.report_button_text.clone(),
            });
        }
        row
    }
}
