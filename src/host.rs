//! The modal-dialog capability seam and its native implementation.
//!
//! The presenter never talks to a UI toolkit directly; it hands a
//! [`DialogSpec`] to a [`DialogHost`] and interprets the returned
//! [`ButtonRole`]. [`NativeDialogHost`] backs the seam with the platform's
//! message dialogs via `rfd`; tests and embedders with their own UI stack
//! substitute a custom host.

use log::debug;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::icon::DialogIcon;
use crate::parent::ParentWindow;

/// What a button in the dialog row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Dismisses the dialog and ends the interaction.
    Close,
    /// Copies the raw trace to the clipboard; the dialog is shown again.
    Copy,
    /// Opens the report URL; the dialog is shown again.
    Report,
}

/// One button in the dialog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    /// The action this button triggers.
    pub role: ButtonRole,
    /// User-visible label.
    pub label: String,
}

/// Everything a host needs to run one round of the modal dialog.
#[derive(Debug)]
pub struct DialogSpec<'a> {
    /// Dialog window title.
    pub title: &'a str,
    /// The (already clipped) transcript for the scrollable text area.
    pub body: &'a str,
    /// Buttons in row order; `Close` is always first.
    pub buttons: &'a [DialogButton],
    /// Optional custom icon; hosts may fall back to their error glyph.
    pub icon: Option<&'a DialogIcon>,
    /// Window to anchor the modal to; centred top-level when absent.
    pub parent: Option<&'a ParentWindow>,
    /// Preferred width of the text area in logical units.
    pub width: u32,
}

/// A host able to run one blocking round of the error dialog.
pub trait DialogHost {
    /// Shows the dialog and blocks until the user picks a button or
    /// dismisses the window. A window dismiss must be reported as
    /// [`ButtonRole::Close`].
    fn show_modal(&mut self, spec: &DialogSpec<'_>) -> ButtonRole;

    /// Shows a brief blocking acknowledgment (used after a copy action).
    fn acknowledge(&mut self, text: &str);
}

/// [`DialogHost`] backed by the platform's native message dialogs.
///
/// Native message boxes draw their own error glyph, so [`DialogSpec::icon`]
/// and [`DialogSpec::width`] are not applied here. `rfd` reports the clicked
/// button by its label; when two buttons share a label, the earlier role in
/// row order wins.
#[derive(Debug, Default)]
pub struct NativeDialogHost;

impl NativeDialogHost {
    fn buttons_for(row: &[DialogButton]) -> MessageButtons {
        match row {
            [] => MessageButtons::Ok,
            [close] => MessageButtons::OkCustom(close.label.clone()),
            [close, second] => {
                MessageButtons::OkCancelCustom(close.label.clone(), second.label.clone())
            }
            [close, second, third, ..] => MessageButtons::YesNoCancelCustom(
                close.label.clone(),
                second.label.clone(),
                third.label.clone(),
            ),
        }
    }

    fn role_for(row: &[DialogButton], result: MessageDialogResult) -> ButtonRole {
        match result {
            MessageDialogResult::Custom(label) => row
                .iter()
                .find(|button| button.label == label)
                .map(|button| button.role)
                .unwrap_or(ButtonRole::Close),
            // Ok / Cancel / Yes / No only come back for a window dismiss or
            // a non-custom button set; every one of them ends the round.
            _ => ButtonRole::Close,
        }
    }
}

impl DialogHost for NativeDialogHost {
    fn show_modal(&mut self, spec: &DialogSpec<'_>) -> ButtonRole {
        let mut dialog = MessageDialog::new()
            .set_title(spec.title)
            .set_description(spec.body)
            .set_level(MessageLevel::Error)
            .set_buttons(Self::buttons_for(spec.buttons));
        if let Some(parent) = spec.parent {
            dialog = dialog.set_parent(parent);
        }
        let result = dialog.show();
        debug!("error dialog round resolved to {result:?}");
        Self::role_for(spec.buttons, result)
    }

    fn acknowledge(&mut self, text: &str) {
        let _ = MessageDialog::new()
            .set_description(text)
            .set_level(MessageLevel::Info)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
