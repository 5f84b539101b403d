//! Modal error dialog for desktop applications.
//!
//! Presents an error to the end user in a blocking native dialog, with
//! optional actions to copy the full trace to the clipboard or open a bug
//! report URL in the default browser. Copy and report re-show the dialog;
//! only Close ends the interaction.
//!
//! Provides:
//! - `popup`: the [`ErrorPopup`] presenter and its modal loop
//! - `host`: the modal-dialog seam ([`DialogHost`]) and the native `rfd` host
//! - `trace` / `transcript`: trace rendering and display truncation
//! - `clipboard` / `browser`: system clipboard and default-browser launch
//! - `listener`: optional [`DialogListener`] hooks for copy/report/close
//! - `icon` / `parent`: dialog icon payload and parent-window anchoring

pub mod browser;
pub mod clipboard;
pub mod error;
pub mod host;
pub mod icon;
pub mod listener;
pub mod parent;
pub mod popup;
pub mod trace;
pub mod transcript;

pub use browser::{BrowserLauncher, SystemBrowser};
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use error::PopupError;
pub use host::{ButtonRole, DialogButton, DialogHost, DialogSpec, NativeDialogHost};
pub use icon::DialogIcon;
pub use listener::DialogListener;
pub use parent::ParentWindow;
pub use popup::ErrorPopup;
