//! Parent-window capture for anchoring the modal dialog.

use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, RawDisplayHandle,
    RawWindowHandle, WindowHandle,
};

/// A captured window/display handle pair used to anchor the error dialog to
/// an application window.
///
/// Only the raw handles are held. The embedder must keep the source window
/// alive for as long as the popup may present a dialog parented to it.
#[derive(Debug, Clone, Copy)]
pub struct ParentWindow {
    window: RawWindowHandle,
    display: RawDisplayHandle,
}

impl ParentWindow {
    /// Captures the raw handles of `window`.
    pub fn new(window: &(impl HasWindowHandle + HasDisplayHandle)) -> Result<Self, HandleError> {
        Ok(Self {
            window: window.window_handle()?.as_raw(),
            display: window.display_handle()?.as_raw(),
        })
    }
}

impl HasWindowHandle for ParentWindow {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        // Safety: handle validity is the embedder's obligation, stated on
        // `ParentWindow::new`.
        Ok(unsafe { WindowHandle::borrow_raw(self.window) })
    }
}

impl HasDisplayHandle for ParentWindow {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        // Safety: as above.
        Ok(unsafe { DisplayHandle::borrow_raw(self.display) })
    }
}
