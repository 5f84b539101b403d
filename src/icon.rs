//! RGBA icon payload for the error dialog.

use crate::error::PopupError;

/// An owned 32-bit RGBA icon shown next to the error transcript.
///
/// Platform message boxes draw their own error glyph and may ignore a custom
/// icon; custom [`DialogHost`] implementations receive it through
/// [`DialogSpec::icon`] and can render it however they like.
///
/// [`DialogHost`]: crate::DialogHost
/// [`DialogSpec::icon`]: crate::DialogSpec::icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogIcon {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

impl DialogIcon {
    /// Creates an icon from tightly packed RGBA bytes, 4 bytes per pixel in
    /// row-major order.
    ///
    /// Fails with [`PopupError::InvalidIcon`] when the buffer length does not
    /// equal `width * height * 4`.
    pub fn from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self, PopupError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(PopupError::InvalidIcon {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            rgba,
            width,
            height,
        })
    }

    /// The raw RGBA bytes.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Icon width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Icon height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}
