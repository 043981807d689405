//! Preview window for the annotated camera feed.
//!
//! A debugging/accessibility aid only: the overlay is already burned into the
//! frame by the session, this adapter just puts it on screen.

use crate::Result;
use opencv::core::Mat;
use opencv::highgui::{self, WINDOW_NORMAL};

/// OpenCV preview window with a visibility toggle
pub struct PreviewWindow {
    name: String,
    visible: bool,
}

impl PreviewWindow {
    /// Create and show a named window
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(name: &str, width: i32, height: i32) -> Result<Self> {
        highgui::named_window(name, WINDOW_NORMAL)?;
        highgui::resize_window(name, width, height)?;
        Ok(Self {
            name: name.to_string(),
            visible: true,
        })
    }

    /// Show a frame, unless the window is currently toggled off
    ///
    /// # Errors
    ///
    /// Returns an error if displaying fails.
    pub fn show(&self, frame: &Mat) -> Result<()> {
        if self.visible {
            highgui::imshow(&self.name, frame)?;
        }
        Ok(())
    }

    /// Flip visibility on or off
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        log::debug!("Preview window visible: {}", self.visible);
    }

    /// Whether frames are currently being shown
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Poll the GUI event loop for a key press (non-blocking)
    ///
    /// # Errors
    ///
    /// Returns an error if the GUI event loop fails.
    pub fn poll_key(&self) -> Result<i32> {
        Ok(highgui::wait_key(1)?)
    }
}
