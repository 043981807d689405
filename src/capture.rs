//! Webcam capture with non-blocking poll semantics.
//!
//! A failed or empty read is not an error: it is an empty tick the host
//! simply skips. Only opening the device can fail.

use crate::{Error, Result};
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE};

/// Camera device wrapper
pub struct Camera {
    capture: VideoCapture,
    index: i32,
}

impl Camera {
    /// Open a camera by logical device index.
    ///
    /// # Errors
    ///
    /// Returns `Error::Capture` if the device cannot be opened.
    pub fn open(index: i32) -> Result<Self> {
        log::info!("Opening camera {index}");
        let mut capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(Error::Capture(format!("Camera {index} is not available")));
        }

        // Keep latency low: never queue more than one frame
        capture.set(CAP_PROP_BUFFERSIZE, 1.0)?;

        Ok(Self { capture, index })
    }

    /// Poll one frame. `Ok(None)` when no frame is available this tick.
    ///
    /// # Errors
    ///
    /// Returns an error only for OpenCV-level failures, not for an absent
    /// frame.
    pub fn read(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }

    /// Release the underlying device
    ///
    /// # Errors
    ///
    /// Returns an error if the device refuses to release.
    pub fn release(&mut self) -> Result<()> {
        log::info!("Releasing camera {}", self.index);
        self.capture.release()?;
        Ok(())
    }
}
