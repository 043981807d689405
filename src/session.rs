//! Recognition session: the per-frame orchestrator.
//!
//! The session owns the landmark provider, the letter classifier and the two
//! stability filters. The host feeds it frames through [`RecognitionSession::process`]
//! and reads results on demand through [`RecognitionSession::commands`] and
//! [`RecognitionSession::frame`].
//!
//! The latest annotated frame sits behind a mutex: today capture and render
//! share one cooperative loop, but the design anticipates capture moving to a
//! worker thread, and readers must never observe a partially written frame.

use crate::commands::GameCommands;
use crate::constants::{
    GESTURE_STABILITY_FRAMES, LANDMARK_DOT_RADIUS, LETTER_STABILITY_FRAMES, OVERLAY_FONT_SCALE,
    OVERLAY_GESTURE_POS, OVERLAY_LETTER_POS,
};
use crate::gesture::{self, Gesture};
use crate::hand_detection::LandmarkProvider;
use crate::landmarks::HandLandmarks;
use crate::letter_classifier::{LetterClassifier, LetterPrediction};
use crate::stability::StabilityFilter;
use crate::Result;
use opencv::core::{self, Mat, Point, Scalar};
use opencv::imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8};
use opencv::prelude::*;
use std::sync::{Mutex, PoisonError};

/// Per-frame recognition orchestrator
pub struct RecognitionSession {
    provider: Box<dyn LandmarkProvider>,
    classifier: LetterClassifier,
    gesture_filter: StabilityFilter<Gesture>,
    letter_filter: StabilityFilter<LetterPrediction>,
    current_gesture: Gesture,
    gesture_confidence: f32,
    latest_frame: Mutex<Option<Mat>>,
    mirror: bool,
}

impl RecognitionSession {
    /// Create a session with the default stability windows (3 frames for
    /// gestures, 5 for letters)
    #[must_use]
    pub fn new(provider: Box<dyn LandmarkProvider>, classifier: LetterClassifier) -> Self {
        Self::with_windows(provider, classifier, GESTURE_STABILITY_FRAMES, LETTER_STABILITY_FRAMES)
    }

    /// Create a session with explicit stability window sizes
    #[must_use]
    pub fn with_windows(
        provider: Box<dyn LandmarkProvider>,
        classifier: LetterClassifier,
        gesture_frames: usize,
        letter_frames: usize,
    ) -> Self {
        Self {
            provider,
            classifier,
            gesture_filter: StabilityFilter::new(gesture_frames),
            letter_filter: StabilityFilter::with_eligibility(letter_frames, LetterPrediction::is_letter),
            current_gesture: Gesture::None,
            gesture_confidence: 0.0,
            latest_frame: Mutex::new(None),
            mirror: true,
        }
    }

    /// Enable or disable horizontal mirroring of incoming frames
    pub fn set_mirror(&mut self, mirror: bool) {
        self.mirror = mirror;
    }

    /// Process one captured BGR frame.
    ///
    /// Mirrors the frame, runs landmark detection, updates both stability
    /// filters and stores the annotated frame for readers. When no hand is
    /// found the gesture filter still observes `none` (a vanished hand decays
    /// the confirmed gesture), while the letter filter is left untouched so a
    /// brief tracking loss does not clear the confirmed letter.
    ///
    /// # Errors
    ///
    /// Returns an error if an OpenCV operation or the landmark model fails.
    /// Confirmed state is not altered on error.
    pub fn process(&mut self, frame: &Mat) -> Result<()> {
        let mut working = Mat::default();
        if self.mirror {
            core::flip(frame, &mut working, 1)?;
        } else {
            working = frame.try_clone()?;
        }

        match self.provider.detect(&working)? {
            Some(hand) => {
                let (raw_gesture, confidence) = gesture::detect(&hand);
                let prediction = self.classifier.predict(&hand.flatten());

                self.letter_filter.observe(prediction);
                self.update_gesture(raw_gesture, confidence);

                self.annotate(&mut working, &hand, raw_gesture, confidence)?;
            }
            None => {
                self.update_gesture(Gesture::None, 0.0);
            }
        }

        let mut latest = self
            .latest_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *latest = Some(working);

        Ok(())
    }

    /// Recompute the full command snapshot from the confirmed state
    #[must_use]
    pub fn commands(&self) -> GameCommands {
        GameCommands::from_state(self.current_gesture, self.gesture_confidence, &self.current_letter())
    }

    /// Deep copy of the latest annotated frame, if any.
    ///
    /// Safe to call concurrently with `process`.
    ///
    /// # Errors
    ///
    /// Returns an error if cloning the frame fails.
    pub fn frame(&self) -> Result<Option<Mat>> {
        let latest = self
            .latest_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match latest.as_ref() {
            Some(frame) => Ok(Some(frame.try_clone()?)),
            None => Ok(None),
        }
    }

    /// Currently confirmed gesture and its confidence
    #[must_use]
    pub fn gesture_info(&self) -> (Gesture, f32) {
        (self.current_gesture, self.gesture_confidence)
    }

    /// Currently confirmed letter, empty when none
    #[must_use]
    pub fn current_letter(&self) -> String {
        self.letter_filter
            .confirmed()
            .map(|prediction| prediction.as_str().to_string())
            .unwrap_or_default()
    }

    /// Whether the letter classifier has a fitted model
    #[must_use]
    pub fn classifier_loaded(&self) -> bool {
        self.classifier.is_loaded()
    }

    fn update_gesture(&mut self, raw: Gesture, confidence: f32) {
        if let Some(&confirmed) = self.gesture_filter.observe(raw) {
            self.current_gesture = confirmed;
            self.gesture_confidence = confidence;
        } else {
            self.current_gesture = Gesture::None;
            self.gesture_confidence = 0.0;
        }
    }

    /// Burn landmark dots and overlay text into the display frame
    #[allow(clippy::cast_possible_truncation)] // Pixel coordinates
    fn annotate(&self, frame: &mut Mat, hand: &HandLandmarks, raw_gesture: Gesture, confidence: f32) -> Result<()> {
        let width = frame.cols() as f32;
        let height = frame.rows() as f32;

        for point in hand.points() {
            imgproc::circle(
                frame,
                Point::new((point.x * width) as i32, (point.y * height) as i32),
                LANDMARK_DOT_RADIUS,
                Scalar::new(255.0, 0.0, 0.0, 0.0),
                -1,
                LINE_8,
                0,
            )?;
        }

        let gesture_text = format!("Gesto: {raw_gesture} ({confidence:.2})");
        imgproc::put_text(
            frame,
            &gesture_text,
            Point::new(OVERLAY_GESTURE_POS.0, OVERLAY_GESTURE_POS.1),
            FONT_HERSHEY_SIMPLEX,
            OVERLAY_FONT_SCALE,
            Scalar::new(0.0, 255.0, 0.0, 0.0),
            2,
            LINE_8,
            false,
        )?;

        let letter_text = format!("Libras: {}", self.current_letter());
        imgproc::put_text(
            frame,
            &letter_text,
            Point::new(OVERLAY_LETTER_POS.0, OVERLAY_LETTER_POS.1),
            FONT_HERSHEY_SIMPLEX,
            OVERLAY_FONT_SCALE,
            Scalar::new(0.0, 255.0, 255.0, 0.0),
            2,
            LINE_8,
            false,
        )?;

        Ok(())
    }
}
