//! Main application module: wires camera, session and preview together.

use crate::capture::Camera;
use crate::config::Config;
use crate::display::PreviewWindow;
use crate::hand_detection::HandDetector;
use crate::letter_classifier::LetterClassifier;
use crate::session::RecognitionSession;
use crate::Result;
use log::{debug, info, warn};

/// Main application struct
pub struct App {
    camera: Camera,
    session: RecognitionSession,
    preview: Option<PreviewWindow>,
}

impl App {
    /// Build the application from a validated configuration.
    ///
    /// An unavailable camera is fatal here; a missing dataset only degrades
    /// letter recognition.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera cannot be opened, the landmark model
    /// fails to load, or the preview window cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        info!("Initializing Libras sign input");
        config.validate()?;

        let camera = Camera::open(config.camera.index)?;

        let detector = HandDetector::with_confidence(&config.models.hand_landmarks, config.detection.min_confidence)?;
        let classifier = LetterClassifier::load(&config.models.dataset);
        if !classifier.is_loaded() {
            warn!("Running without letter recognition");
        }

        let mut session = RecognitionSession::with_windows(
            Box::new(detector),
            classifier,
            config.stability.gesture_window,
            config.stability.letter_window,
        );
        session.set_mirror(config.camera.mirror);

        let preview = if config.display.preview {
            Some(PreviewWindow::new(
                &config.display.window_name,
                config.display.window_width,
                config.display.window_height,
            )?)
        } else {
            None
        };

        Ok(Self {
            camera,
            session,
            preview,
        })
    }

    /// Run the capture/process/display loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the GUI event loop fails; per-frame recognition
    /// errors are logged and skipped.
    pub fn run(&mut self) -> Result<()> {
        info!("Entering main loop");

        let mut last_commands = self.session.commands();
        loop {
            // An absent frame is an empty tick, not an error
            let Some(frame) = self.read_frame() else {
                if let Some(preview) = &self.preview {
                    if Self::is_quit_key(preview.poll_key()?) {
                        break;
                    }
                }
                continue;
            };

            if let Err(e) = self.session.process(&frame) {
                warn!("Frame processing failed, skipping tick: {e}");
            }

            let commands = self.session.commands();
            if commands != last_commands {
                let (gesture, confidence) = self.session.gesture_info();
                debug!(
                    "Commands changed: gesture={gesture} ({confidence:.2}), letter='{}'",
                    commands.libras_letter
                );
                last_commands = commands;
            }

            if let Some(preview) = &mut self.preview {
                if let Some(annotated) = self.session.frame()? {
                    preview.show(&annotated)?;
                }

                let key = preview.poll_key()?;
                if Self::is_quit_key(key) {
                    info!("Exit requested by user");
                    break;
                }
                if key == i32::from(b'd') {
                    preview.toggle();
                }
            }
        }

        self.shutdown()
    }

    /// Release camera and GUI resources
    ///
    /// # Errors
    ///
    /// Returns an error if the camera refuses to release.
    pub fn shutdown(&mut self) -> Result<()> {
        info!("Shutting down");
        self.camera.release()
    }

    fn read_frame(&mut self) -> Option<opencv::core::Mat> {
        match self.camera.read() {
            Ok(frame) => frame,
            Err(e) => {
                warn!("Camera read failed: {e}");
                None
            }
        }
    }

    fn is_quit_key(key: i32) -> bool {
        key == 27 || key == i32::from(b'q')
    }
}
