//! Hand gesture and Libras letter recognition for game input.
//!
//! This library turns webcam frames into discrete game commands using:
//! - ONNX Runtime for hand landmark inference
//! - `OpenCV` for capture, image operations and the preview window
//! - A k-nearest-neighbors classifier for Libras alphabet letters
//! - Sliding-window stability filters to debounce noisy per-frame output
//!
//! The recognition pipeline per frame:
//! 1. Mirror the captured frame so it matches the user's physical left/right
//! 2. Detect one hand as 21 normalized 3D landmarks
//! 3. Classify a coarse gesture from finger geometry and a letter from the
//!    flattened landmark vector
//! 4. Debounce both through unanimous sliding windows
//! 5. Expose the confirmed state as a fixed-shape command snapshot
//!
//! # Examples
//!
//! ## Driving a session with your own frames
//!
//! ```no_run
//! use libras_sign_input::{
//!     hand_detection::HandDetector, letter_classifier::LetterClassifier,
//!     session::RecognitionSession,
//! };
//! use opencv::{videoio::{self, VideoCapture}, core::Mat, prelude::*};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = HandDetector::new("assets/hand_landmarks.onnx")?;
//! let classifier = LetterClassifier::load("libras_dataset.csv");
//! let mut session = RecognitionSession::new(Box::new(detector), classifier);
//!
//! let mut cap = VideoCapture::new(0, videoio::CAP_ANY)?;
//! let mut frame = Mat::default();
//! while cap.read(&mut frame)? {
//!     session.process(&frame)?;
//!
//!     let commands = session.commands();
//!     if commands.jump {
//!         println!("jump!");
//!     }
//!     if !commands.libras_letter.is_empty() {
//!         println!("letter: {}", commands.libras_letter);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Classifying letters directly
//!
//! ```no_run
//! use libras_sign_input::letter_classifier::{LetterClassifier, LetterPrediction};
//!
//! let classifier = LetterClassifier::load("libras_dataset.csv");
//!
//! let features = vec![0.5f32; 63];
//! match classifier.predict(&features) {
//!     LetterPrediction::Letter(letter) => println!("predicted {letter}"),
//!     LetterPrediction::ModelNotLoaded => println!("no dataset"),
//!     LetterPrediction::FormatError => println!("bad feature vector"),
//! }
//! ```

/// Hand landmark data model (21 normalized 3D keypoints)
pub mod landmarks;

/// Hand landmark detection via `ONNX` Runtime
pub mod hand_detection;

/// Geometric gesture classification from landmarks
pub mod gesture;

/// Libras letter classifier (standard scaler + k-nearest-neighbors)
pub mod letter_classifier;

/// Sliding-window debouncers for noisy classifications
pub mod stability;

/// Game command snapshot derived from confirmed state
pub mod commands;

/// Per-frame recognition orchestrator
pub mod session;

/// Webcam capture with non-blocking poll semantics
pub mod capture;

/// Preview window for the annotated camera feed
pub mod display;

/// Main application module
pub mod app;

/// Configuration management
pub mod config;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

pub use error::{Error, Result};
