//! Hand landmark detection using `ONNX` Runtime.
//!
//! Wraps a single-hand landmark model (MediaPipe hand-landmark style): the
//! model takes one RGB image and outputs 21 keypoints plus a hand-presence
//! score. At most one hand is reported per frame.

use crate::constants::{DEFAULT_DETECTION_CONFIDENCE, FEATURE_VECTOR_LEN, LANDMARK_DIMS, NUM_HAND_LANDMARKS};
use crate::landmarks::{HandLandmarks, Landmark};
use crate::{Error, Result};
use ndarray::{Array1, Array4, CowArray};
use opencv::core::{Mat, Size, CV_32F};
use opencv::imgproc::{self, InterpolationFlags};
use opencv::prelude::*;
use ort::{Environment, Session, Value};
use std::path::Path;
use std::sync::Arc;

/// Default landmark model input size
const DEFAULT_HAND_INPUT_SIZE: i32 = 224;

/// Source of per-frame hand landmarks.
///
/// The session talks to the detector only through this trait so tests can
/// inject a scripted provider.
pub trait LandmarkProvider: Send {
    /// Detect zero-or-one hands in a BGR frame.
    ///
    /// # Errors
    ///
    /// Returns an error if preprocessing or inference fails. An undetected
    /// hand is `Ok(None)`, not an error.
    fn detect(&mut self, frame: &Mat) -> Result<Option<HandLandmarks>>;
}

/// Hand landmark detector using `ONNX` Runtime
pub struct HandDetector {
    session: Session,
    input_size: i32,
    min_confidence: f32,
}

impl HandDetector {
    /// Create a detector from an `ONNX` model file with the default presence
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file cannot be loaded or the runtime
    /// environment cannot be created.
    pub fn new<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        Self::with_confidence(model_path, DEFAULT_DETECTION_CONFIDENCE)
    }

    /// Create a detector with an explicit hand-presence threshold
    ///
    /// # Errors
    ///
    /// Returns an error if the model file cannot be loaded or the runtime
    /// environment cannot be created.
    pub fn with_confidence<P: AsRef<Path>>(model_path: P, min_confidence: f32) -> Result<Self> {
        log::info!(
            "Initializing HandDetector with model: {}",
            model_path.as_ref().display()
        );
        let environment = Arc::new(
            Environment::builder()
                .with_name("hand_detector")
                .with_log_level(ort::LoggingLevel::Warning)
                .build()?,
        );

        let session = ort::SessionBuilder::new(&environment)?
            .with_optimization_level(ort::GraphOptimizationLevel::Level3)?
            .with_model_from_file(model_path)?;

        if session.inputs.is_empty() {
            return Err(Error::Model("Model has no inputs".to_string()));
        }
        if session.outputs.len() < 2 {
            return Err(Error::Model(
                "Expected landmark and presence outputs".to_string(),
            ));
        }

        Ok(Self {
            session,
            input_size: DEFAULT_HAND_INPUT_SIZE,
            min_confidence,
        })
    }

    /// Preprocess a BGR frame into the model input tensor
    #[allow(clippy::cast_sign_loss)] // OpenCV dimensions are positive
    fn preprocess(&self, frame: &Mat) -> Result<Array4<f32>> {
        let size = self.input_size as usize;
        let channels = 3;

        let mut resized = Mat::default();
        imgproc::resize(
            frame,
            &mut resized,
            Size::new(self.input_size, self.input_size),
            0.0,
            0.0,
            InterpolationFlags::INTER_LINEAR as i32,
        )?;

        let mut rgb_image = Mat::default();
        imgproc::cvt_color(&resized, &mut rgb_image, imgproc::COLOR_BGR2RGB, 0)?;

        let mut float_image = Mat::default();
        rgb_image.convert_to(&mut float_image, CV_32F, 1.0 / 255.0, 0.0)?;

        let mut data = vec![0.0f32; size * size * channels];
        for row in 0..self.input_size {
            for col in 0..self.input_size {
                let pixel = float_image.at_2d::<opencv::core::Vec3f>(row, col)?;
                let base = ((row as usize) * size + col as usize) * channels;
                for ch in 0..channels {
                    data[base + ch] = pixel[ch];
                }
            }
        }

        // The converted MediaPipe model expects NHWC
        Array4::from_shape_vec((1, size, size, channels), data)
            .map_err(|e| Error::ModelOutput(format!("Failed to create input array: {e}")))
    }

    /// Run inference; returns the raw landmark coordinates and presence score
    fn forward(&self, input: Array4<f32>) -> Result<(Array1<f32>, f32)> {
        let cow_array = CowArray::from(input.into_dyn());
        let input_tensor = Value::from_array(self.session.allocator(), &cow_array)?;

        let outputs = self.session.run(vec![input_tensor])?;
        let mut outputs = outputs.into_iter();

        let landmarks_output = outputs
            .next()
            .ok_or_else(|| Error::ModelOutput("No landmark output".to_string()))?;
        let landmarks_tensor = landmarks_output.try_extract::<f32>()?;
        let landmarks_view = landmarks_tensor.view();
        let coords = landmarks_view
            .as_slice()
            .ok_or_else(|| Error::ModelOutput("Failed to read landmark output".to_string()))?;
        if coords.len() < FEATURE_VECTOR_LEN {
            return Err(Error::ModelOutput(format!(
                "Expected {} coordinates, got {}",
                FEATURE_VECTOR_LEN,
                coords.len()
            )));
        }

        let score_output = outputs
            .next()
            .ok_or_else(|| Error::ModelOutput("No presence output".to_string()))?;
        let score_tensor = score_output.try_extract::<f32>()?;
        let score_view = score_tensor.view();
        let score = score_view
            .as_slice()
            .and_then(<[f32]>::first)
            .copied()
            .ok_or_else(|| Error::ModelOutput("Failed to read presence output".to_string()))?;

        Ok((Array1::from(coords[..FEATURE_VECTOR_LEN].to_vec()), score))
    }

    /// Convert raw model coordinates (input-pixel scale) into normalized
    /// landmarks
    #[allow(clippy::cast_precision_loss)] // Precision loss acceptable for pixel coordinates
    fn postprocess(&self, coords: &Array1<f32>) -> HandLandmarks {
        let scale = self.input_size as f32;
        let mut points = [Landmark::default(); NUM_HAND_LANDMARKS];
        for (i, point) in points.iter_mut().enumerate() {
            let base = i * LANDMARK_DIMS;
            *point = Landmark::new(coords[base] / scale, coords[base + 1] / scale, coords[base + 2] / scale);
        }
        HandLandmarks::new(points)
    }
}

impl LandmarkProvider for HandDetector {
    fn detect(&mut self, frame: &Mat) -> Result<Option<HandLandmarks>> {
        let input = self.preprocess(frame)?;
        let (coords, score) = self.forward(input)?;

        if score < self.min_confidence {
            return Ok(None);
        }

        Ok(Some(self.postprocess(&coords)))
    }
}
