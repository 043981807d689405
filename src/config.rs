//! Configuration management for the recognition application

use crate::constants::{
    DEFAULT_CAMERA_INDEX, DEFAULT_DETECTION_CONFIDENCE, GESTURE_STABILITY_FRAMES, LETTER_STABILITY_FRAMES,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Camera configuration
    pub camera: CameraConfig,

    /// Model and dataset paths
    pub models: ModelConfig,

    /// Hand detection parameters
    pub detection: DetectionConfig,

    /// Stability filter windows
    pub stability: StabilityConfig,

    /// Display configuration
    pub display: DisplayConfig,
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Logical device index
    pub index: i32,

    /// Mirror frames horizontally so the preview matches the user
    pub mirror: bool,
}

/// Model and dataset file paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the hand landmark ONNX model
    pub hand_landmarks: PathBuf,

    /// Path to the Libras letter training dataset (CSV)
    pub dataset: PathBuf,
}

/// Hand detection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Hand presence score required to accept a detection (0.0-1.0)
    pub min_confidence: f32,
}

/// Stability filter windows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityConfig {
    /// Consecutive identical frames required to confirm a gesture
    pub gesture_window: usize,

    /// Consecutive identical frames required to confirm a letter
    pub letter_window: usize,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the preview window
    pub preview: bool,

    /// Preview window title
    pub window_name: String,

    /// Preview window width
    pub window_width: i32,

    /// Preview window height
    pub window_height: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            models: ModelConfig::default(),
            detection: DetectionConfig::default(),
            stability: StabilityConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: DEFAULT_CAMERA_INDEX,
            mirror: true,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            hand_landmarks: PathBuf::from("assets/hand_landmarks.onnx"),
            dataset: PathBuf::from("libras_dataset.csv"),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_DETECTION_CONFIDENCE,
        }
    }
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            gesture_window: GESTURE_STABILITY_FRAMES,
            letter_window: LETTER_STABILITY_FRAMES,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview: true,
            window_name: "Libras Sign Input".to_string(),
            window_width: 640,
            window_height: 480,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.camera.index < 0 {
            return Err(Error::Config("Camera index must not be negative".to_string()));
        }
        if !(0.0..=1.0).contains(&self.detection.min_confidence) {
            return Err(Error::Config(
                "Detection confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.stability.gesture_window == 0 || self.stability.letter_window == 0 {
            return Err(Error::Config(
                "Stability windows must be greater than 0".to_string(),
            ));
        }
        if self.display.window_width <= 0 || self.display.window_height <= 0 {
            return Err(Error::Config("Window dimensions must be positive".to_string()));
        }
        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Libras Sign Input Configuration

# Camera
camera:
  index: 0
  mirror: true

# Model and dataset paths
models:
  hand_landmarks: "assets/hand_landmarks.onnx"
  dataset: "libras_dataset.csv"

# Hand detection
detection:
  min_confidence: 0.7

# Stability filters
stability:
  gesture_window: 3
  letter_window: 5

# Display
display:
  preview: true
  window_name: "Libras Sign Input"
  window_width: 640
  window_height: 480
"#;
