//! Constants used throughout the application

/// Number of hand landmarks produced by the detector
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Coordinates per landmark (x, y, z)
pub const LANDMARK_DIMS: usize = 3;

/// Flattened feature vector length (21 landmarks × 3 coordinates)
pub const FEATURE_VECTOR_LEN: usize = NUM_HAND_LANDMARKS * LANDMARK_DIMS;

/// Neighbor count for the letter classifier
pub const KNN_NEIGHBORS: usize = 5;

/// Consecutive identical frames required to confirm a gesture
pub const GESTURE_STABILITY_FRAMES: usize = 3;

/// Consecutive identical frames required to confirm a letter
pub const LETTER_STABILITY_FRAMES: usize = 5;

/// Thumb-tip to index-tip distance below which the pinch ("ok") gesture fires
pub const PINCH_DISTANCE_THRESHOLD: f32 = 0.05;

/// Confirmed gestures below this confidence produce no game commands
pub const COMMAND_CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Default hand presence score required to accept a detection
pub const DEFAULT_DETECTION_CONFIDENCE: f32 = 0.7;

/// Default camera device index
pub const DEFAULT_CAMERA_INDEX: i32 = 0;

/// Overlay text position for the detected gesture (x, y)
pub const OVERLAY_GESTURE_POS: (i32, i32) = (10, 30);

/// Overlay text position for the confirmed letter (x, y)
pub const OVERLAY_LETTER_POS: (i32, i32) = (10, 60);

/// Overlay font scale
pub const OVERLAY_FONT_SCALE: f64 = 0.7;

/// Radius of the landmark dots drawn on the annotated frame
pub const LANDMARK_DOT_RADIUS: i32 = 3;
