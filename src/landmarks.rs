//! Hand landmark data model.
//!
//! A detected hand is an ordered set of 21 normalized 3D keypoints in the
//! canonical MediaPipe hand order. The flattened (x, y, z) * 21 layout is the
//! feature vector consumed by the letter classifier and MUST match the column
//! order of the training dataset.

use crate::constants::{FEATURE_VECTOR_LEN, LANDMARK_DIMS};
use crate::{Error, Result};

pub use crate::constants::NUM_HAND_LANDMARKS;

/// Wrist landmark index
pub const WRIST: usize = 0;
/// Thumb interphalangeal joint
pub const THUMB_IP: usize = 3;
/// Thumb tip
pub const THUMB_TIP: usize = 4;
/// Index finger proximal interphalangeal joint
pub const INDEX_PIP: usize = 6;
/// Index finger tip
pub const INDEX_TIP: usize = 8;
/// Middle finger proximal interphalangeal joint
pub const MIDDLE_PIP: usize = 10;
/// Middle finger tip
pub const MIDDLE_TIP: usize = 12;
/// Ring finger proximal interphalangeal joint
pub const RING_PIP: usize = 14;
/// Ring finger tip
pub const RING_TIP: usize = 16;
/// Pinky proximal interphalangeal joint
pub const PINKY_PIP: usize = 18;
/// Pinky tip
pub const PINKY_TIP: usize = 20;

/// A single hand keypoint in normalized image coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    /// Horizontal position, roughly [0, 1]
    pub x: f32,
    /// Vertical position, roughly [0, 1] (smaller is higher in the image)
    pub y: f32,
    /// Depth relative to the wrist
    pub z: f32,
}

impl Landmark {
    /// Create a landmark from normalized coordinates
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// 2D Euclidean distance to another landmark (x/y only)
    #[must_use]
    pub fn distance_2d(&self, other: &Landmark) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One detected hand: exactly 21 landmarks in canonical order
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; NUM_HAND_LANDMARKS],
}

impl HandLandmarks {
    /// Create from an ordered array of 21 landmarks
    #[must_use]
    pub fn new(points: [Landmark; NUM_HAND_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Reconstruct from a flattened feature vector of 63 values
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the slice length is not 63.
    pub fn from_flat(values: &[f32]) -> Result<Self> {
        if values.len() != FEATURE_VECTOR_LEN {
            return Err(Error::InvalidInput(format!(
                "Expected {} values, got {}",
                FEATURE_VECTOR_LEN,
                values.len()
            )));
        }

        let mut points = [Landmark::default(); NUM_HAND_LANDMARKS];
        for (i, point) in points.iter_mut().enumerate() {
            let base = i * LANDMARK_DIMS;
            *point = Landmark::new(values[base], values[base + 1], values[base + 2]);
        }
        Ok(Self { points })
    }

    /// Landmark at a canonical index
    #[must_use]
    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// All landmarks in canonical order
    #[must_use]
    pub fn points(&self) -> &[Landmark; NUM_HAND_LANDMARKS] {
        &self.points
    }

    /// Flatten into the 63-value feature vector expected by the classifier
    #[must_use]
    pub fn flatten(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(FEATURE_VECTOR_LEN);
        for point in &self.points {
            flat.push(point.x);
            flat.push(point.y);
            flat.push(point.z);
        }
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_round_trip() {
        let mut points = [Landmark::default(); NUM_HAND_LANDMARKS];
        for (i, point) in points.iter_mut().enumerate() {
            *point = Landmark::new(i as f32, i as f32 + 0.5, -(i as f32));
        }
        let hand = HandLandmarks::new(points);

        let flat = hand.flatten();
        assert_eq!(flat.len(), FEATURE_VECTOR_LEN);

        let rebuilt = HandLandmarks::from_flat(&flat).unwrap();
        assert_eq!(rebuilt, hand);
    }

    #[test]
    fn test_from_flat_rejects_wrong_length() {
        assert!(HandLandmarks::from_flat(&[0.0; 62]).is_err());
        assert!(HandLandmarks::from_flat(&[0.0; 64]).is_err());
        assert!(HandLandmarks::from_flat(&[]).is_err());
    }

    #[test]
    fn test_flatten_order_is_xyz_per_landmark() {
        let mut points = [Landmark::default(); NUM_HAND_LANDMARKS];
        points[1] = Landmark::new(0.1, 0.2, 0.3);
        let hand = HandLandmarks::new(points);

        let flat = hand.flatten();
        assert_eq!(flat[3], 0.1);
        assert_eq!(flat[4], 0.2);
        assert_eq!(flat[5], 0.3);
    }

    #[test]
    fn test_distance_2d_ignores_z() {
        let a = Landmark::new(0.0, 0.0, 5.0);
        let b = Landmark::new(3.0, 4.0, -5.0);
        assert!((a.distance_2d(&b) - 5.0).abs() < 1e-6);
    }
}
