//! Geometric gesture detection from hand landmarks.
//!
//! A deliberately coarse heuristic over finger geometry, not a learned model.
//! Rules are evaluated in a fixed priority order and ties are broken by that
//! order, not by confidence.

use crate::constants::PINCH_DISTANCE_THRESHOLD;
use crate::landmarks::{
    HandLandmarks, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP, THUMB_IP, THUMB_TIP,
};
use std::fmt;

/// Coarse hand pose classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gesture {
    /// No hand detected
    #[default]
    None,
    /// All fingers curled
    Fist,
    /// Four or more fingers extended
    OpenHand,
    /// Only the index finger extended
    Point,
    /// Index and middle fingers extended
    Peace,
    /// Thumb tip touching index tip
    Ok,
    /// Thumb, index and middle extended
    Three,
    /// Hand present but no rule matched
    Unknown,
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gesture::None => "none",
            Gesture::Fist => "fist",
            Gesture::OpenHand => "open_hand",
            Gesture::Point => "point",
            Gesture::Peace => "peace",
            Gesture::Ok => "ok",
            Gesture::Three => "three",
            Gesture::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Per-finger extension flags: [thumb, index, middle, ring, pinky]
///
/// Thumb counts as extended when its tip sits past the IP joint horizontally
/// (the frame is mirrored before detection, so this reads naturally for a
/// right hand facing the camera). The other fingers count as extended when
/// the tip is above the PIP joint in image space.
#[must_use]
pub fn extended_fingers(hand: &HandLandmarks) -> [bool; 5] {
    let thumb = hand.point(THUMB_TIP).x > hand.point(THUMB_IP).x;

    let finger = |tip: usize, pip: usize| hand.point(tip).y < hand.point(pip).y;

    [
        thumb,
        finger(INDEX_TIP, INDEX_PIP),
        finger(MIDDLE_TIP, MIDDLE_PIP),
        finger(RING_TIP, RING_PIP),
        finger(PINKY_TIP, PINKY_PIP),
    ]
}

/// Classify a hand pose with a heuristic confidence score.
///
/// Pure function: identical landmarks always yield the identical result.
/// The pinch check runs before any finger-count rule.
#[must_use]
pub fn detect(hand: &HandLandmarks) -> (Gesture, f32) {
    let pinch_distance = hand.point(THUMB_TIP).distance_2d(&hand.point(INDEX_TIP));
    if pinch_distance < PINCH_DISTANCE_THRESHOLD {
        return (Gesture::Ok, 0.9);
    }

    let fingers = extended_fingers(hand);
    let raised = fingers.iter().filter(|&&up| up).count();

    match fingers {
        [false, true, false, false, false] => (Gesture::Point, 0.8),
        [false, true, true, false, false] => (Gesture::Peace, 0.8),
        _ if raised == 0 => (Gesture::Fist, 0.7),
        _ if raised >= 4 => (Gesture::OpenHand, 0.7),
        [true, true, true, false, false] => (Gesture::Three, 0.7),
        _ => (Gesture::Unknown, 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{Landmark, NUM_HAND_LANDMARKS};

    /// Build a hand with the requested finger pattern. Pinch moves the thumb
    /// tip onto the index tip regardless of the pattern.
    fn hand(fingers: [bool; 5], pinch: bool) -> HandLandmarks {
        let mut points = [Landmark::new(0.5, 0.5, 0.0); NUM_HAND_LANDMARKS];

        points[THUMB_IP] = Landmark::new(0.40, 0.50, 0.0);
        points[THUMB_TIP] = if fingers[0] {
            Landmark::new(0.45, 0.50, 0.0)
        } else {
            Landmark::new(0.35, 0.50, 0.0)
        };

        let pairs = [
            (INDEX_TIP, INDEX_PIP),
            (MIDDLE_TIP, MIDDLE_PIP),
            (RING_TIP, RING_PIP),
            (PINKY_TIP, PINKY_PIP),
        ];
        for (i, &(tip, pip)) in pairs.iter().enumerate() {
            let x = 0.55 + 0.08 * i as f32;
            points[pip] = Landmark::new(x, 0.40, 0.0);
            points[tip] = if fingers[i + 1] {
                Landmark::new(x, 0.30, 0.0)
            } else {
                Landmark::new(x, 0.50, 0.0)
            };
        }

        if pinch {
            let index_tip = points[INDEX_TIP];
            points[THUMB_TIP] = Landmark::new(index_tip.x + 0.01, index_tip.y + 0.01, 0.0);
        }

        HandLandmarks::new(points)
    }

    #[test]
    fn test_point_gesture() {
        let (gesture, confidence) = detect(&hand([false, true, false, false, false], false));
        assert_eq!(gesture, Gesture::Point);
        assert!((confidence - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_peace_gesture() {
        let (gesture, confidence) = detect(&hand([false, true, true, false, false], false));
        assert_eq!(gesture, Gesture::Peace);
        assert!((confidence - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fist_gesture() {
        let (gesture, confidence) = detect(&hand([false; 5], false));
        assert_eq!(gesture, Gesture::Fist);
        assert!((confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_open_hand_with_four_fingers() {
        let (gesture, _) = detect(&hand([false, true, true, true, true], false));
        assert_eq!(gesture, Gesture::OpenHand);
    }

    #[test]
    fn test_open_hand_with_five_fingers() {
        let (gesture, _) = detect(&hand([true; 5], false));
        assert_eq!(gesture, Gesture::OpenHand);
    }

    #[test]
    fn test_three_gesture() {
        let (gesture, confidence) = detect(&hand([true, true, true, false, false], false));
        assert_eq!(gesture, Gesture::Three);
        assert!((confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unmatched_pattern_is_unknown() {
        let (gesture, confidence) = detect(&hand([false, false, true, false, false], false));
        assert_eq!(gesture, Gesture::Unknown);
        assert!((confidence - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pinch_wins_over_finger_patterns() {
        // Even a point-shaped hand reads as "ok" when thumb and index touch
        let (gesture, confidence) = detect(&hand([false, true, false, false, false], true));
        assert_eq!(gesture, Gesture::Ok);
        assert!((confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let sample = hand([false, true, true, false, false], false);
        let first = detect(&sample);
        for _ in 0..10 {
            assert_eq!(detect(&sample), first);
        }
    }

    #[test]
    fn test_gesture_display_names() {
        assert_eq!(Gesture::OpenHand.to_string(), "open_hand");
        assert_eq!(Gesture::None.to_string(), "none");
        assert_eq!(Gesture::Ok.to_string(), "ok");
    }
}
