//! Stability filter behavior over letter-sized and gesture-sized windows

use libras_sign_input::constants::{GESTURE_STABILITY_FRAMES, LETTER_STABILITY_FRAMES};
use libras_sign_input::gesture::Gesture;
use libras_sign_input::letter_classifier::LetterPrediction;
use libras_sign_input::stability::StabilityFilter;

fn letter(value: &str) -> LetterPrediction {
    LetterPrediction::Letter(value.to_string())
}

#[test]
fn test_five_identical_letters_confirm() {
    let mut filter = StabilityFilter::with_eligibility(LETTER_STABILITY_FRAMES, LetterPrediction::is_letter);

    for i in 0..LETTER_STABILITY_FRAMES {
        let confirmed = filter.observe(letter("A")).cloned();
        if i + 1 < LETTER_STABILITY_FRAMES {
            assert_eq!(confirmed, None, "confirmed too early at frame {i}");
        } else {
            assert_eq!(confirmed, Some(letter("A")));
        }
    }
}

#[test]
fn test_one_dissent_in_five_voids_confirmation() {
    let mut filter = StabilityFilter::with_eligibility(LETTER_STABILITY_FRAMES, LetterPrediction::is_letter);

    for _ in 0..4 {
        filter.observe(letter("A"));
    }
    assert_eq!(filter.observe(letter("B")), None);
    assert_eq!(filter.confirmed(), None);
}

#[test]
fn test_sentinels_never_confirm() {
    let mut filter = StabilityFilter::with_eligibility(LETTER_STABILITY_FRAMES, LetterPrediction::is_letter);

    for _ in 0..LETTER_STABILITY_FRAMES {
        filter.observe(LetterPrediction::ModelNotLoaded);
    }
    assert_eq!(filter.confirmed(), None);

    for _ in 0..LETTER_STABILITY_FRAMES {
        filter.observe(LetterPrediction::FormatError);
    }
    assert_eq!(filter.confirmed(), None);
}

#[test]
fn test_sentinel_run_clears_a_confirmed_letter() {
    let mut filter = StabilityFilter::with_eligibility(LETTER_STABILITY_FRAMES, LetterPrediction::is_letter);

    for _ in 0..LETTER_STABILITY_FRAMES {
        filter.observe(letter("C"));
    }
    assert_eq!(filter.confirmed(), Some(&letter("C")));

    for _ in 0..LETTER_STABILITY_FRAMES {
        filter.observe(LetterPrediction::FormatError);
    }
    assert_eq!(filter.confirmed(), None);
}

#[test]
fn test_gesture_window_confirms_after_three() {
    let mut filter = StabilityFilter::new(GESTURE_STABILITY_FRAMES);

    assert_eq!(filter.observe(Gesture::Fist), None);
    assert_eq!(filter.observe(Gesture::Fist), None);
    assert_eq!(filter.observe(Gesture::Fist), Some(&Gesture::Fist));
}

#[test]
fn test_gesture_switch_needs_fresh_run() {
    let mut filter = StabilityFilter::new(GESTURE_STABILITY_FRAMES);

    for _ in 0..GESTURE_STABILITY_FRAMES {
        filter.observe(Gesture::Point);
    }
    assert_eq!(filter.confirmed(), Some(&Gesture::Point));

    // Switching gestures drops confirmation until a full unanimous run
    assert_eq!(filter.observe(Gesture::Peace), None);
    assert_eq!(filter.observe(Gesture::Peace), None);
    assert_eq!(filter.observe(Gesture::Peace), Some(&Gesture::Peace));
}

#[test]
fn test_absence_decays_gesture_after_full_window() {
    let mut filter = StabilityFilter::new(GESTURE_STABILITY_FRAMES);

    for _ in 0..GESTURE_STABILITY_FRAMES {
        filter.observe(Gesture::OpenHand);
    }
    assert_eq!(filter.confirmed(), Some(&Gesture::OpenHand));

    // "none" observations behave like any other raw value
    filter.observe(Gesture::None);
    assert_eq!(filter.confirmed(), None);
    filter.observe(Gesture::None);
    filter.observe(Gesture::None);
    assert_eq!(filter.confirmed(), Some(&Gesture::None));
}
