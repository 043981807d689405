//! Discrete game commands derived from the confirmed gesture and letter.

use crate::constants::COMMAND_CONFIDENCE_THRESHOLD;
use crate::gesture::Gesture;

/// One snapshot of the command surface exposed to the host game.
///
/// Rebuilt from scratch on every read; a boolean is only raised while the
/// mapped gesture stays confirmed above the confidence threshold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameCommands {
    /// Advance the current dialogue line (point)
    pub advance_dialogue: bool,
    /// Skip the text crawl (fist)
    pub skip_text: bool,
    /// Open the menu (open hand)
    pub menu: bool,
    /// Confirm the highlighted option (ok/pinch)
    pub confirm: bool,
    /// Cancel / back out (peace)
    pub cancel: bool,
    /// Walk left in the platformer
    pub move_left: bool,
    /// Walk right in the platformer
    pub move_right: bool,
    /// Jump (fist)
    pub jump: bool,
    /// Interact with the focused object (point)
    pub interact: bool,
    /// Currently confirmed Libras letter, empty when none
    pub libras_letter: String,
}

impl GameCommands {
    /// Build a snapshot from the confirmed gesture, its confidence and the
    /// confirmed letter.
    ///
    /// The confidence gate is strict (> 0.6) and independent of the
    /// stability filter's unanimity requirement.
    #[must_use]
    pub fn from_state(gesture: Gesture, confidence: f32, letter: &str) -> Self {
        let mut commands = Self {
            libras_letter: letter.to_string(),
            ..Self::default()
        };

        if confidence > COMMAND_CONFIDENCE_THRESHOLD {
            match gesture {
                Gesture::Point => {
                    commands.advance_dialogue = true;
                    commands.interact = true;
                }
                Gesture::Fist => {
                    commands.skip_text = true;
                    commands.jump = true;
                }
                Gesture::OpenHand => commands.menu = true,
                Gesture::Ok => commands.confirm = true,
                Gesture::Peace => commands.cancel = true,
                Gesture::None | Gesture::Three | Gesture::Unknown => {}
            }
        }

        commands
    }

    /// True when any gesture-derived boolean is raised
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.advance_dialogue
            || self.skip_text
            || self.menu
            || self.confirm
            || self.cancel
            || self.move_left
            || self.move_right
            || self.jump
            || self.interact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fist_maps_to_skip_and_jump() {
        let commands = GameCommands::from_state(Gesture::Fist, 0.7, "");
        assert!(commands.skip_text);
        assert!(commands.jump);
        assert!(!commands.advance_dialogue);
        assert!(!commands.menu);
        assert!(!commands.confirm);
        assert!(!commands.cancel);
        assert!(!commands.interact);
    }

    #[test]
    fn test_point_maps_to_dialogue_and_interact() {
        let commands = GameCommands::from_state(Gesture::Point, 0.8, "");
        assert!(commands.advance_dialogue);
        assert!(commands.interact);
        assert!(!commands.skip_text);
    }

    #[test]
    fn test_single_command_gestures() {
        assert!(GameCommands::from_state(Gesture::OpenHand, 0.7, "").menu);
        assert!(GameCommands::from_state(Gesture::Ok, 0.9, "").confirm);
        assert!(GameCommands::from_state(Gesture::Peace, 0.8, "").cancel);
    }

    #[test]
    fn test_boundary_confidence_is_inactive() {
        // Exactly 0.6 fails the strict inequality
        let commands = GameCommands::from_state(Gesture::Fist, 0.6, "");
        assert!(!commands.any_active());
    }

    #[test]
    fn test_low_confidence_is_inactive() {
        let commands = GameCommands::from_state(Gesture::Point, 0.5, "X");
        assert!(!commands.any_active());
        // The letter field is independent of the gesture gate
        assert_eq!(commands.libras_letter, "X");
    }

    #[test]
    fn test_unmapped_gestures_produce_nothing() {
        assert!(!GameCommands::from_state(Gesture::Three, 0.7, "").any_active());
        assert!(!GameCommands::from_state(Gesture::Unknown, 0.9, "").any_active());
        assert!(!GameCommands::from_state(Gesture::None, 1.0, "").any_active());
    }

    #[test]
    fn test_letter_always_carried() {
        let commands = GameCommands::from_state(Gesture::None, 0.0, "B");
        assert_eq!(commands.libras_letter, "B");
    }
}
