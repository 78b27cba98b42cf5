//! Derived mood classification
//!
//! Mood is a pure function of the current stats and the local hour. It is
//! recomputed after every update and never set directly by actions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::state::AvatarState;

/// Display mood for the avatar
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mood {
    Productive,
    #[default]
    Neutral,
    Stressed,
    Tired,
    BurntOut,
    Caffeinated,
    Sleeping,
}

impl Mood {
    /// Classify the current mood. Ordered threshold rules, first match wins.
    pub fn classify(state: &AvatarState, local_hour: u32) -> Mood {
        if !(6..22).contains(&local_hour) {
            Mood::Sleeping
        } else if state.health < 30.0 {
            Mood::BurntOut
        } else if state.energy < 30.0 {
            Mood::Tired
        } else if state.focus < 30.0 {
            Mood::Stressed
        } else if state.coffee > 80 {
            Mood::Caffeinated
        } else if state.motivation > 70.0 {
            Mood::Productive
        } else {
            Mood::Neutral
        }
    }

    /// Emoji shown next to the avatar in the status bar
    pub const fn emoji(&self) -> &'static str {
        match self {
            Mood::Productive => "🚀",
            Mood::Neutral => "🙂",
            Mood::Stressed => "😰",
            Mood::Tired => "🥱",
            Mood::BurntOut => "🔥",
            Mood::Caffeinated => "⚡",
            Mood::Sleeping => "😴",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(energy: f64, motivation: f64, focus: f64, coffee: u32) -> AvatarState {
        let mut state = AvatarState::new(0);
        state.energy = energy;
        state.motivation = motivation;
        state.focus = focus;
        state.coffee = coffee;
        state.recompute_health();
        state
    }

    #[test]
    fn test_sleeping_wins_at_night() {
        let state = state_with(100.0, 100.0, 100.0, 100);
        assert_eq!(Mood::classify(&state, 23), Mood::Sleeping);
        assert_eq!(Mood::classify(&state, 2), Mood::Sleeping);
        assert_eq!(Mood::classify(&state, 5), Mood::Sleeping);
        assert_ne!(Mood::classify(&state, 6), Mood::Sleeping);
        assert_eq!(Mood::classify(&state, 22), Mood::Sleeping);
    }

    #[test]
    fn test_burnt_out_beats_caffeinated() {
        let state = state_with(20.0, 20.0, 20.0, 100);
        assert_eq!(Mood::classify(&state, 12), Mood::BurntOut);
    }

    #[test]
    fn test_threshold_ladder() {
        // Low energy but healthy overall
        assert_eq!(Mood::classify(&state_with(25.0, 90.0, 90.0, 0), 12), Mood::Tired);
        // Low focus, energy fine
        assert_eq!(Mood::classify(&state_with(80.0, 80.0, 20.0, 0), 12), Mood::Stressed);
        // High coffee
        assert_eq!(Mood::classify(&state_with(80.0, 60.0, 80.0, 81), 12), Mood::Caffeinated);
        // High motivation
        assert_eq!(Mood::classify(&state_with(80.0, 75.0, 80.0, 0), 12), Mood::Productive);
        // Nothing special
        assert_eq!(Mood::classify(&state_with(60.0, 60.0, 60.0, 0), 12), Mood::Neutral);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Mood::BurntOut.to_string(), "burnt-out");
        assert_eq!(Mood::Caffeinated.to_string(), "caffeinated");
    }
}
