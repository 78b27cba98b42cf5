//! XP and leveling
//!
//! Every raw reward passes through the momentum bonus before it lands:
//! well-kept stats multiply all progression, which is the central feedback
//! loop of the game.

use crate::state::AvatarState;

impl AvatarState {
    /// XP needed to advance from `level` to `level + 1`
    pub const fn level_threshold(level: u32) -> u32 {
        level * 100
    }

    /// Apply a raw XP reward and return the new level if it changed.
    ///
    /// `gained = floor(raw * (1 + energy/100) * (1 + focus/100) * (1 + motivation/100))`
    /// — triple rewards at full stats, unmultiplied at zero. Supports
    /// multi-level jumps from one large reward; level has no maximum.
    pub fn gain_xp(&mut self, raw: f64) -> Option<u32> {
        let gained = (raw
            * (1.0 + self.energy / 100.0)
            * (1.0 + self.focus / 100.0)
            * (1.0 + self.motivation / 100.0))
            .floor() as u32;
        // The cast already saturates; the add must too
        self.xp = self.xp.saturating_add(gained);

        let mut leveled = false;
        while self.xp >= Self::level_threshold(self.level) {
            self.xp -= Self::level_threshold(self.level);
            self.level += 1;
            leveled = true;
        }
        if leveled { Some(self.level) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_stats(energy: f64, motivation: f64, focus: f64) -> AvatarState {
        let mut state = AvatarState::new(0);
        state.energy = energy;
        state.motivation = motivation;
        state.focus = focus;
        state
    }

    #[test]
    fn test_momentum_triples_at_full_stats() {
        let mut state = state_with_stats(100.0, 100.0, 100.0);
        assert_eq!(state.gain_xp(10.0), None);
        assert_eq!(state.xp, 80); // 10 * 2 * 2 * 2
    }

    #[test]
    fn test_momentum_unmultiplied_at_zero_stats() {
        let mut state = state_with_stats(0.0, 0.0, 0.0);
        state.gain_xp(10.0);
        assert_eq!(state.xp, 10);
    }

    #[test]
    fn test_single_level_up() {
        let mut state = state_with_stats(0.0, 0.0, 0.0);
        state.xp = 95;
        assert_eq!(state.gain_xp(10.0), Some(2));
        assert_eq!(state.level, 2);
        assert_eq!(state.xp, 5);
    }

    #[test]
    fn test_multi_level_jump() {
        let mut state = state_with_stats(0.0, 0.0, 0.0);
        // 579 raw at zero stats: 100 (L1) + 200 (L2) + 279 left over
        assert_eq!(state.gain_xp(579.0), Some(3));
        assert_eq!(state.level, 3);
        assert_eq!(state.xp, 279);
    }

    #[test]
    fn test_extreme_reward_saturates() {
        let mut state = state_with_stats(100.0, 100.0, 100.0);
        state.xp = 50;
        state.gain_xp(f64::MAX);
        assert!(state.xp < AvatarState::level_threshold(state.level));

        // A second extreme reward on an already-huge total must not wrap
        state.gain_xp(f64::MAX);
        assert!(state.xp < AvatarState::level_threshold(state.level));
    }

    #[test]
    fn test_normalization_invariant() {
        let mut state = state_with_stats(100.0, 100.0, 100.0);
        for raw in [1.0, 7.0, 50.0, 333.0, 9999.0] {
            state.gain_xp(raw);
            assert!(state.xp < AvatarState::level_threshold(state.level));
        }
    }
}
