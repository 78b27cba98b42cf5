//! Engine-wide invariants checked over arbitrary operation sequences.

use std::rc::Rc;

use proptest::prelude::*;

use dp_core::{AvatarState, Engine, GameRng, ManualClock, MemoryStore};

const T0: i64 = 1_700_000_000_000;

proptest! {
    #[test]
    fn invariants_hold_after_any_operation_sequence(
        ops in prop::collection::vec(0u8..8, 0..60),
        seed in any::<u64>(),
    ) {
        let clock = Rc::new(ManualClock::new(T0, 12));
        let mut engine = Engine::new(MemoryStore::new(), Rc::clone(&clock), GameRng::new(seed));

        let mut max_level = 1;
        let mut skills_seen = 0;
        let mut items_seen = 0;

        for op in ops {
            match op {
                0 => { engine.give_coffee(); }
                1 => { engine.take_break(); }
                2 => { engine.on_code_saved(); }
                3 => { engine.on_git_commit(); }
                4 => { engine.challenge_completed(250); }
                5 => { engine.update_error_count(3); }
                6 => { engine.update_error_count(0); }
                7 => {
                    clock.advance_ms(10 * 60 * 1000);
                    engine.tick();
                }
                _ => unreachable!(),
            }

            let s = engine.snapshot();
            for value in [s.energy, s.motivation, s.focus, s.health] {
                prop_assert!((0.0..=100.0).contains(&value));
            }
            prop_assert_eq!(s.health, (s.energy + s.motivation + s.focus) / 3.0);
            prop_assert!(s.xp < AvatarState::level_threshold(s.level));
            prop_assert!(s.level >= max_level);
            max_level = s.level;
            prop_assert!(s.skills.len() >= skills_seen);
            skills_seen = s.skills.len();
            prop_assert!(s.inventory.len() >= items_seen);
            items_seen = s.inventory.len();
        }
    }

    #[test]
    fn decay_never_raises_a_stat(hours in 0u32..2000) {
        let clock = Rc::new(ManualClock::new(T0, 12));
        let mut state = AvatarState::new(T0);
        state.last_daily_bonus = T0;
        let store = MemoryStore::with_blob(state.to_blob().unwrap());
        let mut engine = Engine::new(store, Rc::clone(&clock), GameRng::new(1));

        let before = engine.snapshot();
        clock.advance_ms(i64::from(hours) * 3_600_000);
        engine.tick();
        let after = engine.snapshot();

        prop_assert!(after.energy <= before.energy);
        prop_assert!(after.motivation <= before.motivation);
        prop_assert!(after.focus <= before.focus);
        prop_assert!(after.energy >= 0.0);
        prop_assert!(after.motivation >= 0.0);
        prop_assert!(after.focus >= 0.0);
    }
}
