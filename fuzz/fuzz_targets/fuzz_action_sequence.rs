//! Fuzz target: `pet::apply`
//!
//! Splits the input into (action, roll) byte pairs and runs them through
//! the transition function from a fresh pet.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - Every stat stays within 1..=10 after every step
//! - Status never changes the state
//! - The event batch never fills up
//!
//! cargo fuzz run fuzz_action_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;
use vpet::adapters::rng::FixedRoll;
use vpet::app::commands::Action;
use vpet::app::events::MAX_EVENTS_PER_ACTION;
use vpet::pet::{PetKind, PetState, apply};

fuzz_target!(|data: &[u8]| {
    let mut state = PetState::new(PetKind::Dog, "fuzz");

    for pair in data.chunks_exact(2) {
        let action = Action::ALL[usize::from(pair[0]) % Action::ALL.len()];
        let mut rng = FixedRoll(u32::from(pair[1]));

        let t = apply(&state, action, &mut rng);
        assert!(t.events.len() < MAX_EVENTS_PER_ACTION, "event batch saturated");

        let s = t.state.stats();
        for v in [s.hunger.get(), s.happiness.get(), s.health.get()] {
            assert!((1..=10).contains(&v), "stat out of range: {v}");
        }
        if action == Action::Status {
            assert_eq!(t.state, state);
        }
        state = t.state;
    }
});
