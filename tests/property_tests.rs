//! Property tests for the pet state machine.
//!
//! Arbitrary action sequences with arbitrary treat rolls are driven through
//! the public API; every intermediate state must satisfy the stat bounds
//! and the per-action rules.

use proptest::prelude::*;
use vpet::adapters::rng::FixedRoll;
use vpet::app::commands::Action;
use vpet::app::events::PetEvent;
use vpet::pet::stats::{STAT_MAX, STAT_MIN};
use vpet::pet::transition::TREAT_DIE_SIDES;
use vpet::pet::{PetKind, PetState, Stats, apply};

fn arb_kind() -> impl Strategy<Value = PetKind> {
    prop_oneof![Just(PetKind::Cat), Just(PetKind::Dog), Just(PetKind::Rabbit)]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Feed),
        Just(Action::Play),
        Just(Action::Rest),
        Just(Action::Status),
    ]
}

fn arb_state() -> impl Strategy<Value = PetState> {
    (arb_kind(), 1i16..=10, 1i16..=10, 1i16..=10)
        .prop_map(|(k, h, p, hp)| PetState::with_stats(k, "pet", Stats::new(h, p, hp)))
}

fn triple(s: &PetState) -> (i16, i16, i16) {
    let st = s.stats();
    (
        st.hunger.get() as i16,
        st.happiness.get() as i16,
        st.health.get() as i16,
    )
}

fn clamp(v: i16) -> i16 {
    v.clamp(STAT_MIN as i16, STAT_MAX as i16)
}

proptest! {
    /// After every action all three stats are inside 1..=10.
    #[test]
    fn clamp_invariant_holds(
        start in arb_state(),
        steps in proptest::collection::vec((arb_action(), 1u32..=TREAT_DIE_SIDES), 1..=200),
    ) {
        let mut state = start;
        for (action, roll) in steps {
            state = apply(&state, action, &mut FixedRoll(roll)).state;
            let (h, p, hp) = triple(&state);
            for v in [h, p, hp] {
                prop_assert!((STAT_MIN as i16..=STAT_MAX as i16).contains(&v));
            }
        }
    }

    /// Rest: +2 health, -1 happiness, then one tick with the treat suppressed.
    #[test]
    fn rest_effect_precedes_tick(start in arb_state()) {
        let (h0, p0, hp0) = triple(&start);
        let t = apply(&start, Action::Rest, &mut FixedRoll(TREAT_DIE_SIDES));
        prop_assert_eq!(t.events[0], PetEvent::Rested);

        let hunger = clamp(h0 + 1);
        let happy = clamp(clamp(p0 - 1) - 1);
        let mut health = clamp(hp0 + 2);
        if hunger >= 9 { health = clamp(health - 2); }
        if happy <= 2 { health = clamp(health - 1); }
        prop_assert_eq!(triple(&t.state), (hunger, happy, health));
    }

    /// Feed when not full: -3 hunger, +1 health before the tick.
    #[test]
    fn feed_effect_precedes_tick(start in arb_state()) {
        let (h0, p0, hp0) = triple(&start);
        let t = apply(&start, Action::Feed, &mut FixedRoll(TREAT_DIE_SIDES));

        let (mut hunger, mut health) = (h0, hp0);
        if h0 > 1 {
            prop_assert_eq!(t.events[1], PetEvent::Satisfied);
            hunger = clamp(h0 - 3);
            health = clamp(hp0 + 1);
        } else {
            prop_assert_eq!(t.events[1], PetEvent::AlreadyFull);
        }
        hunger = clamp(hunger + 1);
        let happy = clamp(p0 - 1);
        if hunger >= 9 { health = clamp(health - 2); }
        if happy <= 2 { health = clamp(health - 1); }
        prop_assert_eq!(triple(&t.state), (hunger, happy, health));
    }

    /// Play picks exactly one branch, hunger gate first.
    #[test]
    fn play_gate_order(start in arb_state()) {
        let (h0, _, hp0) = triple(&start);
        let t = apply(&start, Action::Play, &mut FixedRoll(TREAT_DIE_SIDES));
        let expected = if h0 >= 8 {
            PetEvent::TooHungryToPlay
        } else if hp0 <= 2 {
            PetEvent::TooWeakToPlay
        } else {
            PetEvent::HadFun
        };
        prop_assert_eq!(t.events[1], expected);
    }

    /// Every time-advancing action yields exactly one hour marker.
    #[test]
    fn one_tick_per_action(start in arb_state(), action in arb_action(), roll in 1u32..=20) {
        let t = apply(&start, action, &mut FixedRoll(roll));
        let hours = t.events.iter().filter(|e| **e == PetEvent::HourPassed).count();
        prop_assert_eq!(hours, usize::from(action != Action::Status));
    }

    /// Health never reaches zero, so a pet never dies.
    #[test]
    fn liveness_never_lost(
        start in arb_state(),
        steps in proptest::collection::vec(arb_action(), 1..=200),
    ) {
        let mut state = start;
        for action in steps {
            let t = apply(&state, action, &mut FixedRoll(TREAT_DIE_SIDES));
            prop_assert!(t.state.is_alive());
            prop_assert!(!t.events.contains(&PetEvent::Died));
            state = t.state;
        }
    }
}
