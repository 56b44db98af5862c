//! Integration tests for the PetService session loop.

use super::mock_ports::{CountingRng, RecordingSink};

use vpet::app::commands::Action;
use vpet::app::events::PetEvent;
use vpet::app::service::{Outcome, PetService};
use vpet::pet::transition::{TREAT_DIE_SIDES, TREAT_ROLL};
use vpet::pet::{PetKind, PetState, Stats};

#[test]
fn every_tick_rolls_a_d20() {
    let mut sink = RecordingSink::new();
    let mut rng = CountingRng::cycling(&[TREAT_DIE_SIDES]);
    let mut svc = PetService::adopt(PetKind::Dog, "rex", &mut sink);

    for action in [Action::Feed, Action::Status, Action::Play, Action::Rest, Action::Status] {
        svc.act(action, &mut rng, &mut sink);
    }

    assert_eq!(rng.ranges, vec![(1, 20); 3]);
    assert_eq!(sink.count(PetEvent::HourPassed), 3);
}

#[test]
fn treat_every_fifth_tick() {
    let mut sink = RecordingSink::new();
    let mut rng = CountingRng::cycling(&[TREAT_ROLL, 5, 9, 14, 20]);
    let mut svc = PetService::adopt(PetKind::Cat, "tom", &mut sink);

    for _ in 0..20 {
        svc.act(Action::Rest, &mut rng, &mut sink);
    }

    assert_eq!(sink.count(PetEvent::FoundTreat), 4);
}

#[test]
fn events_are_tagged_with_capitalized_name() {
    let mut sink = RecordingSink::new();
    let mut rng = CountingRng::cycling(&[TREAT_DIE_SIDES]);
    let mut svc = PetService::adopt(PetKind::Rabbit, "THUMPER", &mut sink);
    svc.act(Action::Feed, &mut rng, &mut sink);

    assert!(sink.names.iter().all(|n| n == "Thumper"));
    assert_eq!(sink.events[0], PetEvent::Adopted(PetKind::Rabbit));
}

#[test]
fn hunger_gate_wins_over_health_gate() {
    let mut sink = RecordingSink::new();
    let mut rng = CountingRng::cycling(&[TREAT_DIE_SIDES]);
    let start = PetState::with_stats(PetKind::Dog, "rex", Stats::new(9, 6, 1));
    let mut svc = PetService::from_state(start, &mut sink);

    let (outcome, events) = svc.act(Action::Play, &mut rng, &mut sink);
    assert_eq!(outcome, Outcome::Alive);
    assert!(events.contains(&PetEvent::TooHungryToPlay));
    assert!(!events.contains(&PetEvent::TooWeakToPlay));
}

#[test]
fn critical_warnings_end_each_tick() {
    let mut sink = RecordingSink::new();
    let mut rng = CountingRng::cycling(&[TREAT_DIE_SIDES]);
    let start = PetState::with_stats(PetKind::Cat, "tom", Stats::new(8, 3, 4));
    let mut svc = PetService::from_state(start, &mut sink);

    let (_, events) = svc.act(Action::Rest, &mut rng, &mut sink);
    // Rest: health 6, happiness 2.  Tick: hunger 9 (starving → 4),
    // happiness 1 (sad → 3).
    assert_eq!(
        events.as_slice(),
        &[
            PetEvent::Rested,
            PetEvent::HourPassed,
            PetEvent::Starving,
            PetEvent::VeryUnhappy,
            PetEvent::CriticalHunger(9),
            PetEvent::CriticalHappiness(1),
            PetEvent::CriticalHealth(3),
        ]
    );
    assert_eq!(sink.warnings(), 5);
}
