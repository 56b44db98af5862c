//! Pure state transitions.
//!
//! ```text
//!  Feed ──┐
//!  Play ──┼──▶ action effect ──▶ passive tick ──▶ (PetState', events)
//!  Rest ──┘
//!  Status ───▶ snapshot only  ──────────────────▶ (PetState,  events)
//! ```
//!
//! [`apply`] never mutates its input.  It copies the state, runs the action
//! handler and (except for Status) one passive tick against the copy, and
//! returns the copy together with every event produced, in order.

use log::{debug, trace};

use super::state::PetState;
use super::stats::{
    FULL_HUNGER, PLAY_HEALTH_LIMIT, PLAY_HUNGER_LIMIT, SAD_HAPPINESS, STARVING_HUNGER, Stats,
};
use crate::app::commands::Action;
use crate::app::events::{EventBatch, PetEvent, StatusSnapshot};
use crate::app::ports::RandomPort;

/// Sides on the treat die.
pub const TREAT_DIE_SIDES: u32 = 20;
/// The roll that yields a treat.
pub const TREAT_ROLL: u32 = 1;

/// The result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Successor state.
    pub state: PetState,
    /// Events in the order they occurred.
    pub events: EventBatch,
}

/// Apply `action` to `state`, drawing from `rng` for the treat roll.
pub fn apply(state: &PetState, action: Action, rng: &mut impl RandomPort) -> Transition {
    let mut next = state.clone();
    let mut events = EventBatch::new();

    match action {
        Action::Feed => feed(&mut next.stats, &mut events),
        Action::Play => play(&mut next.stats, &mut events),
        Action::Rest => rest(&mut next.stats, &mut events),
        Action::Status => emit(&mut events, PetEvent::Status(StatusSnapshot::from(next.stats))),
    }

    if action.advances_time() {
        passive_tick(&mut next.stats, rng, &mut events);
    }

    debug!(
        "{} -> hunger={} happiness={} health={} ({} events)",
        action,
        next.stats.hunger.get(),
        next.stats.happiness.get(),
        next.stats.health.get(),
        events.len()
    );

    Transition {
        state: next,
        events,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Action handlers
// ═══════════════════════════════════════════════════════════════════════════

fn feed(stats: &mut Stats, events: &mut EventBatch) {
    emit(events, PetEvent::FeedOffered);

    if stats.hunger.get() <= FULL_HUNGER {
        emit(events, PetEvent::AlreadyFull);
        return;
    }

    stats.hunger = stats.hunger.lower(3);
    stats.health = stats.health.raise(1);
    emit(events, PetEvent::Satisfied);
}

fn play(stats: &mut Stats, events: &mut EventBatch) {
    emit(events, PetEvent::PlayAttempted);

    // Hunger gate is checked before the health gate.
    if stats.hunger.get() >= PLAY_HUNGER_LIMIT {
        emit(events, PetEvent::TooHungryToPlay);
        return;
    }

    if stats.health.get() <= PLAY_HEALTH_LIMIT {
        emit(events, PetEvent::TooWeakToPlay);
        return;
    }

    stats.happiness = stats.happiness.raise(2);
    stats.hunger = stats.hunger.raise(1);
    emit(events, PetEvent::HadFun);
}

fn rest(stats: &mut Stats, events: &mut EventBatch) {
    stats.health = stats.health.raise(2);
    stats.happiness = stats.happiness.lower(1);
    emit(events, PetEvent::Rested);
}

// ═══════════════════════════════════════════════════════════════════════════
//  Passive tick: one hour of decay, penalties, treat roll, warnings
// ═══════════════════════════════════════════════════════════════════════════

/// Advance one hour.  Runs after Feed, Play and Rest, never after Status.
pub fn passive_tick(stats: &mut Stats, rng: &mut impl RandomPort, events: &mut EventBatch) {
    emit(events, PetEvent::HourPassed);

    stats.hunger = stats.hunger.raise(1);
    stats.happiness = stats.happiness.lower(1);

    if stats.hunger.get() >= STARVING_HUNGER {
        emit(events, PetEvent::Starving);
        stats.health = stats.health.lower(2);
    }

    if stats.happiness.get() <= SAD_HAPPINESS {
        emit(events, PetEvent::VeryUnhappy);
        stats.health = stats.health.lower(1);
    }

    let roll = rng.roll_inclusive(1, TREAT_DIE_SIDES);
    trace!("treat roll: {}/{}", roll, TREAT_DIE_SIDES);
    if roll == TREAT_ROLL {
        stats.happiness = stats.happiness.raise(2);
        emit(events, PetEvent::FoundTreat);
    }

    if stats.hunger_critical() {
        emit(events, PetEvent::CriticalHunger(stats.hunger.get()));
    }
    if stats.happiness_critical() {
        emit(events, PetEvent::CriticalHappiness(stats.happiness.get()));
    }
    if stats.health_critical() {
        emit(events, PetEvent::CriticalHealth(stats.health.get()));
    }
}

fn emit(events: &mut EventBatch, event: PetEvent) {
    // Capacity covers the worst-case action, so this cannot overflow.
    let _ = events.push(event);
}
