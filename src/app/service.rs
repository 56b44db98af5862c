//! Pet service: the hexagonal core of a play session.
//!
//! [`PetService`] owns the current [`PetState`] and replaces it with the
//! successor produced by [`transition::apply`] on every action.  Randomness
//! and output are injected at call sites, making the whole session testable
//! with mock adapters.
//!
//! ```text
//!  RandomPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      PetService         │
//!     Action ───▶ │  state · turn counter   │ ──▶ Outcome
//!                 └────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::pet::{PetKind, PetState, transition};

use super::commands::Action;
use super::events::{EventBatch, PetEvent};
use super::ports::{EventSink, RandomPort};

/// Whether the session can continue after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Alive,
    Died,
}

// ───────────────────────────────────────────────────────────────
// PetService
// ───────────────────────────────────────────────────────────────

/// One pet, one session.
pub struct PetService {
    state: PetState,
    /// Actions applied so far (Status included).
    turns: u64,
    /// Hours of game time elapsed.
    hours: u64,
    ended: bool,
}

impl PetService {
    /// Adopt a pet and announce it through `sink`.
    pub fn adopt(kind: PetKind, name: &str, sink: &mut impl EventSink) -> Self {
        Self::from_state(PetState::new(kind, name), sink)
    }

    /// Start a session from an existing state (scenario setup, tests).
    pub fn from_state(state: PetState, sink: &mut impl EventSink) -> Self {
        info!("PetService started: {} the {}", state.name(), state.kind());
        sink.emit(state.name(), &PetEvent::Adopted(state.kind()));
        Self {
            state,
            turns: 0,
            hours: 0,
            ended: false,
        }
    }

    // ── Actions ───────────────────────────────────────────────

    /// Apply one action, forward its events to `sink`, and re-check liveness.
    ///
    /// Returns the events as well so callers that do not need a sink can
    /// inspect them directly.  Once the pet has died further actions are
    /// ignored and return an empty batch.
    pub fn act(
        &mut self,
        action: Action,
        rng: &mut impl RandomPort,
        sink: &mut impl EventSink,
    ) -> (Outcome, EventBatch) {
        if self.ended {
            warn!("PetService: {:?} ignored, session already over", action);
            return (Outcome::Died, EventBatch::new());
        }

        let transition::Transition { state, mut events } =
            transition::apply(&self.state, action, rng);
        self.state = state;
        self.turns += 1;
        if action.advances_time() {
            self.hours += 1;
        }

        let outcome = self.check_liveness(&mut events);

        for event in &events {
            sink.emit(self.state.name(), event);
        }
        debug!(
            "turn {} ({}h): {} produced {} events",
            self.turns,
            self.hours,
            action,
            events.len()
        );

        (outcome, events)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &PetState {
        &self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// Actions applied since adoption.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Hours of game time elapsed since adoption.
    pub fn hours(&self) -> u64 {
        self.hours
    }

    /// "Name the Kind", as shown in the status block.
    pub fn label(&self) -> String {
        format!("{} the {}", self.state.name(), self.state.kind())
    }

    // ── Internal ──────────────────────────────────────────────

    fn check_liveness(&mut self, events: &mut EventBatch) -> Outcome {
        if self.state.is_alive() {
            return Outcome::Alive;
        }
        warn!("PetService: {} has died after {} turns", self.state.name(), self.turns);
        self.ended = true;
        let _ = events.push(PetEvent::Died);
        Outcome::Died
    }
}
