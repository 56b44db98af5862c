//! Outbound pet events.
//!
//! Every observable effect of an action is returned as a [`PetEvent`] in an
//! ordered [`EventBatch`].  The [`PetService`](super::service::PetService)
//! forwards them through the [`EventSink`](super::ports::EventSink) port.
//! Adapters on the other side decide what to do with them, usually rendering
//! them to the terminal or the log.

use serde::Serialize;

use crate::pet::{PetKind, Stats};

/// Upper bound on events produced by one action.
///
/// Worst case is Play: attempt + outcome + a full tick (hour, starving,
/// unhappy, treat, three criticals) = 10.
pub const MAX_EVENTS_PER_ACTION: usize = 16;

/// Ordered events produced by a single action.
pub type EventBatch = heapless::Vec<PetEvent, MAX_EVENTS_PER_ACTION>;

/// Structured events emitted by the pet core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum PetEvent {
    /// A new pet has been created.
    Adopted(PetKind),

    // ── Feed ──────────────────────────────────────────────
    /// Food was offered.
    FeedOffered,
    /// Pet was already full; hunger and health unchanged.
    AlreadyFull,
    /// Pet ate; hunger dropped and health rose.
    Satisfied,

    // ── Play ──────────────────────────────────────────────
    /// Play was attempted.
    PlayAttempted,
    /// Refused to play because hunger is too high.
    TooHungryToPlay,
    /// Refused to play because health is too low.
    TooWeakToPlay,
    /// Played; happiness and hunger rose.
    HadFun,

    // ── Rest ──────────────────────────────────────────────
    /// Pet rested; health rose and happiness dipped.
    Rested,

    // ── Passive tick ──────────────────────────────────────
    /// One hour of game time elapsed.
    HourPassed,
    /// Hunger reached the starvation threshold; health dropped.
    Starving,
    /// Happiness reached the sadness threshold; health dropped.
    VeryUnhappy,
    /// The random treat roll hit; happiness rose.
    FoundTreat,
    /// End-of-tick hunger is critical (carries the value).
    CriticalHunger(u8),
    /// End-of-tick happiness is critical (carries the value).
    CriticalHappiness(u8),
    /// End-of-tick health is critical (carries the value).
    CriticalHealth(u8),

    // ── Queries / lifecycle ───────────────────────────────
    /// Read-only status report.
    Status(StatusSnapshot),
    /// Health reached zero; the session is over.
    Died,
}

impl PetEvent {
    /// Warnings are the events a player should not miss.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::Starving
                | Self::VeryUnhappy
                | Self::CriticalHunger(_)
                | Self::CriticalHappiness(_)
                | Self::CriticalHealth(_)
                | Self::Died
        )
    }
}

/// A point-in-time view of the stats with their critical flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub hunger: u8,
    pub happiness: u8,
    pub health: u8,
    pub hunger_critical: bool,
    pub happiness_critical: bool,
    pub health_critical: bool,
}

impl From<Stats> for StatusSnapshot {
    fn from(s: Stats) -> Self {
        Self {
            hunger: s.hunger.get(),
            happiness: s.happiness.get(),
            health: s.health.get(),
            hunger_critical: s.hunger_critical(),
            happiness_critical: s.happiness_critical(),
            health_critical: s.health_critical(),
        }
    }
}
