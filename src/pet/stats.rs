//! Bounded pet statistics.
//!
//! Every stat lives on the same 1..=10 scale.  [`Stat`] is the only way to
//! hold a stat value and every constructor and arithmetic helper saturates
//! into range, so an out-of-range value cannot be observed.

use core::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Scale and thresholds
// ---------------------------------------------------------------------------

/// Lowest value any stat can take.
pub const STAT_MIN: u8 = 1;
/// Highest value any stat can take.
pub const STAT_MAX: u8 = 10;

/// Starting hunger for a freshly adopted pet.
pub const INITIAL_HUNGER: u8 = 5;
/// Starting happiness for a freshly adopted pet.
pub const INITIAL_HAPPINESS: u8 = 6;
/// Starting health for a freshly adopted pet.
pub const INITIAL_HEALTH: u8 = 8;

/// Hunger at or below which feeding has only a minimal effect.
pub const FULL_HUNGER: u8 = 1;
/// Hunger at or above which the pet refuses to play.
pub const PLAY_HUNGER_LIMIT: u8 = 8;
/// Health at or below which the pet is too weak to play.
pub const PLAY_HEALTH_LIMIT: u8 = 2;
/// Hunger at or above which the pet starves during a tick.
pub const STARVING_HUNGER: u8 = 9;
/// Happiness at or below which sadness costs health during a tick.
pub const SAD_HAPPINESS: u8 = 2;

/// Critical hunger (status flag and end-of-tick warning).
pub const CRITICAL_HUNGER: u8 = 8;
/// Critical happiness (status flag and end-of-tick warning).
pub const CRITICAL_HAPPINESS: u8 = 2;
/// Critical health (status flag and end-of-tick warning).
pub const CRITICAL_HEALTH: u8 = 3;

// ---------------------------------------------------------------------------
// Stat
// ---------------------------------------------------------------------------

/// A single stat, saturated into `STAT_MIN..=STAT_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i16", into = "u8")]
pub struct Stat(u8);

impl Stat {
    /// Clamp an arbitrary signed value into range.
    pub const fn new(value: i16) -> Self {
        let v = if value < STAT_MIN as i16 {
            STAT_MIN
        } else if value > STAT_MAX as i16 {
            STAT_MAX
        } else {
            value as u8
        };
        Self(v)
    }

    /// The raw value, always within `STAT_MIN..=STAT_MAX`.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Add `delta` and saturate.
    #[must_use]
    pub const fn raise(self, delta: u8) -> Self {
        Self::new(self.0 as i16 + delta as i16)
    }

    /// Subtract `delta` and saturate.
    #[must_use]
    pub const fn lower(self, delta: u8) -> Self {
        Self::new(self.0 as i16 - delta as i16)
    }
}

impl From<i16> for Stat {
    fn from(value: i16) -> Self {
        Self::new(value)
    }
}

impl From<Stat> for u8 {
    fn from(stat: Stat) -> Self {
        stat.0
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, STAT_MAX)
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// The three stats a pet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// 1 = full, 10 = starving.
    pub hunger: Stat,
    /// 1 = very sad, 10 = ecstatic.
    pub happiness: Stat,
    /// 1 = very poor, 10 = excellent.
    pub health: Stat,
}

impl Stats {
    /// Build from raw values, clamping each one.
    pub const fn new(hunger: i16, happiness: i16, health: i16) -> Self {
        Self {
            hunger: Stat::new(hunger),
            happiness: Stat::new(happiness),
            health: Stat::new(health),
        }
    }

    pub fn hunger_critical(&self) -> bool {
        self.hunger.get() >= CRITICAL_HUNGER
    }

    pub fn happiness_critical(&self) -> bool {
        self.happiness.get() <= CRITICAL_HAPPINESS
    }

    pub fn health_critical(&self) -> bool {
        self.health.get() <= CRITICAL_HEALTH
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(
            INITIAL_HUNGER as i16,
            INITIAL_HAPPINESS as i16,
            INITIAL_HEALTH as i16,
        )
    }
}
