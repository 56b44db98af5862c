//! Pet identity and state value.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::stats::Stats;
use crate::error::Error;

// ---------------------------------------------------------------------------
// PetKind
// ---------------------------------------------------------------------------

/// The species a pet can be adopted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    Cat,
    Dog,
    Rabbit,
}

impl PetKind {
    /// Every adoptable kind, in prompt order.
    pub const ALL: [PetKind; 3] = [PetKind::Cat, PetKind::Dog, PetKind::Rabbit];

    /// Lowercase token accepted at the input boundary.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
            Self::Rabbit => "rabbit",
        }
    }
}

impl FromStr for PetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.token() == token)
            .ok_or(Error::InvalidPetType)
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&capitalize(self.token()))
    }
}

// ---------------------------------------------------------------------------
// PetState
// ---------------------------------------------------------------------------

/// A pet at one point in time.
///
/// `PetState` is a plain value: actions never mutate it in place, they
/// produce a successor through [`transition::apply`](super::transition::apply).
/// Identity fields are private and have no setters, so they are fixed for
/// the lifetime of the pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetState {
    kind: PetKind,
    name: String,
    pub(crate) stats: Stats,
}

impl PetState {
    /// Adopt a new pet with the default starting stats.
    ///
    /// `name` is expected to be non-blank; callers substitute a default
    /// before getting here.
    pub fn new(kind: PetKind, name: &str) -> Self {
        Self::with_stats(kind, name, Stats::default())
    }

    /// Build a pet with explicit stats (already clamped by [`Stats`]).
    pub fn with_stats(kind: PetKind, name: &str, stats: Stats) -> Self {
        Self {
            kind,
            name: capitalize(name),
            stats,
        }
    }

    pub fn kind(&self) -> PetKind {
        self.kind
    }

    /// Display-capitalized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// `true` while health is above zero.
    ///
    /// Health is floored at 1 by the clamp, so this never turns false in
    /// practice. The threshold is kept as-is rather than raised to the floor.
    pub fn is_alive(&self) -> bool {
        self.stats.health.get() > 0
    }
}

/// Trim, upper-case the first character and lower-case the rest.
///
/// Blank input is returned unchanged.
pub fn capitalize(s: &str) -> String {
    if s.trim().is_empty() {
        return s.to_string();
    }
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
