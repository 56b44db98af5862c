//! Random-source adapters.
//!
//! - [`EntropyRng`] production source, seeded once from OS entropy.
//! - [`FixedRoll`] always returns the same value (clamped into range).
//! - [`ScriptedRolls`] replays a fixed list, then falls back to `high`.
//!
//! The two deterministic sources are public so integration tests and
//! scenario tooling can drive transitions without real randomness.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::app::ports::RandomPort;

// ───────────────────────────────────────────────────────────────
// EntropyRng
// ───────────────────────────────────────────────────────────────

/// [`RandomPort`] backed by a `StdRng` seeded from the OS.
///
/// Each process gets a fresh seed; every draw is an independent uniform
/// sample.
pub struct EntropyRng {
    rng: StdRng,
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomPort for EntropyRng {
    fn roll_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

// ───────────────────────────────────────────────────────────────
// FixedRoll
// ───────────────────────────────────────────────────────────────

/// Always yields the wrapped value, clamped into the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRoll(pub u32);

impl RandomPort for FixedRoll {
    fn roll_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.0.clamp(low, high)
    }
}

// ───────────────────────────────────────────────────────────────
// ScriptedRolls
// ───────────────────────────────────────────────────────────────

/// Replays a script of draws in order.
///
/// Each value is clamped into the requested range.  Once the script runs
/// out every draw returns `high`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    script: Vec<u32>,
    next: usize,
}

impl ScriptedRolls {
    pub fn new(script: &[u32]) -> Self {
        Self {
            script: script.to_vec(),
            next: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.next
    }

    /// Scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.next)
    }
}

impl RandomPort for ScriptedRolls {
    fn roll_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let value = match self.script.get(self.next) {
            Some(v) => (*v).clamp(low, high),
            None => {
                trace!("ScriptedRolls: script exhausted, returning {}", high);
                high
            }
        };
        self.next += 1;
        value
    }
}
