//! Port traits: the hexagonal boundary between the pet core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PetService / transition (domain)
//! ```
//!
//! Driven adapters (random source, event sinks, config storage) implement
//! these traits.  The core consumes them via generics, so it never touches
//! a terminal, a file, or the OS entropy pool directly.

use crate::config::SessionConfig;

use super::events::PetEvent;

// ───────────────────────────────────────────────────────────────
// Random port (driven adapter: entropy → domain)
// ───────────────────────────────────────────────────────────────

/// Source of uniform integer draws.
///
/// Production code backs this with an entropy-seeded generator; tests
/// inject a fixed or scripted source so transitions are reproducible.
pub trait RandomPort {
    /// Draw a uniformly distributed integer in `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn roll_inclusive(&mut self, low: u32, high: u32) -> u32;
}

impl<T: RandomPort + ?Sized> RandomPort for &mut T {
    fn roll_inclusive(&mut self, low: u32, high: u32) -> u32 {
        (**self).roll_inclusive(low, high)
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → terminal / logging)
// ───────────────────────────────────────────────────────────────

/// The service emits every [`PetEvent`] through this port, in order.
///
/// `name` is the pet's display name, so sinks can render text without
/// holding a reference to the state.
pub trait EventSink {
    fn emit(&mut self, name: &str, event: &PetEvent);
}

/// Fan-out to two sinks, first then second.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, name: &str, event: &PetEvent) {
        self.0.emit(name, event);
        self.1.emit(name, event);
    }
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ config storage)
// ───────────────────────────────────────────────────────────────

/// Loads and persists the driver configuration.
///
/// Implementations MUST validate before returning or persisting.  Invalid
/// values are rejected with [`ConfigError::ValidationFailed`], not
/// silently repaired.
pub trait ConfigPort {
    /// Load configuration.  Returns [`ConfigError::NotFound`] if nothing is
    /// stored; callers usually fall back to [`SessionConfig::default()`].
    fn load(&self) -> Result<SessionConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &SessionConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found at the configured location.
    NotFound,
    /// Stored config could not be deserialized.
    Corrupted,
    /// A config field failed validation.
    /// The `&'static str` names the field and the reason.
    ValidationFailed(&'static str),
    /// Generic I/O error from the backing store.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
