//! Mock port adapters for integration tests.
//!
//! Records every emitted event and every random draw so tests can assert
//! on the full history without a terminal or a real generator.

use std::cell::RefCell;

use vpet::app::events::PetEvent;
use vpet::app::ports::{ConfigError, ConfigPort, EventSink, RandomPort};
use vpet::config::SessionConfig;

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<PetEvent>,
    pub names: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            names: Vec::new(),
        }
    }

    pub fn count(&self, event: PetEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    pub fn warnings(&self) -> usize {
        self.events.iter().filter(|e| e.is_warning()).count()
    }

    pub fn last(&self) -> Option<&PetEvent> {
        self.events.last()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, name: &str, event: &PetEvent) {
        self.names.push(name.to_string());
        self.events.push(*event);
    }
}

// ── CountingRng ───────────────────────────────────────────────

/// Cycles through `values` and records every requested range.
pub struct CountingRng {
    values: Vec<u32>,
    pub ranges: Vec<(u32, u32)>,
}

impl CountingRng {
    pub fn cycling(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            ranges: Vec::new(),
        }
    }
}

impl RandomPort for CountingRng {
    fn roll_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let idx = self.ranges.len() % self.values.len().max(1);
        self.ranges.push((low, high));
        self.values.get(idx).copied().unwrap_or(high).clamp(low, high)
    }
}

// ── MemoryConfig ──────────────────────────────────────────────

/// In-memory [`ConfigPort`] that validates like the file adapter.
pub struct MemoryConfig {
    stored: RefCell<Option<SessionConfig>>,
}

#[allow(dead_code)]
impl MemoryConfig {
    pub fn empty() -> Self {
        Self {
            stored: RefCell::new(None),
        }
    }
}

impl ConfigPort for MemoryConfig {
    fn load(&self) -> Result<SessionConfig, ConfigError> {
        self.stored.borrow().clone().ok_or(ConfigError::NotFound)
    }

    fn save(&self, config: &SessionConfig) -> Result<(), ConfigError> {
        config.validate()?;
        *self.stored.borrow_mut() = Some(config.clone());
        Ok(())
    }
}
