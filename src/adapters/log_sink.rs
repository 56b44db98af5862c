//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every [`PetEvent`] to the `log`
//! facade with a short tag.  The binary pairs it with the console sink so
//! a `RUST_LOG=debug` run shows the structured trail next to the prose.

use log::{debug, info, warn};

use crate::app::events::PetEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`PetEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, name: &str, event: &PetEvent) {
        match event {
            PetEvent::Adopted(kind) => info!("START | pet={} | kind={:?}", name, kind),
            PetEvent::FeedOffered | PetEvent::PlayAttempted => {
                debug!("ACTION | pet={} | {:?}", name, event);
            }
            PetEvent::AlreadyFull
            | PetEvent::Satisfied
            | PetEvent::TooHungryToPlay
            | PetEvent::TooWeakToPlay
            | PetEvent::HadFun
            | PetEvent::Rested => debug!("RESULT | pet={} | {:?}", name, event),
            PetEvent::HourPassed => debug!("TICK | pet={}", name),
            PetEvent::FoundTreat => info!("TICK | pet={} | found treat", name),
            PetEvent::Starving | PetEvent::VeryUnhappy => {
                warn!("WARN | pet={} | {:?}", name, event);
            }
            PetEvent::CriticalHunger(v) => warn!("CRIT | pet={} | hunger={}/10", name, v),
            PetEvent::CriticalHappiness(v) => warn!("CRIT | pet={} | happiness={}/10", name, v),
            PetEvent::CriticalHealth(v) => warn!("CRIT | pet={} | health={}/10", name, v),
            PetEvent::Status(s) => info!(
                "STATUS | pet={} | hunger={} happiness={} health={}",
                name, s.hunger, s.happiness, s.health
            ),
            PetEvent::Died => warn!("END | pet={} | died", name),
        }
    }
}
