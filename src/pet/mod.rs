//! Pet domain model: the stats, the state value, and the rules that move it.
//!
//! ```text
//!   PetState ──(Action, RandomPort)──▶ transition::apply ──▶ (PetState, EventBatch)
//! ```
//!
//! Nothing in here performs I/O.  Randomness arrives through the
//! [`RandomPort`](crate::app::ports::RandomPort) trait and every observable
//! effect is returned as a [`PetEvent`](crate::app::events::PetEvent).

pub mod state;
pub mod stats;
pub mod transition;

pub use state::{PetKind, PetState};
pub use stats::{Stat, Stats};
pub use transition::{Transition, apply};
