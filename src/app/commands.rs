//! Inbound commands.
//!
//! [`Action`] is what the pet core understands.  [`Command`] is what the
//! driver reads from the player: an action, or a request to stop.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The four operations a caller may apply to a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Feed,
    Play,
    Rest,
    /// Read-only; never advances time.
    Status,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Feed, Action::Play, Action::Rest, Action::Status];

    /// Whether the action ends with a passive tick.
    pub const fn advances_time(self) -> bool {
        !matches!(self, Self::Status)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Rest => "rest",
            Self::Status => "status",
        };
        f.write_str(s)
    }
}

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Quit,
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Self::Act(action)
    }
}
