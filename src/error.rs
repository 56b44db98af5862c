//! Error types for the input boundary.
//!
//! The pet core itself cannot fail: every input it accepts is already
//! validated.  These errors belong to the edges (parsing player input and
//! loading configuration) and all funnel into one [`Error`] enum so the
//! driver handles them uniformly.

use core::fmt;

use crate::app::ports::ConfigError;

/// Every fallible boundary operation returns this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pet type is not one of cat, dog, rabbit.
    InvalidPetType,
    /// Menu choice matched no known action.
    UnknownAction,
    /// Configuration could not be loaded or is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPetType => write!(f, "invalid pet type, expected cat, dog or rabbit"),
            Self::UnknownAction => write!(f, "unrecognized action"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
