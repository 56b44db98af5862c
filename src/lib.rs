//! vpet library.
//!
//! A single virtual pet as a pure state machine.  The rules live in
//! [`pet`]; [`app`] wraps them in a session behind port traits; the
//! [`adapters`] and [`driver`] connect that session to a terminal.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod driver;
pub mod error;
pub mod pet;

pub use error::{Error, Result};
