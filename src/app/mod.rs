//! Application core: session orchestration, zero I/O.
//!
//! This module wires the pet rules in [`crate::pet`] into a play session.
//! All interaction with the terminal, the random source and the config
//! store happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without a real terminal or entropy.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
