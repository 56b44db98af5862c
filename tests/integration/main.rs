//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  No terminal or real entropy is required.

mod config_tests;
mod driver_tests;
mod mock_ports;
mod session_tests;
