//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                 |
//! |----------------|--------------|-----------------------------|
//! | `config_file`  | ConfigPort   | JSON file on disk           |
//! | `console`      | EventSink    | Terminal (any `io::Write`)  |
//! | `log_sink`     | EventSink    | `log` facade                |
//! | `rng`          | RandomPort   | OS-seeded `StdRng`, stubs   |

pub mod config_file;
pub mod console;
pub mod log_sink;
pub mod rng;
