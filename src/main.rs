//! vpet: terminal entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  stdin/stdout     EntropyRng      JsonConfigFile         │
//! │  (ConsoleSink)    (RandomPort)    (ConfigPort)           │
//! │  LogEventSink                                            │
//! │  (EventSink)                                             │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        PetService → transition::apply          │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use vpet::adapters::config_file::JsonConfigFile;
use vpet::adapters::rng::EntropyRng;
use vpet::config::SessionConfig;
use vpet::driver::{self, Preset};
use vpet::pet::PetKind;

/// Look after a virtual cat, dog or rabbit from the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Pet type (cat, dog or rabbit); prompts if omitted.
    #[arg(long = "pet-type", value_parser = parse_kind)]
    pet_type: Option<PetKind>,

    /// Pet name; prompts if omitted.
    #[arg(long)]
    name: Option<String>,

    /// JSON session config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_kind(s: &str) -> std::result::Result<PetKind, String> {
    s.parse::<PetKind>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ── 1. Config (file or defaults) ──────────────────────────
    let config = match &args.config {
        Some(path) => JsonConfigFile::new(path)
            .load_or_default()
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SessionConfig::default(),
    };

    // ── 2. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();
    info!("vpet v{} starting", env!("CARGO_PKG_VERSION"));

    // ── 3. Session ────────────────────────────────────────────
    let preset = Preset {
        kind: args.pet_type,
        name: args.name,
    };
    let mut rng = EntropyRng::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let summary = driver::run(stdin.lock(), stdout.lock(), &config, preset, &mut rng)?;
    info!(
        "{} the {}: {} turns, {} hours, ended by {:?}",
        summary.name, summary.kind, summary.turns, summary.hours, summary.end
    );
    Ok(())
}
