//! Terminal session driver.
//!
//! Runs the prompt → adopt → action loop over any `BufRead` / `Write` pair,
//! so the binary wires it to stdin/stdout and tests wire it to byte
//! buffers.
//!
//! ```text
//!  ┌──────────┐   line    ┌─────────────┐  Action  ┌────────────┐
//!  │  input   │ ────────▶ │ parse_choice│ ───────▶ │ PetService │
//!  └──────────┘           └─────────────┘          └─────┬──────┘
//!                                                        │ events
//!                         ┌─────────────┐                ▼
//!                         │ ConsoleSink │ ◀──── (ConsoleSink, LogEventSink)
//!                         └─────────────┘
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::adapters::console::{
    self, ACTION_PROMPT, ACTION_RETRY, BANNER, ConsoleSink, GOODBYE, MENU, NAME_PROMPT,
    SCALE_HINT, TYPE_PROMPT, TYPE_RETRY,
};
use crate::adapters::log_sink::LogEventSink;
use crate::app::commands::Command;
use crate::app::ports::RandomPort;
use crate::app::service::{Outcome, PetService};
use crate::config::SessionConfig;
use crate::pet::PetKind;

/// Answers supplied up front (e.g. from CLI flags) instead of prompting.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub kind: Option<PetKind>,
    pub name: Option<String>,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Player chose quit.
    Quit,
    /// Input ran out.
    EndOfInput,
    /// The pet died.
    Died,
}

/// What happened over one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub name: String,
    pub kind: PetKind,
    pub turns: u64,
    pub hours: u64,
    pub end: EndReason,
}

/// Run one full session.
///
/// Ends normally on quit, end of input, or death.  Running out of input
/// before a pet type is chosen is an error: there is no pet to summarise.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: W,
    config: &SessionConfig,
    preset: Preset,
    rng: &mut impl RandomPort,
) -> Result<SessionSummary> {
    let mut console = ConsoleSink::new(output);

    if config.show_banner {
        console.line(BANNER);
        console.line(SCALE_HINT);
        console.line("");
    }

    let kind = match preset.kind {
        Some(kind) => kind,
        None => prompt_kind(&mut input, &mut console)?,
    };
    let name = match preset.name {
        Some(name) => config.resolve_name(&name),
        None => {
            console.prompt(NAME_PROMPT);
            let line = read_line(&mut input)?.unwrap_or_default();
            config.resolve_name(&line)
        }
    };

    let mut sinks = (console, LogEventSink::new());
    let mut service = PetService::adopt(kind, &name, &mut sinks);
    sinks.0.set_status_label(service.label());

    sinks.0.line(MENU);
    sinks.0.line("");

    let end = loop {
        if !service.is_alive() {
            break EndReason::Died;
        }

        sinks.0.prompt(ACTION_PROMPT);
        let Some(line) = read_line(&mut input)? else {
            sinks.0.line("");
            break EndReason::EndOfInput;
        };

        let action = match console::parse_choice(&line) {
            Ok(Command::Act(action)) => action,
            Ok(Command::Quit) => {
                sinks.0.line(GOODBYE);
                break EndReason::Quit;
            }
            Err(e) => {
                debug!("driver: rejected input {:?}: {}", line.trim(), e);
                sinks.0.line(ACTION_RETRY);
                continue;
            }
        };

        let (outcome, _) = service.act(action, rng, &mut sinks);
        if action.advances_time() {
            sinks.0.line("");
        }
        if outcome == Outcome::Died {
            break EndReason::Died;
        }
    };

    sinks.0.line("\n(Program finished.)");

    let summary = SessionSummary {
        name: service.state().name().to_string(),
        kind: service.state().kind(),
        turns: service.turns(),
        hours: service.hours(),
        end,
    };
    info!(
        "session ended: {:?} after {} turns ({} hours)",
        summary.end, summary.turns, summary.hours
    );
    Ok(summary)
}

/// Keep asking until a valid pet type is entered.
fn prompt_kind<R: BufRead, W: Write>(input: &mut R, console: &mut ConsoleSink<W>) -> Result<PetKind> {
    loop {
        console.prompt(TYPE_PROMPT);
        let line = read_line(input)?.context("input closed before a pet type was chosen")?;
        match line.parse::<PetKind>() {
            Ok(kind) => return Ok(kind),
            Err(e) => {
                debug!("driver: {:?}: {}", line.trim(), e);
                console.line(TYPE_RETRY);
            }
        }
    }
}

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("failed to read from input")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
