//! Terminal adapter: player input in, rendered text out.
//!
//! This is the only place that knows how events read as prose.  The core
//! hands over [`PetEvent`]s; [`render_event`] turns each into one or more
//! lines and [`ConsoleSink`] writes them to any `io::Write`.

use std::io::Write;

use log::warn;

use crate::app::commands::{Action, Command};
use crate::app::events::{PetEvent, StatusSnapshot};
use crate::app::ports::EventSink;
use crate::error::{Error, Result};
use crate::pet::stats::STAT_MAX;

pub const BANNER: &str = "=== Virtual Pet (Console) ===";
pub const SCALE_HINT: &str =
    "Stat scale: Hunger 1(full) -> 10(starving), Happiness 1 -> 10, Health 1 -> 10";
pub const TYPE_PROMPT: &str = "Choose pet type (cat/dog/rabbit): ";
pub const TYPE_RETRY: &str = "Invalid type. Please enter cat, dog, or rabbit.";
pub const NAME_PROMPT: &str = "Enter your pet's name: ";
pub const MENU: &str = "How to interact:\n1 - Feed\t2 - Play\t3 - Rest\t4 - Status\t5 - Quit";
pub const ACTION_PROMPT: &str = "Choose an action (1-5): ";
pub const ACTION_RETRY: &str = "Unrecognized option. Try again.";
pub const GOODBYE: &str = "Thanks for playing. Goodbye!";

// ───────────────────────────────────────────────────────────────
// Input
// ───────────────────────────────────────────────────────────────

/// Parse one menu line: a digit `1`-`5` or the action word, any case.
pub fn parse_choice(line: &str) -> Result<Command> {
    let choice = line.trim().to_lowercase();
    let cmd = match choice.as_str() {
        "1" | "feed" => Command::Act(Action::Feed),
        "2" | "play" => Command::Act(Action::Play),
        "3" | "rest" => Command::Act(Action::Rest),
        "4" | "status" => Command::Act(Action::Status),
        "5" | "quit" => Command::Quit,
        _ => return Err(Error::UnknownAction),
    };
    Ok(cmd)
}

// ───────────────────────────────────────────────────────────────
// Output
// ───────────────────────────────────────────────────────────────

/// Render one event as display text.  May span several lines.
pub fn render_event(name: &str, event: &PetEvent) -> String {
    match event {
        PetEvent::Adopted(kind) => {
            format!("\nWelcome {name} the {kind}! Your new pet is ready.\n")
        }
        PetEvent::FeedOffered => format!("\nYou feed {name}."),
        PetEvent::AlreadyFull => format!("{name} is already full and eats only a little."),
        PetEvent::Satisfied => format!("{name} seems satisfied."),
        PetEvent::PlayAttempted => format!("\nYou try to play with {name}."),
        PetEvent::TooHungryToPlay => {
            format!("{name} is too hungry to play and wants food first.")
        }
        PetEvent::TooWeakToPlay => format!("{name} is too weak to play. Rest first."),
        PetEvent::HadFun => format!("{name} had fun! Happiness increased."),
        PetEvent::Rested => format!("\n{name} rests for a while."),
        PetEvent::HourPassed => "(One hour has passed.)".to_string(),
        PetEvent::Starving => format!(
            "Warning: {name} is starving. Health will drop if you don't feed soon."
        ),
        PetEvent::VeryUnhappy => format!(
            "Warning: {name} is very unhappy. Health suffers from long-term sadness."
        ),
        PetEvent::FoundTreat => format!("{name} found a hidden treat and got happier!"),
        PetEvent::CriticalHunger(v) => {
            format!("CRITICAL: Hunger = {v}/{STAT_MAX}. Feed {name} soon!")
        }
        PetEvent::CriticalHappiness(v) => format!("CRITICAL: Happiness = {v}/{STAT_MAX}."),
        PetEvent::CriticalHealth(v) => format!("CRITICAL: Health = {v}/{STAT_MAX}."),
        PetEvent::Status(snap) => render_status(name, snap),
        PetEvent::Died => {
            format!("\nSadly, {name} has passed away due to poor health. Game over.")
        }
    }
}

/// The status block with inline annotations on critical stats.
///
/// `name` here is the full "Name the Kind" label.
pub fn render_status(name: &str, snap: &StatusSnapshot) -> String {
    let flag = |on: bool, text: &'static str| if on { text } else { "" };
    format!(
        "----- Pet Status -----\n\
         Name     : {name}\n\
         Hunger   : {}/{STAT_MAX}  {}\n\
         Happiness: {}/{STAT_MAX}  {}\n\
         Health   : {}/{STAT_MAX}  {}\n\
         ----------------------",
        snap.hunger,
        flag(snap.hunger_critical, "(High - critical!)"),
        snap.happiness,
        flag(snap.happiness_critical, "(Low - needs attention!)"),
        snap.health,
        flag(snap.health_critical, "(Low - urgent!)"),
    )
}

/// [`EventSink`] that renders events as text onto a writer.
///
/// Write failures are logged and otherwise ignored; the session carries on.
pub struct ConsoleSink<W: Write> {
    out: W,
    label: Option<String>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, label: None }
    }

    /// Use `label` (e.g. "Rex the Dog") in the status block header.
    pub fn set_status_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a raw line that is not tied to an event.
    pub fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!("ConsoleSink: write failed: {}", e);
        }
    }

    /// Write a prompt without a newline and flush so it shows before input.
    pub fn prompt(&mut self, text: &str) {
        if let Err(e) = write!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!("ConsoleSink: prompt failed: {}", e);
        }
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, name: &str, event: &PetEvent) {
        let text = match (event, &self.label) {
            (PetEvent::Status(snap), Some(label)) => render_status(label, snap),
            _ => render_event(name, event),
        };
        self.line(&text);
    }
}
