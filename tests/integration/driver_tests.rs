//! End-to-end driver tests: scripted input bytes → rendered output bytes.

use super::mock_ports::CountingRng;

use vpet::adapters::console::{ACTION_RETRY, BANNER, GOODBYE};
use vpet::config::SessionConfig;
use vpet::driver::{self, EndReason, Preset};
use vpet::pet::PetKind;
use vpet::pet::transition::TREAT_DIE_SIDES;

fn play(script: &str, config: &SessionConfig) -> (driver::SessionSummary, String) {
    let mut out = Vec::new();
    let mut rng = CountingRng::cycling(&[TREAT_DIE_SIDES]);
    let summary = driver::run(script.as_bytes(), &mut out, config, Preset::default(), &mut rng)
        .expect("session should end cleanly");
    (summary, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn words_and_digits_are_interchangeable() {
    let (a, out_a) = play("dog\nrex\nfeed\nPLAY\nRest\nstatus\nquit\n", &SessionConfig::default());
    let (b, out_b) = play("dog\nrex\n1\n2\n3\n4\n5\n", &SessionConfig::default());
    assert_eq!(a, b);
    assert_eq!(out_a, out_b);
    assert_eq!(a.end, EndReason::Quit);
    assert_eq!(a.hours, 3);
}

#[test]
fn unknown_choices_do_not_count_as_turns() {
    let (summary, out) = play("cat\nmog\n9\n\nfeedme\n5\n", &SessionConfig::default());
    assert_eq!(summary.turns, 0);
    assert_eq!(out.matches(ACTION_RETRY).count(), 3);
    assert!(out.contains(GOODBYE));
}

#[test]
fn end_of_input_ends_session() {
    let (summary, out) = play("RABBIT\nhop\n3\n3\n", &SessionConfig::default());
    assert_eq!(summary.kind, PetKind::Rabbit);
    assert_eq!(summary.end, EndReason::EndOfInput);
    assert_eq!(summary.turns, 2);
    assert!(out.ends_with("(Program finished.)\n"));
}

#[test]
fn config_controls_banner_and_default_name() {
    let config = SessionConfig {
        default_name: "Pip".into(),
        show_banner: false,
        ..SessionConfig::default()
    };
    let (summary, out) = play("cat\n   \n5\n", &config);
    assert_eq!(summary.name, "Pip");
    assert!(!out.contains(BANNER));
    assert!(out.contains("Welcome Pip the Cat!"));
}

#[test]
fn starving_session_prints_critical_lines() {
    let script = "dog\nrex\n2\n2\n2\n2\n4\n5\n";
    let (_, out) = play(script, &SessionConfig::default());
    assert!(out.contains("Rex is too hungry to play and wants food first."));
    assert!(out.contains("Warning: Rex is starving."));
    assert!(out.contains("CRITICAL: Hunger = 10/10. Feed Rex soon!"));
    assert!(out.contains("Hunger   : 10/10  (High - critical!)"));
}
