//! Fuzz target: menu and pet-type parsing
//!
//! Feeds arbitrary UTF-8 lines to `console::parse_choice` and
//! `PetKind::from_str`.  Neither may panic, and any accepted line must
//! still be accepted after trimming and case folding.
//!
//! cargo fuzz run fuzz_choice_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use vpet::adapters::console::parse_choice;
use vpet::pet::PetKind;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(cmd) = parse_choice(line) {
        assert_eq!(parse_choice(&line.trim().to_uppercase()), Ok(cmd));
    }

    if let Ok(kind) = line.parse::<PetKind>() {
        assert_eq!(line.trim().to_lowercase().parse::<PetKind>(), Ok(kind));
    }
});
