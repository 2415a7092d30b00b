#![allow(dead_code)]

use crew_viewer::{Card, Suit};

// Logging is auto-installed for every integration test binary
#[ctor::ctor]
fn init_logging() {
    viewer_test_support::logging::init();
}

pub fn c(suit: Suit, value: u8) -> Card {
    Card::new(suit, value).expect("valid test card")
}
