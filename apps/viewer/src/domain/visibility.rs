//! Which cards a viewer may act on for a given seat.
//!
//! Operator ("control panel") rule: for any seat other than the one being
//! viewed as, every card outside the viewer's own hand is selectable. This
//! is not a game rule and never filters by suit.

use serde::Serialize;

use super::cards_types::Card;
use super::players::Seat;

/// Client-local "viewing as" selection. Never part of the round state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Viewpoint(Option<Seat>);

impl Viewpoint {
    /// No seat selected: every hand is visible to the operator.
    pub const NONE: Viewpoint = Viewpoint(None);

    pub const fn seat(seat: Seat) -> Self {
        Viewpoint(Some(seat))
    }

    pub const fn viewing_as(self) -> Option<Seat> {
        self.0
    }

    pub fn possible_cards(self, for_seat: Seat, held: &[Vec<Card>]) -> Vec<Card> {
        possible_cards(for_seat, held, self.0)
    }
}

impl From<Option<Seat>> for Viewpoint {
    fn from(seat: Option<Seat>) -> Self {
        Viewpoint(seat)
    }
}

/// Cards selectable for `for_seat` given every seat's hand and the viewpoint.
///
/// - Viewing as `for_seat`: exactly that seat's hand (empty if not known).
/// - Otherwise: every hand except the viewer's own, concatenated in seat
///   order, `for_seat` included. With no viewpoint that is all hands.
///
/// Returns copies; hands are never modified and duplicates are kept.
pub fn possible_cards(for_seat: Seat, held: &[Vec<Card>], viewing_as: Option<Seat>) -> Vec<Card> {
    if viewing_as == Some(for_seat) {
        return held.get(for_seat as usize).cloned().unwrap_or_default();
    }

    let excluded = viewing_as.map(usize::from);
    held.iter()
        .enumerate()
        .filter(|(seat, _)| Some(*seat) != excluded)
        .flat_map(|(_, hand)| hand.iter().copied())
        .collect()
}
