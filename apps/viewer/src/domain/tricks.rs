use serde::Serialize;

use super::cards_types::Card;
use super::players::Player;

/// One seat's slot in a trick.
///
/// `is_winner` is decided by the game server; `is_leader` and
/// `is_next_to_play` are recomputed locally by
/// [`crate::domain::trick_progress::annotate_trick`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub player: Player,
    pub card: Option<Card>,
    pub is_leader: bool,
    pub is_winner: bool,
    pub is_next_to_play: bool,
}

impl Turn {
    pub fn new(player: Player, card: Option<Card>) -> Self {
        Self {
            player,
            card,
            is_leader: false,
            is_winner: false,
            is_next_to_play: false,
        }
    }

    pub fn winner(mut self) -> Self {
        self.is_winner = true;
        self
    }
}

/// Turns in play order. Index-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trick {
    pub turns: Vec<Turn>,
}

impl Trick {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn is_complete(&self) -> bool {
        self.turns.iter().all(|t| t.card.is_some())
    }

    pub fn played_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.turns.iter().filter_map(|t| t.card)
    }
}
