//! Leader and next-to-play annotations for tricks.
//!
//! Winners are never inferred here: suit and trump resolution belong to the
//! game server, so `is_winner` passes through untouched.

use super::tricks::Trick;

/// Recompute `is_leader` and `is_next_to_play` for every turn.
///
/// Turn 0 leads. The first turn without a card is next to play; a trick
/// where every turn has a card has no next player.
pub fn annotate_trick(trick: &Trick) -> Trick {
    let next = trick.turns.iter().position(|t| t.card.is_none());
    let turns = trick
        .turns
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            let mut turn = turn.clone();
            turn.is_leader = i == 0;
            turn.is_next_to_play = next == Some(i);
            turn
        })
        .collect();
    Trick { turns }
}

pub fn annotate_tricks(tricks: &[Trick]) -> Vec<Trick> {
    tricks.iter().map(annotate_trick).collect()
}
