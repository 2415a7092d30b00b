//! Wire payload to [`RoundState`].
//!
//! Decoding never fails on content: every malformed piece is logged and
//! treated as absent so one bad field cannot blank the whole view.

use serde_json::Number;
use tracing::{debug, warn};

use crate::domain::{
    annotate_tricks, Card, Player, RoundState, Seat, SolveRecord, Suit, Task, TaskKindTag, Trick,
    Turn, MAX_ORDER,
};
use crate::error::AppError;
use crate::protocol::wire::{
    AppStateWire, CardWire, Field, PlayerWire, SolveWire, TaskWire, TrickWire, TurnWire,
};

/// Parses and decodes a bare app-state payload.
pub fn decode_app_state(json: &str) -> Result<RoundState, AppError> {
    let wire: AppStateWire = serde_json::from_str(json)?;
    Ok(decode_snapshot(&wire))
}

/// Converts a lenient wire snapshot into the domain aggregate.
///
/// Tricks come back already annotated with leader and next-to-play flags.
pub fn decode_snapshot(wire: &AppStateWire) -> RoundState {
    let hands = match &wire.hand_page {
        Field::Valid(page) => decode_hands(&page.held_cards),
        other => {
            note_field("handPage", other);
            Vec::new()
        }
    };

    let (tasks, players) = match &wire.objective_page {
        Field::Valid(page) => (
            decode_list("objectivePage.tasks", &page.tasks, decode_task),
            decode_list("objectivePage.players", &page.players, decode_player),
        ),
        other => {
            note_field("objectivePage", other);
            (Vec::new(), Vec::new())
        }
    };

    let tricks = match &wire.tricks_page {
        Field::Valid(page) => decode_list("tricksPage.tricks", &page.tricks, |t| {
            Some(decode_trick(t))
        }),
        other => {
            note_field("tricksPage", other);
            Vec::new()
        }
    };

    let solves = match &wire.solver_page {
        Field::Valid(page) => decode_list("solverPage.solves", &page.solves, |s| {
            Some(decode_solve(s))
        }),
        other => {
            note_field("solverPage", other);
            Vec::new()
        }
    };

    RoundState {
        players,
        hands,
        tasks,
        tricks: annotate_tricks(&tricks),
        solves,
    }
}

fn note_field<T>(path: &str, field: &Field<T>) {
    match field {
        Field::Valid(_) => {}
        Field::Missing => debug!(path, "field absent from snapshot"),
        Field::Invalid(error) => warn!(path, error = %error, "malformed field treated as absent"),
    }
}

/// Decodes each valid element; elements that are malformed or rejected
/// by `decode` are skipped with a warning.
fn decode_list<W, T>(
    path: &str,
    field: &Field<Vec<Field<W>>>,
    decode: impl Fn(&W) -> Option<T>,
) -> Vec<T> {
    let Field::Valid(items) = field else {
        note_field(path, field);
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Field::Valid(w) => {
                let decoded = decode(w);
                if decoded.is_none() {
                    warn!(path, index, "element dropped");
                }
                decoded
            }
            other => {
                note_field(&format!("{path}[{index}]"), other);
                None
            }
        })
        .collect()
}

/// Hands keep their seat index even when a whole hand is unreadable.
fn decode_hands(field: &Field<Vec<Field<Vec<Field<CardWire>>>>>) -> Vec<Vec<Card>> {
    let Field::Valid(hands) = field else {
        note_field("handPage.heldCards", field);
        return Vec::new();
    };
    hands
        .iter()
        .enumerate()
        .map(|(seat, hand)| match hand {
            Field::Valid(cards) => cards
                .iter()
                .enumerate()
                .filter_map(|(index, card)| {
                    decode_card_field(&format!("handPage.heldCards[{seat}][{index}]"), card)
                })
                .collect(),
            other => {
                note_field(&format!("handPage.heldCards[{seat}]"), other);
                Vec::new()
            }
        })
        .collect()
}

fn decode_card_field(path: &str, field: &Field<CardWire>) -> Option<Card> {
    match field {
        Field::Valid(card) => {
            let decoded = decode_card(card);
            if decoded.is_none() {
                warn!(path, suit = %card.suit, value = card.value, "card out of range");
            }
            decoded
        }
        other => {
            note_field(path, other);
            None
        }
    }
}

pub(crate) fn decode_card(card: &CardWire) -> Option<Card> {
    let mut letters = card.suit.chars();
    let (Some(letter), None) = (letters.next(), letters.next()) else {
        return None;
    };
    let suit = Suit::from_letter(letter).ok()?;
    let value = u8::try_from(card.value).ok()?;
    Card::new(suit, value).ok()
}

fn decode_player(player: &PlayerWire) -> Option<Player> {
    let seat = Seat::try_from(player.num).ok()?;
    Some(Player::new(seat, player.name.clone(), player.is_commander))
}

/// Orders that are negative, fractional or above [`MAX_ORDER`] count as missing.
fn decode_order(field: &Field<Number>) -> u32 {
    match field {
        Field::Valid(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .filter(|&n| n <= MAX_ORDER)
            .unwrap_or_else(|| {
                warn!(order = %n, max = MAX_ORDER, "objective order out of range, treated as missing");
                0
            }),
        other => {
            note_field("objective.order", other);
            0
        }
    }
}

fn decode_task(task: &TaskWire) -> Option<Task> {
    let id = task.id.clone().ok()?.into_string();
    let type_name = match &task.kind {
        Field::Valid(name) => name,
        other => {
            note_field("objective.type", other);
            return None;
        }
    };
    let tag = match TaskKindTag::from_type_name(type_name) {
        Ok(tag) => tag,
        Err(e) => {
            warn!(id = %id, error = %e, "objective with unknown type dropped");
            return None;
        }
    };
    let mut decoded = Task::new(id, tag.with_order(decode_order(&task.order)));
    decoded.card = decode_card_field("objective.card", &task.card);
    decoded.player = match &task.player {
        Field::Valid(p) => decode_player(p),
        other => {
            note_field("objective.player", other);
            None
        }
    };
    Some(decoded)
}

fn decode_turn(index: usize, turn: &TurnWire) -> Turn {
    let player = match turn.player.as_ref().ok().and_then(decode_player) {
        Some(player) => player,
        None => {
            // Keep the slot so trick/turn addressing stays aligned.
            warn!(turn = index, "turn without a readable player");
            Player::new(Seat::try_from(index).unwrap_or(Seat::MAX), "", false)
        }
    };
    let card = decode_card_field("turn.card", &turn.card);
    let mut decoded = Turn::new(player, card);
    decoded.is_winner = turn.is_winner.clone().ok().unwrap_or(false);
    decoded
}

fn decode_trick(trick: &TrickWire) -> Trick {
    let turns = match &trick.turns {
        Field::Valid(turns) => turns
            .iter()
            .enumerate()
            .map(|(index, turn)| match turn {
                Field::Valid(t) => decode_turn(index, t),
                other => {
                    note_field("trick.turns", other);
                    decode_turn(index, &TurnWire::default())
                }
            })
            .collect(),
        other => {
            note_field("trick.turns", other);
            Vec::new()
        }
    };
    Trick::new(turns)
}

fn decode_solve(solve: &SolveWire) -> SolveRecord {
    SolveRecord {
        id: solve.id,
        success: solve.success,
        result: solve.result,
        duration_ms: solve.duration.max(0.0).round() as u64,
    }
}
