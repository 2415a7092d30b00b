//! The round aggregate rendered by the viewer.

use std::collections::HashMap;

use serde::Serialize;

use super::cards_types::Card;
use super::players::{Player, Seat};
use super::solves::SolveRecord;
use super::tasks::{Task, TaskKind};
use super::tricks::Trick;

/// Authoritative round state as last pushed by the game server.
///
/// Built once per inbound snapshot and never mutated afterwards; every
/// derived view is a pure function of this value plus the viewpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    pub players: Vec<Player>,
    /// Per-seat hands; outer index is the seat.
    pub hands: Vec<Vec<Card>>,
    pub tasks: Vec<Task>,
    pub tricks: Vec<Trick>,
    pub solves: Vec<SolveRecord>,
}

/// Invariant violations observed in a snapshot. Reported, never corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MultipleLastTasks { count: usize },
    MultipleCommanders { seats: Vec<Seat> },
    CardHeldTwice { card: Card, seats: Vec<Seat> },
    MultipleLeaders { trick: usize },
    MultipleWinners { trick: usize },
}

impl RoundState {
    /// Hand for `seat`, or an empty slice when the hand is not known.
    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.hands
            .get(seat as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.iter().find(|p| p.seat == seat)
    }

    pub fn commander(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_commander)
    }

    /// Objectives assigned to `seat`, in snapshot order.
    pub fn tasks_for(&self, seat: Seat) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |t| t.player.as_ref().is_some_and(|p| p.seat == seat))
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        let last_count = self
            .tasks
            .iter()
            .filter(|t| t.kind == TaskKind::Last)
            .count();
        if last_count > 1 {
            out.push(Diagnostic::MultipleLastTasks { count: last_count });
        }

        let commanders: Vec<Seat> = self
            .players
            .iter()
            .filter(|p| p.is_commander)
            .map(|p| p.seat)
            .collect();
        if commanders.len() > 1 {
            out.push(Diagnostic::MultipleCommanders { seats: commanders });
        }

        let mut holders: HashMap<Card, Vec<Seat>> = HashMap::new();
        for (seat, hand) in self.hands.iter().enumerate() {
            let Ok(seat) = Seat::try_from(seat) else {
                continue;
            };
            for card in hand {
                holders.entry(*card).or_default().push(seat);
            }
        }
        let mut doubles: Vec<(Card, Vec<Seat>)> = holders
            .into_iter()
            .filter(|(_, seats)| seats.len() > 1)
            .collect();
        doubles.sort_by_key(|(card, _)| *card);
        out.extend(
            doubles
                .into_iter()
                .map(|(card, seats)| Diagnostic::CardHeldTwice { card, seats }),
        );

        for (i, trick) in self.tricks.iter().enumerate() {
            if trick.turns.iter().filter(|t| t.is_leader).count() > 1 {
                out.push(Diagnostic::MultipleLeaders { trick: i });
            }
            if trick.turns.iter().filter(|t| t.is_winner).count() > 1 {
                out.push(Diagnostic::MultipleWinners { trick: i });
            }
        }

        out
    }
}
