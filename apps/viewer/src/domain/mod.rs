//! Domain layer: round value types and the pure projection engine.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod numbering;
pub mod players;
pub mod solves;
pub mod state;
pub mod tasks;
pub mod tokens;
pub mod trick_progress;
pub mod tricks;
pub mod views;
pub mod visibility;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_numbering;
#[cfg(test)]
mod tests_props_projection;
#[cfg(test)]
mod tests_trick_progress;
#[cfg(test)]
mod tests_views;
#[cfg(test)]
mod tests_visibility;

// Re-exports for ergonomics
pub use cards_types::{full_deck, Card, Suit};
pub use numbering::{AddObjective, ObjectiveNumbering};
pub use players::{display_player, Player, Seat};
pub use solves::{SolveOutcome, SolveRecord};
pub use state::{Diagnostic, RoundState};
pub use tasks::{Task, TaskId, TaskKind, TaskKindTag, MAX_ORDER};
pub use tokens::{task_token, task_token_str};
pub use trick_progress::{annotate_trick, annotate_tricks};
pub use tricks::{Trick, Turn};
pub use views::{render, AppView};
pub use visibility::{possible_cards, Viewpoint};
