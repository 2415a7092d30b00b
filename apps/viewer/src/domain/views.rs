//! Derived per-page views of a round, as the host UI renders them.
//!
//! Everything here is recomputed from scratch on each snapshot or viewpoint
//! change. Never panics; missing data renders as empty.

use serde::Serialize;

use super::cards_types::Card;
use super::numbering::{AddObjective, ObjectiveNumbering};
use super::players::{display_player, Player, Seat};
use super::solves::{SolveOutcome, SolveRecord};
use super::state::RoundState;
use super::tasks::Task;
use super::trick_progress::annotate_trick;
use super::tricks::{Trick, Turn};
use super::visibility::Viewpoint;

/// Top-level view combining every page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppView {
    pub viewpoint: Viewpoint,
    pub hand_page: HandPage,
    pub objective_page: ObjectivePage,
    pub tricks_page: TricksPage,
    pub control_panel: ControlPanel,
    pub solver_page: SolverPage,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandPage {
    /// The viewed seat's own hand; empty with no viewpoint.
    pub own_hand: Vec<Card>,
    pub held_cards: Vec<Vec<Card>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub token: String,
    pub player_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectivePage {
    pub tasks: Vec<TaskView>,
    #[serde(flatten)]
    pub numbering: ObjectiveNumbering,
    pub add_buttons: Vec<AddObjective>,
    pub players: Vec<PlayerOption>,
}

/// Entry in a player picker.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOption {
    pub seat: Seat,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnView {
    #[serde(flatten)]
    pub turn: Turn,
    pub turn_no: usize,
    pub player_label: String,
    /// Cards the viewer may set for this turn.
    pub selectable: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickView {
    pub trick_no: usize,
    pub turns: Vec<TurnView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TricksPage {
    pub tricks: Vec<TrickView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatPanel {
    pub player: Player,
    pub label: String,
    pub hand: Vec<Card>,
    pub tasks: Vec<TaskView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPanel {
    pub players: Vec<SeatPanel>,
    pub tricks: Vec<TrickView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveView {
    #[serde(flatten)]
    pub record: SolveRecord,
    pub outcome: SolveOutcome,
    pub label: String,
    pub duration_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverPage {
    pub solves: Vec<SolveView>,
}

/// Entry point: render every page for `state` as seen from `viewpoint`.
pub fn render(state: &RoundState, viewpoint: Viewpoint) -> AppView {
    let tricks = render_tricks(state, viewpoint);

    AppView {
        viewpoint,
        hand_page: render_hand_page(state, viewpoint),
        objective_page: render_objective_page(state),
        tricks_page: TricksPage {
            tricks: tricks.clone(),
        },
        control_panel: render_control_panel(state, tricks),
        solver_page: render_solver_page(state),
    }
}

fn render_hand_page(state: &RoundState, viewpoint: Viewpoint) -> HandPage {
    let own_hand = viewpoint
        .viewing_as()
        .map(|seat| state.hand(seat).to_vec())
        .unwrap_or_default();

    HandPage {
        own_hand,
        held_cards: state.hands.clone(),
    }
}

fn task_view(task: &Task) -> TaskView {
    TaskView {
        token: task.kind.token(),
        player_label: display_player(task.player.as_ref()),
        task: task.clone(),
    }
}

fn render_objective_page(state: &RoundState) -> ObjectivePage {
    let numbering = ObjectiveNumbering::from_tasks(&state.tasks);

    ObjectivePage {
        tasks: state.tasks.iter().map(task_view).collect(),
        numbering,
        add_buttons: numbering.affordances(),
        players: state
            .players
            .iter()
            .map(|p| PlayerOption {
                seat: p.seat,
                label: p.display_name(),
            })
            .collect(),
    }
}

fn render_trick(trick_no: usize, trick: &Trick, state: &RoundState, viewpoint: Viewpoint) -> TrickView {
    let annotated = annotate_trick(trick);
    let turns = annotated
        .turns
        .into_iter()
        .enumerate()
        .map(|(turn_no, turn)| TurnView {
            player_label: turn.player.display_name(),
            selectable: viewpoint.possible_cards(turn.player.seat, &state.hands),
            turn_no,
            turn,
        })
        .collect();

    TrickView { trick_no, turns }
}

fn render_tricks(state: &RoundState, viewpoint: Viewpoint) -> Vec<TrickView> {
    state
        .tricks
        .iter()
        .enumerate()
        .map(|(i, trick)| render_trick(i, trick, state, viewpoint))
        .collect()
}

fn render_control_panel(state: &RoundState, tricks: Vec<TrickView>) -> ControlPanel {
    let players = state
        .players
        .iter()
        .map(|player| SeatPanel {
            label: player.display_name(),
            hand: state.hand(player.seat).to_vec(),
            tasks: state.tasks_for(player.seat).map(task_view).collect(),
            player: player.clone(),
        })
        .collect();

    ControlPanel { players, tricks }
}

fn render_solver_page(state: &RoundState) -> SolverPage {
    let solves = state
        .solves
        .iter()
        .map(|record| {
            let outcome = record.outcome();
            SolveView {
                outcome,
                label: outcome.label().to_string(),
                duration_label: record.duration_label(),
                record: record.clone(),
            }
        })
        .collect();

    SolverPage { solves }
}
