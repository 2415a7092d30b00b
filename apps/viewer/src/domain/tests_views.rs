//! Rendered page tests.

use crate::domain::views::render;
use crate::domain::{
    Card, Player, RoundState, SolveOutcome, SolveRecord, Task, TaskKind, Trick, Turn, Viewpoint,
};

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("hardcoded valid card token"))
        .collect()
}

fn players() -> Vec<Player> {
    vec![
        Player::new(0, "Ada", false),
        Player::new(1, "Bo", true),
        Player::new(2, "Cy", false),
    ]
}

fn round() -> RoundState {
    let p = players();
    RoundState {
        hands: vec![
            parse_cards(&["B1", "B2"]),
            parse_cards(&["R4", "Y7"]),
            parse_cards(&["G5"]),
        ],
        tasks: vec![
            Task::new("1", TaskKind::Absolute(1))
                .with_card(parse_cards(&["Y7"])[0])
                .with_player(p[1].clone()),
            Task::new("2", TaskKind::Relative(1)),
            Task::new("3", TaskKind::Last).with_player(p[0].clone()),
        ],
        tricks: vec![
            Trick::new(vec![
                Turn::new(p[0].clone(), Some(parse_cards(&["B3"])[0])),
                Turn::new(p[1].clone(), Some(parse_cards(&["B9"])[0])).winner(),
                Turn::new(p[2].clone(), Some(parse_cards(&["B4"])[0])),
            ]),
            Trick::new(vec![
                Turn::new(p[1].clone(), None),
                Turn::new(p[2].clone(), None),
                Turn::new(p[0].clone(), None),
            ]),
        ],
        solves: vec![SolveRecord {
            id: 4,
            success: true,
            result: false,
            duration_ms: 250,
        }],
        players: p,
    }
}

#[test]
fn hand_page_shows_own_hand_only_for_a_viewpoint() {
    let state = round();
    let seated = render(&state, Viewpoint::seat(1));
    assert_eq!(seated.hand_page.own_hand, parse_cards(&["R4", "Y7"]));
    assert_eq!(seated.hand_page.held_cards.len(), 3);

    let unseated = render(&state, Viewpoint::NONE);
    assert!(unseated.hand_page.own_hand.is_empty());
}

#[test]
fn objective_page_tokens_and_numbering() {
    let view = render(&round(), Viewpoint::NONE);
    let page = &view.objective_page;

    let tokens: Vec<&str> = page.tasks.iter().map(|t| t.token.as_str()).collect();
    assert_eq!(tokens, vec!["1", "<", "Ω"]);
    assert_eq!(page.tasks[0].player_label, "Bo🧑‍🚀");
    assert_eq!(page.tasks[1].player_label, "?");

    assert_eq!(page.numbering.next_absolute, 2);
    assert_eq!(page.numbering.next_relative, 2);
    assert!(page.numbering.have_last);
    assert!(!page.add_buttons[3].enabled);

    let labels: Vec<&str> = page.players.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Ada", "Bo🧑‍🚀", "Cy"]);
}

#[test]
fn tricks_page_annotates_and_projects() {
    let view = render(&round(), Viewpoint::seat(2));
    let tricks = &view.tricks_page.tricks;
    assert_eq!(tricks.len(), 2);

    let done = &tricks[0];
    assert!(done.turns[0].turn.is_leader);
    assert!(done.turns[1].turn.is_winner);
    assert!(done.turns.iter().all(|t| !t.turn.is_next_to_play));

    let open = &tricks[1];
    assert_eq!(open.trick_no, 1);
    assert!(open.turns[0].turn.is_leader);
    assert!(open.turns[0].turn.is_next_to_play);
    assert_eq!(open.turns[0].player_label, "Bo🧑‍🚀");

    // Seat 2's own turn: only its hand.
    assert_eq!(open.turns[1].selectable, parse_cards(&["G5"]));
    // Other seats: every hand except seat 2's.
    assert_eq!(
        open.turns[0].selectable,
        parse_cards(&["B1", "B2", "R4", "Y7"])
    );
    assert_eq!(open.turns[2].selectable, open.turns[0].selectable);
}

#[test]
fn control_panel_groups_tasks_by_seat() {
    let view = render(&round(), Viewpoint::NONE);
    let panel = &view.control_panel;
    assert_eq!(panel.players.len(), 3);

    let ids = |seat: usize| -> Vec<String> {
        panel.players[seat]
            .tasks
            .iter()
            .map(|t| t.task.id.to_string())
            .collect()
    };
    assert_eq!(ids(0), vec!["3"]);
    assert_eq!(ids(1), vec!["1"]);
    assert!(ids(2).is_empty());
    assert_eq!(panel.players[2].hand, parse_cards(&["G5"]));
    assert_eq!(panel.tricks, view.tricks_page.tricks);
}

#[test]
fn solver_page_labels() {
    let view = render(&round(), Viewpoint::NONE);
    let solve = &view.solver_page.solves[0];
    assert_eq!(solve.outcome, SolveOutcome::NotWinnable);
    assert_eq!(solve.label, "Not winnable");
    assert_eq!(solve.duration_label, "250ms");
}

#[test]
fn empty_round_renders_empty_pages() {
    let view = render(&RoundState::default(), Viewpoint::seat(0));
    assert!(view.hand_page.own_hand.is_empty());
    assert!(view.objective_page.tasks.is_empty());
    assert_eq!(view.objective_page.add_buttons.len(), 4);
    assert!(view.tricks_page.tricks.is_empty());
    assert!(view.control_panel.players.is_empty());
    assert!(view.solver_page.solves.is_empty());
}

#[test]
fn view_json_shape() {
    let view = render(&round(), Viewpoint::seat(0));
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["viewpoint"], 0);
    assert_eq!(json["objectivePage"]["nextAbsolute"], 2);
    assert_eq!(json["objectivePage"]["haveLast"], true);
    assert_eq!(json["objectivePage"]["tasks"][2]["type"], "last");
    assert_eq!(json["objectivePage"]["tasks"][2]["token"], "Ω");
    assert_eq!(
        json["tricksPage"]["tricks"][1]["turns"][0]["isNextToPlay"],
        true
    );
    assert_eq!(json["solverPage"]["solves"][0]["duration"], 250);
    assert_eq!(json["handPage"]["ownHand"][0]["suit"], "B");
}
