use crate::domain::trick_progress::{annotate_trick, annotate_tricks};
use crate::domain::{Card, Player, Trick, Turn};

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

fn trick(cards: &[Option<&str>]) -> Trick {
    Trick::new(
        cards
            .iter()
            .enumerate()
            .map(|(i, c)| Turn::new(Player::new(i as u8, format!("P{i}"), false), c.map(card)))
            .collect(),
    )
}

fn flags(trick: &Trick) -> Vec<(bool, bool, bool)> {
    trick
        .turns
        .iter()
        .map(|t| (t.is_leader, t.is_next_to_play, t.is_winner))
        .collect()
}

#[test]
fn first_turn_leads_and_first_gap_is_next() {
    let annotated = annotate_trick(&trick(&[Some("B3"), None, None]));
    assert_eq!(
        flags(&annotated),
        vec![(true, false, false), (false, true, false), (false, false, false)]
    );
}

#[test]
fn fresh_trick_leader_is_also_next() {
    let annotated = annotate_trick(&trick(&[None, None, None, None]));
    assert!(annotated.turns[0].is_leader);
    assert!(annotated.turns[0].is_next_to_play);
    assert_eq!(annotated.turns.iter().filter(|t| t.is_next_to_play).count(), 1);
}

#[test]
fn complete_trick_has_no_next() {
    let annotated = annotate_trick(&trick(&[Some("B3"), Some("B5"), Some("R1")]));
    assert!(annotated.turns.iter().all(|t| !t.is_next_to_play));
    assert!(annotated.turns[0].is_leader);
}

#[test]
fn gap_after_later_play_is_still_first_gap() {
    // Out-of-order corrections can leave holes; the lowest hole is next.
    let annotated = annotate_trick(&trick(&[Some("G1"), None, Some("G2"), None]));
    let next: Vec<usize> = annotated
        .turns
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_next_to_play)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(next, vec![1]);
}

#[test]
fn stale_flags_are_replaced_and_winner_passes_through() {
    let mut input = trick(&[Some("Y9"), Some("Y1"), None]);
    input.turns[2].is_leader = true;
    input.turns[0].is_next_to_play = true;
    input.turns[1].is_winner = true;

    let annotated = annotate_trick(&input);
    assert_eq!(
        flags(&annotated),
        vec![(true, false, false), (false, false, true), (false, true, false)]
    );
    // Input untouched.
    assert!(input.turns[2].is_leader);
}

#[test]
fn empty_trick_stays_empty() {
    assert!(annotate_trick(&Trick::default()).turns.is_empty());
    assert!(annotate_tricks(&[]).is_empty());
}
