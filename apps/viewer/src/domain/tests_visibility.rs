use crate::domain::visibility::{possible_cards, Viewpoint};
use crate::domain::Card;

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("hardcoded valid card token"))
        .collect()
}

fn table() -> Vec<Vec<Card>> {
    vec![
        parse_cards(&["B1", "B2"]),
        parse_cards(&["Y3"]),
        parse_cards(&["M4", "R4"]),
        parse_cards(&["G9"]),
    ]
}

#[test]
fn own_seat_sees_exactly_own_hand() {
    let hands = table();
    assert_eq!(possible_cards(2, &hands, Some(2)), parse_cards(&["M4", "R4"]));
    assert_eq!(possible_cards(0, &hands, Some(0)), parse_cards(&["B1", "B2"]));
}

#[test]
fn own_seat_out_of_range_is_empty() {
    let hands = table();
    assert!(possible_cards(7, &hands, Some(7)).is_empty());
    assert!(possible_cards(0, &[], Some(0)).is_empty());
}

#[test]
fn other_seat_sees_every_hand_but_viewers() {
    let hands = table();
    let expected = parse_cards(&["B1", "B2", "M4", "R4", "G9"]);
    // Independent of which other seat is asked about.
    assert_eq!(possible_cards(0, &hands, Some(1)), expected);
    assert_eq!(possible_cards(2, &hands, Some(1)), expected);
    assert_eq!(possible_cards(3, &hands, Some(1)), expected);
}

#[test]
fn no_viewpoint_sees_all_hands_in_seat_order() {
    let hands = table();
    let expected = parse_cards(&["B1", "B2", "Y3", "M4", "R4", "G9"]);
    for seat in 0..4 {
        assert_eq!(possible_cards(seat, &hands, None), expected);
    }
}

#[test]
fn viewpoint_beyond_table_excludes_nobody() {
    let hands = table();
    assert_eq!(possible_cards(0, &hands, Some(9)).len(), 6);
}

#[test]
fn empty_hands_project_to_empty() {
    let hands = vec![vec![], vec![], vec![]];
    assert!(possible_cards(0, &hands, Some(0)).is_empty());
    assert!(possible_cards(0, &hands, Some(1)).is_empty());
    assert!(possible_cards(0, &hands, None).is_empty());
}

#[test]
fn duplicates_are_not_collapsed() {
    let hands = vec![parse_cards(&["B1"]), parse_cards(&["B1"])];
    assert_eq!(possible_cards(0, &hands, None), parse_cards(&["B1", "B1"]));
}

#[test]
fn projection_leaves_hands_untouched() {
    let hands = table();
    let before = hands.clone();
    let _ = Viewpoint::seat(1).possible_cards(0, &hands);
    let _ = Viewpoint::NONE.possible_cards(3, &hands);
    assert_eq!(hands, before);
}
