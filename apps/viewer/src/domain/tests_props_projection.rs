/// Property-based tests for the projector and the trick annotator
use proptest::prelude::*;

use crate::domain::trick_progress::annotate_trick;
use crate::domain::views::render;
use crate::domain::visibility::possible_cards;
use crate::domain::{test_gens, test_prelude, Card, RoundState};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: viewing as a seat yields exactly that seat's hand, or
    /// nothing when the seat has no known hand.
    #[test]
    fn prop_own_seat_is_own_hand(hands in test_gens::hands(), seat in test_gens::seat()) {
        let got = possible_cards(seat, &hands, Some(seat));
        let expected = hands.get(seat as usize).cloned().unwrap_or_default();
        prop_assert_eq!(got, expected);
    }

    /// Property: for any other seat, the result is every hand except the
    /// viewer's, in ascending seat order, regardless of which seat is asked.
    #[test]
    fn prop_other_seat_is_all_but_viewer(
        hands in test_gens::hands(),
        viewer in test_gens::seat(),
        for_seat in test_gens::seat(),
    ) {
        prop_assume!(for_seat != viewer);
        let expected: Vec<Card> = hands
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != viewer as usize)
            .flat_map(|(_, h)| h.clone())
            .collect();
        prop_assert_eq!(possible_cards(for_seat, &hands, Some(viewer)), expected);
    }

    /// Property: with no viewpoint every seat sees the full multiset.
    #[test]
    fn prop_no_viewpoint_is_everything(hands in test_gens::hands(), seat in test_gens::seat()) {
        let expected: Vec<Card> = hands.concat();
        prop_assert_eq!(possible_cards(seat, &hands, None), expected);
    }

    /// Property: at most one leader and at most one next-to-play, the
    /// leader is turn 0, and the next-to-play is the lowest unplayed turn.
    #[test]
    fn prop_annotation_flags(trick in test_gens::trick()) {
        let annotated = annotate_trick(&trick);
        prop_assert_eq!(annotated.turns.len(), trick.turns.len());

        let leaders: Vec<usize> = annotated.turns.iter().enumerate()
            .filter(|(_, t)| t.is_leader).map(|(i, _)| i).collect();
        prop_assert_eq!(leaders, vec![0]);

        let next: Vec<usize> = annotated.turns.iter().enumerate()
            .filter(|(_, t)| t.is_next_to_play).map(|(i, _)| i).collect();
        let expected: Vec<usize> = trick.turns.iter().position(|t| t.card.is_none())
            .into_iter().collect();
        prop_assert_eq!(next, expected);

        for (before, after) in trick.turns.iter().zip(&annotated.turns) {
            prop_assert_eq!(before.is_winner, after.is_winner);
            prop_assert_eq!(before.card, after.card);
        }
    }

    /// Property: recomputation is a pure function of snapshot and viewpoint.
    #[test]
    fn prop_render_idempotent(
        hands in test_gens::hands(),
        trick in test_gens::trick(),
        viewpoint in test_gens::viewpoint(),
    ) {
        let state = RoundState { hands, tricks: vec![trick], ..RoundState::default() };
        let snapshot = state.clone();
        prop_assert_eq!(render(&state, viewpoint), render(&state, viewpoint));
        prop_assert_eq!(annotate_trick(&state.tricks[0]), annotate_trick(&annotate_trick(&state.tricks[0])));
        prop_assert_eq!(state, snapshot);
    }
}
