//! Property-based tests over random move sequences.

use proptest::prelude::*;

use virtucube_core::{CubeModel, Direction, Face, Move, MoveEngine};

fn arb_face() -> impl Strategy<Value = Face> {
    (0..Face::ALL.len()).prop_map(|i| Face::ALL[i])
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    (0..Direction::ALL.len()).prop_map(|i| Direction::ALL[i])
}

fn arb_move() -> impl Strategy<Value = Move> {
    (arb_face(), arb_direction()).prop_map(|(face, direction)| Move::new(face, direction))
}

/// A reachable model: any move sequence applied to the solved cube.
fn arb_model() -> impl Strategy<Value = CubeModel> {
    proptest::collection::vec(arb_move(), 0..40)
        .prop_map(|moves| MoveEngine::apply_all(&CubeModel::solved(), moves))
}

proptest! {
    #[test]
    fn prop_color_conservation(model in arb_model()) {
        prop_assert_eq!(model.color_counts(), [9; 6]);
    }

    #[test]
    fn prop_move_then_inverse_is_identity(model in arb_model(), mv in arb_move()) {
        let there = MoveEngine::apply(&model, mv);
        let back = MoveEngine::apply(&there, mv.inverse());
        prop_assert_eq!(back, model);
    }

    #[test]
    fn prop_double_equals_two_quarters(model in arb_model(), face in arb_face()) {
        let double = MoveEngine::apply(&model, Move::new(face, Direction::Double));
        let cw = Move::new(face, Direction::Clockwise);
        let two = MoveEngine::apply(&MoveEngine::apply(&model, cw), cw);
        prop_assert_eq!(double, two);
    }

    #[test]
    fn prop_four_quarters_close(model in arb_model(), face in arb_face()) {
        let cw = Move::new(face, Direction::Clockwise);
        let mut walked = model.clone();
        for _ in 0..4 {
            walked = MoveEngine::apply(&walked, cw);
        }
        prop_assert_eq!(walked, model);
    }

    #[test]
    fn prop_sequence_then_reversed_inverses_solve(
        moves in proptest::collection::vec(arb_move(), 0..30)
    ) {
        let scrambled = MoveEngine::apply_all(&CubeModel::solved(), moves.iter().copied());
        let inverse = moves.iter().rev().map(|mv| mv.inverse());
        let back = MoveEngine::apply_all(&scrambled, inverse);
        prop_assert!(back.is_solved());
    }

    #[test]
    fn prop_apply_preserves_source_model(model in arb_model(), mv in arb_move()) {
        let before = model.clone();
        let _next = MoveEngine::apply(&model, mv);
        prop_assert_eq!(model, before);
    }

    #[test]
    fn prop_notation_round_trips(moves in proptest::collection::vec(arb_move(), 0..20)) {
        let text = virtucube_core::format_sequence(&moves);
        let parsed = Move::parse_sequence(&text).unwrap();
        prop_assert_eq!(parsed, moves);
    }
}
