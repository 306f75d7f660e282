//! Property tests for the decision rule.

use proptest::prelude::*;

use super::{decide, Move, Outcome};

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

proptest! {
    #[test]
    fn swapping_sides_reverses_the_outcome(a in any_move(), b in any_move()) {
        prop_assert_eq!(decide(a, b).result, decide(b, a).result.reversed());
    }

    #[test]
    fn distinct_moves_have_exactly_one_winner(a in any_move(), b in any_move()) {
        prop_assume!(a != b);
        let wins = [decide(a, b).result, decide(b, a).result]
            .iter()
            .filter(|o| **o == Outcome::Win)
            .count();
        prop_assert_eq!(wins, 1);
    }

    #[test]
    fn draw_iff_equal(a in any_move(), b in any_move()) {
        prop_assert_eq!(decide(a, b).result == Outcome::Draw, a == b);
    }

    #[test]
    fn win_iff_rule_table_says_so(a in any_move(), b in any_move()) {
        prop_assert_eq!(decide(a, b).result == Outcome::Win, a.beats() == b);
    }
}
