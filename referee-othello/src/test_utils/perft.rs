//! "Perft": count the leaves of the game tree to a fixed depth, to check move generation
//! and flipping against published counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::Position;

/// Leaves `depth` plies below the starting position.
pub fn run_perft(depth: u64) -> u64 {
    perft(Position::new(), depth)
}

/// Leaves `depth` plies below `position`. A forced pass counts as a ply; a finished match
/// is a single leaf however deep the search.
pub fn perft(position: Position, depth: u64) -> u64 {
    leaves_below(position, depth, false)
}

fn leaves_below(position: Position, depth: u64, passed: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = position.legal_moves().peekable();
    if moves.peek().is_none() {
        if passed {
            return 1;
        }
        let mut next = position;
        next.pass();
        return leaves_below(next, depth - 1, true);
    }

    moves
        .map(|mv| {
            let mut next = position;
            next.apply_move(mv);
            next.pass();
            leaves_below(next, depth - 1, false)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn starting_position_counts() {
        let expected = [1, 4, 12, 56, 244, 1396, 8200];
        for (depth, &leaves) in expected.iter().enumerate() {
            assert_eq!(run_perft(depth as u64), leaves, "depth {}", depth);
        }
    }

    #[test]
    fn forced_pass_is_a_ply() {
        // Second cannot answer either of First's two moves, so both lines pass.
        let position = Position::from_str(
            "x . . . . . . .
             o . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . o x",
        )
        .unwrap();

        assert_eq!(perft(position, 1), 2);
        assert_eq!(perft(position, 2), 2);
    }

    #[test]
    fn finished_match_is_one_leaf() {
        let position = Position::from_str(
            "x x x . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .
             . . . . . . . .",
        )
        .unwrap();

        assert_eq!(perft(position, 5), 1);
    }
}
