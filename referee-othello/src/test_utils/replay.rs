//! Play out and replay whole matches through [`Board`] turn handling.

use crate::{Board, Location, Position};
use derive_more::{Display, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// Move number `index` was not legal when it was played.
    #[display(fmt = "move #{} ({}) is illegal", index, location)]
    IllegalMove {
        index: usize,
        location: Location,
    },
    /// The match was already over before move number `index`.
    #[display(fmt = "match is over before move #{}", index)]
    AlreadyOver { index: usize },
}

/// Play a match to completion from the starting position, letting `choose` pick each
/// move from the non-empty list of legal moves. Returns the moves played, in order.
pub fn play_out<F>(mut choose: F) -> Vec<Location>
where
    F: FnMut(&Position, &[Location]) -> Location,
{
    let mut board = Board::new();
    let mut transcript = Vec::new();

    loop {
        let moves: Vec<Location> = board.position().legal_moves().collect();
        let mv = choose(board.position(), &moves);
        board.apply_move(mv);
        transcript.push(mv);

        if board.advance_turn().is_none() {
            return transcript;
        }
    }
}

/// Replay `moves` from the starting position, applying the same pass rules a referee does.
/// Returns the final position and whether the match has ended.
pub fn replay(moves: &[Location]) -> Result<(Position, bool), ReplayError> {
    let mut board = Board::new();
    let mut finished = false;

    for (index, &location) in moves.iter().enumerate() {
        if finished {
            return Err(ReplayError::AlreadyOver { index });
        }
        if !board.is_move_legal(location) {
            return Err(ReplayError::IllegalMove { index, location });
        }
        board.apply_move(location);
        finished = board.advance_turn().is_none();
    }

    Ok((*board.position(), finished))
}
