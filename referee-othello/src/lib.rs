//! `referee-othello` holds the rules a referee needs to adjudicate an Othello match.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Position`] is a plain `Copy` value with every rule operation: legality, flipping,
//!    passing and counting. Its mutating operations are unchecked; callers must validate
//!    moves with [`Position::is_move_legal`] before applying them.
//!  - [`Board`] owns a [`Position`] plus an optional transcript sink and drives turn
//!    order: after every move it hands the turn to whoever can play, or reports that
//!    nobody can.
//!
//! Coordinates are `(row, col)` in row-major order, and moves are written `<column><row>`,
//! so `"D2"` is row 2, column 3.

pub mod test_utils;

mod board;
mod game;
mod location;
mod position;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use position::*;
pub use utils::COLUMN_HEADER;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

/// The magnitude of the score awarded when a player forfeits.
pub const MAX_SCORE: i8 = NUM_SPACES as i8;
