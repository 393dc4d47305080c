//! Players, cells and match-level scoring.

use crate::MAX_SCORE;
use std::fmt;

/// One of the two players in a match.
///
/// `First` moves first and is drawn as `x`; `Second` is drawn as `o`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Default for Player {
    /// Gets the starting player.
    fn default() -> Self {
        Self::First
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl Player {
    /// The role label passed to a player program on its command line.
    pub fn role(self) -> &'static str {
        match self {
            Player::First => "FIRST",
            Player::Second => "SECOND",
        }
    }

    /// The symbol used for this player's tiles in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'x',
            Player::Second => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role())
    }
}

/// The contents of one space on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl Cell {
    /// The diagram symbol for this cell: `.`, `x` or `o`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Taken(player) => player.symbol(),
        }
    }

    /// Parse a diagram symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'x' => Some(Cell::Taken(Player::First)),
            'o' => Some(Cell::Taken(Player::Second)),
            _ => None,
        }
    }
}

/// Who won a match, judged from its signed score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Player(Player),
    Draw,
}

impl Winner {
    /// Classify a score expressed as `First` tiles minus `Second` tiles.
    pub fn from_score(score: i8) -> Self {
        match score {
            s if s > 0 => Winner::Player(Player::First),
            s if s < 0 => Winner::Player(Player::Second),
            _ => Winner::Draw,
        }
    }
}

/// The score awarded when `offender` forfeits: always the maximum in favor of its opponent.
pub fn forfeit_score(offender: Player) -> i8 {
    match offender {
        Player::First => -MAX_SCORE,
        Player::Second => MAX_SCORE,
    }
}
