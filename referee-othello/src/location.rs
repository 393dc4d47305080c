//! Code for working with [`Location`]s on the Othello board.

use crate::EDGE_LENGTH;
use derive_more::{Display, Error};
use itertools::Itertools;
use std::fmt::{self, Formatter, Write};

const COLUMN_LETTERS: &str = "ABCDEFGH";

/// A location on the Othello board, addressed as `(row, col)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    row: u8,
    col: u8,
}

/// The eight compass directions as `(row delta, column delta)`.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

impl Location {
    /// Construct a Location from row and column coordinates.
    /// Returns None if the coordinates are off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    /// The neighbouring location one step in direction `(dr, dc)`, if it is on the board.
    #[inline]
    pub fn step(self, (dr, dc): (i8, i8)) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..EDGE_LENGTH)
            .cartesian_product(0..EDGE_LENGTH)
            .map(|(row, col)| Location {
                row: row as u8,
                col: col as u8,
            })
    }
}

/// Convert this [`Location`] into wire notation (`"D2"` is column D, row 2).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_LETTERS
            .chars()
            .nth(self.col as usize)
            .ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", self.row)
    }
}

/// Why a move token could not be turned into a [`Location`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseLocationError {
    /// The token is not a letter followed by a row number.
    #[display(fmt = "malformed move token")]
    Malformed,
    /// The token has the right shape but names a space off the board.
    #[display(fmt = "move token is off the board")]
    OffBoard,
}

/// Build a [`Location`] from wire notation: an uppercase column letter `A`-`H`
/// followed by a row number `0`-`7`.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(ParseLocationError::Malformed)?;
        let digits = chars.as_str();

        if !col_char.is_ascii_alphabetic()
            || digits.is_empty()
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseLocationError::Malformed);
        }

        let col = COLUMN_LETTERS
            .find(col_char)
            .ok_or(ParseLocationError::OffBoard)?;
        let row: usize = digits.parse().or(Err(ParseLocationError::OffBoard))?;

        Self::from_coords(row, col).ok_or(ParseLocationError::OffBoard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_coords() {
        assert_eq!(
            Location::from_coords(0, 0),
            Some(Location { row: 0, col: 0 })
        );
        assert_eq!(Location::from_coords(7, 7).unwrap().to_coords(), (7, 7));
        assert_eq!(Location::from_coords(0, 8), None);
        assert_eq!(Location::from_coords(8, 0), None);
    }

    #[test]
    fn location_step() {
        let corner = Location::from_coords(0, 0).unwrap();
        assert_eq!(corner.step((-1, 0)), None);
        assert_eq!(corner.step((0, -1)), None);
        assert_eq!(corner.step((1, 1)), Location::from_coords(1, 1));
        assert_eq!(Location::from_coords(7, 3).unwrap().step((1, 0)), None);
    }

    #[test]
    fn all_locations_are_row_major() {
        let all: Vec<Location> = Location::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0].to_coords(), (0, 0));
        assert_eq!(all[1].to_coords(), (0, 1));
        assert_eq!(all[8].to_coords(), (1, 0));
        assert_eq!(all[63].to_coords(), (7, 7));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A0"), Ok(Location { row: 0, col: 0 }));
        assert_eq!(Location::from_str("H7").unwrap().to_coords(), (7, 7));
        assert_eq!(Location::from_str("D3").unwrap().to_coords(), (3, 3));
        assert_eq!(Location::from_str("C5").unwrap().to_coords(), (5, 2));
    }

    #[test]
    fn location_from_str_malformed() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError::Malformed));
        assert_eq!(Location::from_str("A"), Err(ParseLocationError::Malformed));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError::Malformed));
        assert_eq!(Location::from_str("3D"), Err(ParseLocationError::Malformed));
        assert_eq!(Location::from_str("D3x"), Err(ParseLocationError::Malformed));
        assert_eq!(Location::from_str("PASS"), Err(ParseLocationError::Malformed));
    }

    #[test]
    fn location_from_str_off_board() {
        assert_eq!(Location::from_str("A8"), Err(ParseLocationError::OffBoard));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError::OffBoard));
        assert_eq!(Location::from_str("d3"), Err(ParseLocationError::OffBoard));
        assert_eq!(Location::from_str("B12"), Err(ParseLocationError::OffBoard));
        assert_eq!(
            Location::from_str("B99999999999999"),
            Err(ParseLocationError::OffBoard)
        );
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::from_coords(0, 0).unwrap().to_string(), "A0");
        assert_eq!(Location::from_coords(7, 7).unwrap().to_string(), "H7");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }
}
