//! The rule core: an 8x8 grid of [`Cell`]s and the player to move.
//!
//! Mutating operations here are unchecked. [`Position::apply_move`] trusts its caller to
//! have confirmed legality with [`Position::is_move_legal`] first.

use crate::location::DIRECTIONS;
use crate::{utils, Cell, Location, Player, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The complete rule state of a match between turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
    to_move: Player,
}

impl Default for Position {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The starting position: two tiles each on the center diagonals, `First` to move.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::Taken(Player::Second);
        cells[4][4] = Cell::Taken(Player::Second);
        cells[3][4] = Cell::Taken(Player::First);
        cells[4][3] = Cell::Taken(Player::First);

        Self {
            cells,
            to_move: Player::First,
        }
    }

    /// Build a position from raw cells.
    pub fn from_cells(cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH], to_move: Player) -> Self {
        Self { cells, to_move }
    }

    /// The player whose move it is.
    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        let (row, col) = loc.to_coords();
        self.cells[row][col]
    }

    fn set(&mut self, loc: Location, cell: Cell) {
        let (row, col) = loc.to_coords();
        self.cells[row][col] = cell;
    }

    /// Length of the run of opponent tiles bracketed by the mover in direction `dir`,
    /// or 0 if that direction does not bracket anything.
    fn bracketed_run(&self, loc: Location, dir: (i8, i8)) -> usize {
        let mover = Cell::Taken(self.to_move);
        let opponent = Cell::Taken(!self.to_move);

        let mut run = 0;
        let mut cursor = loc.step(dir);
        while let Some(next) = cursor {
            match self.cell(next) {
                cell if cell == opponent => run += 1,
                cell if cell == mover => return run,
                _ => return 0,
            }
            cursor = next.step(dir);
        }
        0
    }

    /// Whether the player to move may play at `loc`: it must be empty and bracket at least
    /// one run of opponent tiles in some direction.
    pub fn is_move_legal(&self, loc: Location) -> bool {
        self.cell(loc) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&dir| self.bracketed_run(loc, dir) > 0)
    }

    /// Place a tile for the player to move at `loc` and flip every bracketed run.
    /// Does not change whose move it is. Returns the number of tiles flipped.
    ///
    /// The move must already be known to be legal.
    pub fn apply_move(&mut self, loc: Location) -> usize {
        let mover = Cell::Taken(self.to_move);
        self.set(loc, mover);

        let mut flipped = 0;
        for &dir in DIRECTIONS.iter() {
            let run = self.bracketed_run(loc, dir);
            let mut cursor = loc;
            for _ in 0..run {
                // The run lies entirely on the board, so each step exists.
                if let Some(next) = cursor.step(dir) {
                    self.set(next, mover);
                    cursor = next;
                }
            }
            flipped += run;
        }
        flipped
    }

    /// Hand the move to the other player without placing a tile.
    #[inline]
    pub fn pass(&mut self) {
        self.to_move = !self.to_move;
    }

    /// All legal moves for the player to move, in row-major order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Location> + '_ {
        Location::all().filter(move |&loc| self.is_move_legal(loc))
    }

    /// Whether the player to move has any legal move.
    pub fn has_legal_move(&self) -> bool {
        self.legal_moves().next().is_some()
    }

    /// Number of tiles owned by `player`.
    pub fn count_tiles(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Taken(player))
            .count()
    }

    /// Number of empty spaces.
    pub fn count_empty(&self) -> usize {
        NUM_SPACES - self.count_tiles(Player::First) - self.count_tiles(Player::Second)
    }

    /// Score as `First` tiles minus `Second` tiles.
    pub fn score(&self) -> i8 {
        self.count_tiles(Player::First) as i8 - self.count_tiles(Player::Second) as i8
    }

    /// The same position with every tile and the turn handed to the other player.
    pub fn swap_players(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut().flatten() {
            if let Cell::Taken(owner) = *cell {
                *cell = Cell::Taken(!owner);
            }
        }
        swapped.to_move = !self.to_move;
        swapped
    }

    /// Cell symbols in row-major order.
    pub(crate) fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flatten().map(|cell| cell.symbol())
    }
}

/// Displays the transcript grid: one `<row> ` prefix per line, then ` <symbol>` per cell.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.symbols(), f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParsePositionError {
    #[display(fmt = "unknown cell symbol")]
    BadSymbol,
    #[display(fmt = "a position needs exactly 64 cells")]
    WrongLength,
}

/// Parse 64 cell symbols (`.`, `x`, `o`) in row-major order, ignoring whitespace.
/// The parsed position has `First` to move.
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        let mut count = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_symbol(symbol).ok_or(ParsePositionError::BadSymbol)?;
            if count >= NUM_SPACES {
                return Err(ParsePositionError::WrongLength);
            }
            cells[count / EDGE_LENGTH][count % EDGE_LENGTH] = cell;
            count += 1;
        }

        if count != NUM_SPACES {
            return Err(ParsePositionError::WrongLength);
        }

        Ok(Self::from_cells(cells, Player::First))
    }
}
