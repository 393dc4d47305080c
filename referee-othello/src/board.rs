//! Turn-level match state: a [`Position`] plus an optional transcript sink.

use crate::{Location, Player, Position};
use std::fmt;
use std::io::Write;
use tracing::warn;

/// An append-only destination for board snapshots.
pub type LogSink = Box<dyn Write + Send>;

/// The board a referee drives through a match.
///
/// Unlike [`Position`], a `Board` decides whose turn comes next: after each move,
/// [`Board::advance_turn`] skips a player with no legal move and detects the end of the
/// match.
pub struct Board {
    position: Position,
    log: Option<LogSink>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("position", &self.position)
            .field("logging", &self.log.is_some())
            .finish()
    }
}

impl Board {
    /// The starting board, without a transcript.
    pub fn new() -> Self {
        Self::from_position(Position::new(), None)
    }

    /// The starting board, writing a snapshot to `log` on every turn.
    pub fn with_log(log: LogSink) -> Self {
        Self::from_position(Position::new(), Some(log))
    }

    pub fn from_position(position: Position, log: Option<LogSink>) -> Self {
        Self { position, log }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The player due to move.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.position.to_move()
    }

    #[inline]
    pub fn is_move_legal(&self, loc: Location) -> bool {
        self.position.is_move_legal(loc)
    }

    /// Play `loc` for the current player. The move must already be known to be legal.
    /// Returns the number of tiles flipped.
    #[inline]
    pub fn apply_move(&mut self, loc: Location) -> usize {
        self.position.apply_move(loc)
    }

    /// Write a snapshot of the board to the log, then hand the turn to the next player
    /// able to move.
    ///
    /// The opponent of the player who just moved goes next if it has a legal move;
    /// otherwise it passes and the same player goes again. Returns the player now due,
    /// or `None` if neither player can move and the match is over.
    pub fn advance_turn(&mut self) -> Option<Player> {
        self.write_snapshot();

        self.position.pass();
        if self.position.has_legal_move() {
            return Some(self.position.to_move());
        }

        self.position.pass();
        if self.position.has_legal_move() {
            Some(self.position.to_move())
        } else {
            None
        }
    }

    fn write_snapshot(&mut self) {
        let position = self.position;
        if let Some(log) = self.log.as_mut() {
            if let Err(err) = writeln!(log, "{}", position) {
                warn!(%err, "failed to write board snapshot");
            }
        }
    }

    #[inline]
    pub fn count_tiles(&self, player: Player) -> usize {
        self.position.count_tiles(player)
    }

    /// Score as `First` tiles minus `Second` tiles.
    #[inline]
    pub fn score(&self) -> i8 {
        self.position.score()
    }

    /// The transcript sink, if tracking is enabled.
    pub fn log(&mut self) -> Option<&mut (dyn Write + Send + 'static)> {
        self.log.as_deref_mut()
    }

    /// Release the board, handing back its transcript sink.
    pub fn into_log(self) -> Option<LogSink> {
        self.log
    }
}
