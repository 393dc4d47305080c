//! The match orchestrator: relays moves between two players, enforces the rules and
//! decides how the match ended.

use crate::config::MatchConfig;
use crate::connectors::{check_executable, Connector, ProcessConnector};
use crate::error::{RefereeError, Result};
use crate::transcript;
use referee_othello::{forfeit_score, Board, Location, ParseLocationError, Player, Winner};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info, warn};

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Neither player could move. The score is the tile difference.
    NormalEnd,
    /// `offender` proposed a move the rules do not allow.
    IllegalMove { offender: Player },
    /// `offender` closed its output, failed to produce a readable move, or was killed for
    /// exceeding its CPU limit.
    PlayerFault { offender: Player },
}

impl Termination {
    /// The player who forfeited, if any.
    pub fn offender(self) -> Option<Player> {
        match self {
            Termination::NormalEnd => None,
            Termination::IllegalMove { offender } | Termination::PlayerFault { offender } => {
                Some(offender)
            }
        }
    }

    /// The transcript note recording an early end.
    pub fn note(self) -> Option<&'static str> {
        match self {
            Termination::NormalEnd => None,
            Termination::IllegalMove { .. } => Some("Bad move"),
            Termination::PlayerFault { .. } => Some("Player crashed"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// `FIRST` tiles minus `SECOND` tiles, or ±64 in favor of the opponent of a player
    /// who forfeited.
    pub score: i8,
    pub termination: Termination,
}

impl MatchResult {
    pub fn new(termination: Termination, score: i8) -> Self {
        Self { score, termination }
    }

    /// Score a finished match on `board`. A forfeit ignores the board and awards the
    /// maximum score to the offender's opponent.
    pub fn conclude(termination: Termination, board: &Board) -> Self {
        let score = match termination.offender() {
            Some(offender) => forfeit_score(offender),
            None => board.score(),
        };
        Self::new(termination, score)
    }

    pub fn winner(&self) -> Winner {
        Winner::from_score(self.score)
    }
}

/// One match between two connected players.
///
/// The match owns its board and both players. [`Match::play`] runs it to completion and
/// always terminates both players, whatever the outcome.
pub struct Match<C: Connector> {
    board: Board,
    first: C,
    second: C,
    moves_read: usize,
}

impl<C: Connector> Match<C> {
    pub fn new(board: Board, first: C, second: C) -> Self {
        debug_assert_eq!(first.role(), Player::First);
        debug_assert_eq!(second.role(), Player::Second);

        Self {
            board,
            first,
            second,
            moves_read: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> (&C, &C) {
        (&self.first, &self.second)
    }

    fn player_mut(&mut self, player: Player) -> &mut C {
        match player {
            Player::First => &mut self.first,
            Player::Second => &mut self.second,
        }
    }

    /// Write to the transcript, if there is one. Transcript failures never affect play.
    fn record<F>(&mut self, write: F)
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        if let Some(log) = self.board.log() {
            if let Err(err) = write(log) {
                warn!(%err, "failed to write transcript");
            }
        }
    }

    /// Run the match to its end, then terminate both players.
    pub fn play(&mut self) -> Result<MatchResult> {
        info!(
            first = self.first.name(),
            second = self.second.name(),
            "match started"
        );

        let position = *self.board.position();
        self.record(|w| transcript::write_initial_state(w, &position));

        let termination = self.run_turns();
        let result = MatchResult::conclude(termination, &self.board);

        let names = (self.first.name().to_owned(), self.second.name().to_owned());
        self.record(|w| {
            transcript::write_summary(w, (&names.0, &names.1), &result)?;
            w.flush()
        });

        self.teardown()?;

        info!(
            score = result.score,
            termination = ?result.termination,
            moves = self.moves_read,
            "match over"
        );
        Ok(result)
    }

    /// The turn loop. Returns as soon as the match is decided.
    fn run_turns(&mut self) -> Termination {
        loop {
            let mover = self.board.current_player();

            let token = match self.player_mut(mover).read_token() {
                Ok(Some(token)) => token,
                Ok(None) => {
                    warn!(%mover, "player closed its output");
                    return Termination::PlayerFault { offender: mover };
                }
                Err(err) => {
                    warn!(%mover, %err, "failed to read move");
                    return Termination::PlayerFault { offender: mover };
                }
            };

            let parsed = token.parse::<Location>();
            if let Err(ParseLocationError::Malformed) = parsed {
                warn!(%mover, %token, "unreadable move");
                return Termination::PlayerFault { offender: mover };
            }

            let number = self.moves_read;
            self.moves_read += 1;
            self.record(|w| transcript::write_move(w, number, mover, &token));

            let mv = match parsed {
                Ok(mv) if self.board.is_move_legal(mv) => mv,
                _ => {
                    warn!(%mover, %token, "illegal move");
                    return Termination::IllegalMove { offender: mover };
                }
            };

            let flipped = self.board.apply_move(mv);
            debug!(number, %mover, %mv, flipped, "move played");

            // A failed relay means the opponent is gone; that shows up as a closed stream
            // the next time it is asked to move.
            let opponent = !mover;
            if let Err(err) = self.player_mut(opponent).send_move(mv) {
                warn!(%opponent, %err, "failed to relay move");
            }

            self.record(|w| transcript::write_state_header(w));
            match self.board.advance_turn() {
                Some(next) if next == mover => debug!(%opponent, "no legal move, passing"),
                Some(_) => {}
                None => return Termination::NormalEnd,
            }
        }
    }

    /// Terminate both players, reporting the first failure.
    fn teardown(&mut self) -> Result<()> {
        let first = self.first.terminate();
        let second = self.second.terminate();
        first.and(second)
    }
}

/// Check both players, open the transcript, spawn both players and play the match.
pub fn play_match(config: &MatchConfig) -> Result<MatchResult> {
    check_executable(&config.first)?;
    check_executable(&config.second)?;

    let board = match &config.transcript {
        Some(path) => {
            let file = File::create(path).map_err(|source| RefereeError::Transcript {
                path: path.clone(),
                source,
            })?;
            Board::with_log(Box::new(BufWriter::new(file)))
        }
        None => Board::new(),
    };

    let first = ProcessConnector::spawn(&config.first, Player::First, config.cpu_limit)?;
    let second = ProcessConnector::spawn(&config.second, Player::Second, config.cpu_limit)?;

    Match::new(board, first, second).play()
}
