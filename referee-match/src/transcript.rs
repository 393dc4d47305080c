//! The human-readable tracking transcript.
//!
//! Board grids between these sections are written by
//! [`referee_othello::Board::advance_turn`], so the transcript only supplies headers, move
//! lines and the final summary.

use crate::referee::MatchResult;
use referee_othello::{Player, Position, Winner, COLUMN_HEADER};
use std::io::{self, Write};

fn write_legend<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    write!(w, "FIRST = x, SECOND = o\n\n{}\n", COLUMN_HEADER)
}

/// The starting diagram.
pub fn write_initial_state<W: Write + ?Sized>(w: &mut W, position: &Position) -> io::Result<()> {
    write!(w, "\nInitial game state:\n")?;
    write_legend(w)?;
    writeln!(w, "{}", position)
}

/// Header for the diagram [`referee_othello::Board::advance_turn`] is about to write.
pub fn write_state_header<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    write!(w, "\nCurrent game state:\n")?;
    write_legend(w)
}

/// One line per move read from a player, numbered from 0.
pub fn write_move<W: Write + ?Sized>(
    w: &mut W,
    number: usize,
    player: Player,
    token: &str,
) -> io::Result<()> {
    writeln!(w, "Move #{} (by {} player): {}", number, player, token)
}

/// The closing block: who played, who won, the score and why the match ended early.
pub fn write_summary<W: Write + ?Sized>(
    w: &mut W,
    (first, second): (&str, &str),
    result: &MatchResult,
) -> io::Result<()> {
    writeln!(w, "FIRST ({}) vs SECOND ({})", first, second)?;
    match result.winner() {
        Winner::Player(Player::First) => writeln!(w, "Winner FIRST {}", first)?,
        Winner::Player(Player::Second) => writeln!(w, "Winner SECOND {}", second)?,
        Winner::Draw => writeln!(w, "Winner (draw)")?,
    }
    writeln!(w, "Score {}", result.score)?;
    if let Some(note) = result.termination.note() {
        writeln!(w, "{}", note)?;
    }
    Ok(())
}
