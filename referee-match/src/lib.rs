//! `referee-match` referees an Othello match between two independently running player
//! programs.
//!
//! Players are spawned as child processes and talk to the referee over their standard
//! streams, one move token per turn. The referee validates every move against a
//! [`referee_othello::Board`], relays it to the opponent and decides how the match ended:
//! normally, by an illegal move, or by a player crashing.

pub mod config;
pub mod connectors;
pub mod error;
pub mod protocol;
pub mod transcript;

mod referee;

pub use config::MatchConfig;
pub use error::{RefereeError, Result};
pub use referee::*;
