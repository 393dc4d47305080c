//! Errors that stop the referee itself, as opposed to ending a match.
//!
//! A player crashing or playing a bad move is an outcome, not an error: see
//! [`crate::Termination`].

use referee_othello::Player;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefereeError {
    /// The player program is missing or lacks execute permission.
    #[error("File {} does not exist or is not executable", path.display())]
    NotExecutable { path: PathBuf },

    /// The player program could not be started.
    #[error("failed to start {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The child was started without one of its pipes.
    #[error("no pipe to {}", path.display())]
    MissingPipe { path: PathBuf },

    /// The tracking transcript could not be created or finished.
    #[error("transcript {}: {source}", path.display())]
    Transcript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A player process could not be killed or reaped.
    #[error("failed to tear down {role} player: {source}")]
    Teardown {
        role: Player,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RefereeError>;
