use crate::error::Result;
use referee_othello::{Location, Player};
use std::io;

/// The referee's view of one player: a source of move tokens and a sink for the
/// opponent's moves.
///
/// Reads block. The referee only ever waits on the player whose turn it is, so it never
/// needs to listen to both players at once.
pub trait Connector {
    /// Which side this player is on.
    fn role(&self) -> Player;

    /// The player's name, as shown in the transcript.
    fn name(&self) -> &str;

    /// Block until the player sends its next token. `Ok(None)` means the player closed
    /// its output and will never move again.
    fn read_token(&mut self) -> io::Result<Option<String>>;

    /// Tell the player about its opponent's move.
    fn send_move(&mut self, mv: Location) -> io::Result<()>;

    /// Shut the player down. Further reads and sends fail.
    fn terminate(&mut self) -> Result<()>;
}
