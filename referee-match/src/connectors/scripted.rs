//! [`Connector`] that plays a fixed list of tokens, for exercising the referee without
//! spawning processes.

use super::Connector;
use crate::error::Result;
use referee_othello::{Location, Player};
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Clone)]
pub struct ScriptedConnector {
    role: Player,
    name: String,
    tokens: VecDeque<String>,
    received: Vec<Location>,
    refuse_moves: bool,
    terminated: bool,
}

impl ScriptedConnector {
    /// A player that sends `tokens` in order, then closes its output.
    pub fn new<I, S>(role: Player, name: &str, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role,
            name: name.to_string(),
            tokens: tokens.into_iter().map(Into::into).collect(),
            received: Vec::new(),
            refuse_moves: false,
            terminated: false,
        }
    }

    /// Make every [`Connector::send_move`] fail, as if the player had already exited.
    pub fn refusing_moves(mut self) -> Self {
        self.refuse_moves = true;
        self
    }

    /// The opponent moves relayed to this player so far.
    pub fn received(&self) -> &[Location] {
        &self.received
    }

    /// Tokens not yet sent.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl Connector for ScriptedConnector {
    fn role(&self) -> Player {
        self.role
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn read_token(&mut self) -> io::Result<Option<String>> {
        Ok(self.tokens.pop_front())
    }

    fn send_move(&mut self, mv: Location) -> io::Result<()> {
        if self.refuse_moves || self.terminated {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "player is gone"));
        }
        self.received.push(mv);
        Ok(())
    }

    fn terminate(&mut self) -> Result<()> {
        self.terminated = true;
        self.tokens.clear();
        Ok(())
    }
}
