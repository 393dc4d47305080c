//! Connectors link the referee to the programs playing a match.

mod connector;
mod process;
mod scripted;

pub use connector::Connector;
pub use process::{check_executable, ProcessConnector};
pub use scripted::ScriptedConnector;
