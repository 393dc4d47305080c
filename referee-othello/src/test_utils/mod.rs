//! Utilities used for testing and benchmarking.

mod perft;
pub use perft::{perft, run_perft};

mod replay;
pub use replay::{play_out, replay, ReplayError};
