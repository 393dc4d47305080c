use anyhow::Result;
use referee_match::{play_match, MatchConfig};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// `referee [-tracking] <player1> <player2>`
///
/// Prints the final score (FIRST tiles minus SECOND tiles, or ±64 after a forfeit) and
/// exits with it as the status.
fn main() -> Result<()> {
    // Diagnostics go to stderr: stdout carries only the score.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("referee_match=info".parse()?),
        )
        .init();

    let config = match MatchConfig::from_args(std::env::args_os().skip(1)) {
        Some(config) => config,
        None => return Ok(()),
    };

    let result = play_match(&config)?;

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", result.score)?;
    stdout.flush()?;

    std::process::exit(result.score as i32);
}
