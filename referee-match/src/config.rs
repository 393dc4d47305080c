//! Match configuration, built from the referee's command line.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// CPU time each player may use over the whole match.
pub const DEFAULT_CPU_LIMIT: Duration = Duration::from_secs(60);

/// The flag that turns on the tracking transcript.
pub const TRACKING_FLAG: &str = "-tracking";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// The program playing `FIRST`, as named on the command line.
    pub first: PathBuf,
    /// The program playing `SECOND`, as named on the command line.
    pub second: PathBuf,
    /// Where to write the tracking transcript, if tracking is on.
    pub transcript: Option<PathBuf>,
    /// `RLIMIT_CPU` applied to each player before it starts.
    pub cpu_limit: Duration,
}

impl MatchConfig {
    pub fn new(first: impl Into<PathBuf>, second: impl Into<PathBuf>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            transcript: None,
            cpu_limit: DEFAULT_CPU_LIMIT,
        }
    }

    /// Turn on tracking, writing to the conventional `<first>_vs_<second>` file in the
    /// working directory.
    pub fn with_tracking(mut self) -> Self {
        self.transcript = Some(transcript_name(&self.first, &self.second));
        self
    }

    /// Parse `[-tracking] <first> <second>` (the program name already stripped).
    /// Returns `None` if fewer than two players are named. Extra arguments are ignored.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into).peekable();

        let tracking = args.peek().map_or(false, |arg| arg == TRACKING_FLAG);
        if tracking {
            args.next();
        }

        let first = args.next()?;
        let second = args.next()?;
        let config = Self::new(first, second);

        Some(if tracking {
            config.with_tracking()
        } else {
            config
        })
    }
}

/// `<first>_vs_<second>`, joined from the names exactly as given.
pub fn transcript_name(first: &std::path::Path, second: &std::path::Path) -> PathBuf {
    let mut name = first.as_os_str().to_owned();
    name.push("_vs_");
    name.push(second.as_os_str());
    PathBuf::from(name)
}
