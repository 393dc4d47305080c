//! [`Connector`] for player programs run as child processes.
//!
//! Each child gets its role as its only argument, reads the opponent's moves on stdin
//! and writes its own moves to stdout. Its stderr is shared with the referee.

use super::Connector;
use crate::error::{RefereeError, Result};
use crate::protocol;
use nix::sys::resource::{setrlimit, Resource};
use nix::unistd::{access, AccessFlags};
use referee_othello::{Location, Player};
use std::io::{self, BufReader};
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::Duration;
use tracing::{debug, warn};

pub struct ProcessConnector {
    role: Player,
    name: String,
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: Option<BufReader<ChildStdout>>,
    terminated: bool,
}

/// Fail unless `path` names a file the referee may execute.
pub fn check_executable(path: &Path) -> Result<()> {
    access(path, AccessFlags::X_OK).map_err(|_| RefereeError::NotExecutable {
        path: path.to_owned(),
    })
}

/// Player programs are started relative to the working directory, never looked up on
/// `PATH`.
fn exec_path(path: &Path) -> PathBuf {
    Path::new(".").join(path)
}

impl ProcessConnector {
    /// Start the program at `path` playing `role`, limited to `cpu_limit` of CPU time.
    /// Callers run [`check_executable`] first; a program that still cannot be started
    /// fails with [`RefereeError::Spawn`].
    ///
    /// The pipes std creates are close-on-exec, so a child never holds the other
    /// child's pipe ends and end-of-stream is seen as soon as a player exits.
    pub fn spawn(path: &Path, role: Player, cpu_limit: Duration) -> Result<Self> {
        let limit: nix::libc::rlim_t = cpu_limit.as_secs().max(1) as _;
        let mut command = Command::new(exec_path(path));
        command
            .arg(role.role())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        // SAFETY: setrlimit is async-signal-safe and the closure allocates nothing.
        unsafe {
            command.pre_exec(move || {
                setrlimit(Resource::RLIMIT_CPU, limit, limit).map_err(io::Error::from)
            });
        }

        let mut child = command.spawn().map_err(|source| RefereeError::Spawn {
            path: path.to_owned(),
            source,
        })?;

        let (stdin, stdout) = match (child.stdin.take(), child.stdout.take()) {
            (Some(stdin), Some(stdout)) => (stdin, stdout),
            _ => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(RefereeError::MissingPipe {
                    path: path.to_owned(),
                });
            }
        };

        debug!(path = %path.display(), %role, pid = child.id(), limit, "spawned player");

        Ok(Self {
            role,
            name: path.to_string_lossy().into_owned(),
            child,
            stdin: Some(stdin),
            stdout: Some(BufReader::new(stdout)),
            terminated: false,
        })
    }
}

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "player connection closed")
}

impl Connector for ProcessConnector {
    fn role(&self) -> Player {
        self.role
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn read_token(&mut self) -> io::Result<Option<String>> {
        let stdout = self.stdout.as_mut().ok_or_else(closed)?;
        protocol::read_token(stdout)
    }

    fn send_move(&mut self, mv: Location) -> io::Result<()> {
        let stdin = self.stdin.as_mut().ok_or_else(closed)?;
        protocol::write_move(stdin, mv)
    }

    /// Close both pipes, then SIGKILL and reap the child whether or not it has already
    /// exited.
    fn terminate(&mut self) -> Result<()> {
        if self.terminated {
            return Ok(());
        }
        self.terminated = true;

        self.stdin.take();
        self.stdout.take();

        let role = self.role;
        self.child
            .kill()
            .map_err(|source| RefereeError::Teardown { role, source })?;
        let status = self
            .child
            .wait()
            .map_err(|source| RefereeError::Teardown { role, source })?;

        debug!(%role, ?status, "player terminated");
        Ok(())
    }
}

impl Drop for ProcessConnector {
    fn drop(&mut self) {
        if !self.terminated {
            if let Err(err) = self.terminate() {
                warn!(%err, "failed to terminate player on drop");
            }
        }
    }
}
