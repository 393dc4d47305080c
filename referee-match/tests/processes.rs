//! End-to-end matches between real player processes, written as small shell scripts.

use referee_match::{play_match, MatchConfig, RefereeError, Termination};
use referee_othello::test_utils::{play_out, replay};
use referee_othello::{Board, Player};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tempfile::TempDir;

// A script still open for writing in one test cannot be exec'd by a child forked in
// another (ETXTBSY), so tests that write and run scripts take turns.
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A player that writes all of `moves` up front, then swallows whatever it is sent.
fn canned_player(dir: &Path, name: &str, moves: &[String]) -> PathBuf {
    let body = if moves.is_empty() {
        "exec cat >/dev/null".to_string()
    } else {
        format!("printf '%s\\n' {}\nexec cat >/dev/null", moves.join(" "))
    };
    script(dir, name, &body)
}

#[test]
fn full_game_between_processes() {
    let _guard = lock();
    let dir = TempDir::new().unwrap();

    let transcript = play_out(|_, moves| moves[moves.len() - 1]);
    let (mut first_moves, mut second_moves) = (Vec::new(), Vec::new());
    let mut board = Board::new();
    for &mv in &transcript {
        match board.current_player() {
            Player::First => first_moves.push(mv.to_string()),
            Player::Second => second_moves.push(mv.to_string()),
        }
        board.apply_move(mv);
        board.advance_turn();
    }

    let mut config = MatchConfig::new(
        canned_player(dir.path(), "first", &first_moves),
        canned_player(dir.path(), "second", &second_moves),
    );
    config.transcript = Some(dir.path().join("first_vs_second"));

    let result = play_match(&config).unwrap();
    let (expected, _) = replay(&transcript).unwrap();
    assert_eq!(result.termination, Termination::NormalEnd);
    assert_eq!(result.score, expected.score());

    let log = fs::read_to_string(dir.path().join("first_vs_second")).unwrap();
    assert!(log.starts_with("\nInitial game state:\n"));
    assert_eq!(
        log.matches(" player): ").count(),
        transcript.len(),
        "one move line per move"
    );
    assert!(log.contains(&format!("Score {}\n", result.score)));
    assert!(!log.contains("Player crashed"));
    assert!(!log.contains("Bad move"));
}

#[test]
fn players_learn_their_roles_and_hear_each_other() {
    let _guard = lock();
    let dir = TempDir::new().unwrap();

    // First answers Second's C2 with a deliberately illegal move; any surprise along the
    // way makes a player quit instead, which the referee reports as a crash.
    let first = script(
        dir.path(),
        "first",
        "[ \"$1\" = FIRST ] || exit 1
echo D2
read reply
[ \"$reply\" = C2 ] || exit 1
echo A0
exec cat >/dev/null",
    );
    let second = script(
        dir.path(),
        "second",
        "[ \"$1\" = SECOND ] || exit 1
read opening
[ \"$opening\" = D2 ] || exit 1
echo C2
exec cat >/dev/null",
    );

    let result = play_match(&MatchConfig::new(first, second)).unwrap();
    assert_eq!(
        result.termination,
        Termination::IllegalMove {
            offender: Player::First
        }
    );
    assert_eq!(result.score, -64);
}

#[test]
fn crashing_player_forfeits() {
    let _guard = lock();
    let dir = TempDir::new().unwrap();

    let first = canned_player(dir.path(), "first", &["D2".to_string()]);
    let second = script(dir.path(), "second", "exit 0");
    let mut config = MatchConfig::new(first, second);
    config.transcript = Some(dir.path().join("log"));

    let result = play_match(&config).unwrap();
    assert_eq!(
        result.termination,
        Termination::PlayerFault {
            offender: Player::Second
        }
    );
    assert_eq!(result.score, 64);

    let log = fs::read_to_string(dir.path().join("log")).unwrap();
    assert!(log.contains("Move #0 (by FIRST player): D2\n"));
    assert!(log.ends_with("Score 64\nPlayer crashed\n"));
}

#[test]
fn illegal_opening_forfeits() {
    let _guard = lock();
    let dir = TempDir::new().unwrap();

    let first = canned_player(dir.path(), "first", &["D3".to_string()]);
    let second = canned_player(dir.path(), "second", &[]);
    let mut config = MatchConfig::new(first, second);
    config.transcript = Some(dir.path().join("log"));

    let result = play_match(&config).unwrap();
    assert_eq!(result.score, -64);

    let log = fs::read_to_string(dir.path().join("log")).unwrap();
    assert!(log.contains("Move #0 (by FIRST player): D3\n"));
    assert!(log.ends_with("Score -64\nBad move\n"));
}

#[test]
fn cpu_hog_is_killed() {
    let _guard = lock();
    let dir = TempDir::new().unwrap();

    let first = script(dir.path(), "first", "while :; do :; done");
    let second = canned_player(dir.path(), "second", &[]);
    let mut config = MatchConfig::new(first, second);
    config.cpu_limit = Duration::from_secs(1);

    let result = play_match(&config).unwrap();
    assert_eq!(
        result.termination,
        Termination::PlayerFault {
            offender: Player::First
        }
    );
    assert_eq!(result.score, -64);
}

#[test]
fn non_executable_player_is_rejected() {
    let _guard = lock();
    let dir = TempDir::new().unwrap();

    let first = canned_player(dir.path(), "first", &[]);
    let second = dir.path().join("second");
    fs::write(&second, "not a program\n").unwrap();
    fs::set_permissions(&second, fs::Permissions::from_mode(0o644)).unwrap();

    let err = play_match(&MatchConfig::new(first, &second)).unwrap_err();
    assert!(matches!(err, RefereeError::NotExecutable { .. }));
    assert_eq!(
        err.to_string(),
        format!("File {} does not exist or is not executable", second.display())
    );
}

#[test]
fn missing_player_is_rejected_before_anything_starts() {
    let _guard = lock();
    let dir = TempDir::new().unwrap();

    let mut config = MatchConfig::new(dir.path().join("nobody"), dir.path().join("nobody"));
    config.transcript = Some(dir.path().join("log"));

    let err = play_match(&config).unwrap_err();
    assert!(matches!(err, RefereeError::NotExecutable { .. }));
    assert!(!dir.path().join("log").exists());
}
