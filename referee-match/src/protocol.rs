//! The player wire protocol: whitespace-separated move tokens such as `D3`.

use std::io::{self, BufRead, Write};

use referee_othello::Location;

/// Longest token accepted from a player. Anything longer is garbage.
pub const MAX_TOKEN_LEN: usize = 16;

/// Read the next whitespace-delimited token from `reader`.
///
/// Returns `Ok(None)` if the stream ends before a token starts. A token cut short by the
/// end of the stream is still returned. Tokens longer than [`MAX_TOKEN_LEN`] or that are
/// not UTF-8 fail with [`io::ErrorKind::InvalidData`].
pub fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();

    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            break;
        }

        let mut consumed = 0;
        let mut done = false;
        let mut too_long = false;
        for &byte in available {
            consumed += 1;
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    continue;
                }
                done = true;
                break;
            }
            if token.len() == MAX_TOKEN_LEN {
                too_long = true;
                break;
            }
            token.push(byte);
        }
        reader.consume(consumed);

        if too_long {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "move token too long",
            ));
        }
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }

    String::from_utf8(token)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Send `mv` as one newline-terminated token, flushing so the reader is not kept waiting.
pub fn write_move<W: Write + ?Sized>(writer: &mut W, mv: Location) -> io::Result<()> {
    writeln!(writer, "{}", mv)?;
    writer.flush()
}
