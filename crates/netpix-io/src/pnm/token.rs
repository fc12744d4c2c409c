//! Whitespace and comment delimited token reader
//!
//! Netpbm headers, and every sample of the plain variants, are unsigned
//! decimal integers separated by whitespace. A `#` outside a token starts
//! a comment running to the end of the line.
//!
//! The reader is a four state machine:
//!
//! ```text
//!            '#'              '\n' | '\r'
//!   READY ---------> COMMENT -------------> READY
//!     |
//!     | non-whitespace (pushed)
//!     v
//!  READING --(non-whitespace, pushed)--> READING
//!     |
//!     | whitespace (consumed)
//!     v
//!  FINISHED
//! ```
//!
//! Exactly one delimiter byte is consumed after a token, so the stream is
//! positioned at the first raster byte after the last header field.

use crate::{IoError, IoResult};
use std::io::{ErrorKind, Read};

/// Longest accepted token; `u32::MAX` has 10 digits.
const MAX_TOKEN_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Skipping whitespace, watching for `#`
    Ready,
    /// Discarding until end of line
    Comment,
    /// Accumulating token bytes
    Reading,
    /// Token complete
    Finished,
}

/// Netpbm whitespace: space, tab, CR, LF, vertical tab, form feed
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Read a single byte, `None` at end of stream.
fn next_byte<R: Read>(reader: &mut R) -> IoResult<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(IoError::Io(e)),
        }
    }
}

/// Read the next unsigned decimal token.
///
/// End of stream directly after a token completes it, so a plain file
/// may end without a trailing newline.
///
/// # Errors
///
/// - `IoError::UnexpectedEof` if the stream ends before a token starts
/// - `IoError::MalformedToken` if the token contains non-digit bytes or
///   does not fit in `u32`
pub fn read_value<R: Read>(reader: &mut R) -> IoResult<u32> {
    let mut token: Vec<u8> = Vec::with_capacity(8);
    let mut state = State::Ready;

    while state != State::Finished {
        let Some(byte) = next_byte(reader)? else {
            if state == State::Reading {
                break;
            }
            return Err(IoError::UnexpectedEof("numeric token"));
        };

        state = match state {
            State::Ready if byte == b'#' => State::Comment,
            State::Ready if is_whitespace(byte) => State::Ready,
            State::Ready => {
                token.push(byte);
                State::Reading
            }
            State::Comment if byte == b'\n' || byte == b'\r' => State::Ready,
            State::Comment => State::Comment,
            State::Reading if is_whitespace(byte) => State::Finished,
            State::Reading => {
                if token.len() == MAX_TOKEN_LEN {
                    return Err(malformed(&token));
                }
                token.push(byte);
                State::Reading
            }
            State::Finished => State::Finished,
        };
    }

    parse_token(&token)
}

fn parse_token(token: &[u8]) -> IoResult<u32> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return Err(malformed(token));
    }
    // All bytes are ASCII digits, so the slice is valid UTF-8
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| malformed(token))
}

fn malformed(token: &[u8]) -> IoError {
    IoError::MalformedToken(String::from_utf8_lossy(token).into_owned())
}
