//! Protocol codec
//!
//! Encoding of commands and stream helpers for reading replies.
//!
//! ## Wire Format
//!
//! ### Request (Command) Format
//! ```text
//! <verb> [<arg> ...]\r\n
//! [<payload bytes>\r\n]        (put only, length declared by the last arg)
//! ```
//!
//! ### Response Format
//! ```text
//! <WORD> [<field> ...]\r\n
//! [<data bytes>\r\n]           (RESERVED only, length declared in the header)
//! ```

use std::io::{BufRead, Read};

use bytes::{BufMut, Bytes, BytesMut};

use super::Command;
use crate::error::{QueueError, Result, ServerError};

/// Line terminator used in both directions
pub const CRLF: &[u8] = b"\r\n";

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a command to its exact wire bytes
///
/// For `put` the payload block and its terminator follow the command line.
pub fn encode_command(command: &Command<'_>) -> Bytes {
    let verb = command.command_type().name();

    let line = match command {
        // quit goes out with a trailing space
        Command::Quit => format!("{} ", verb),
        Command::Watch { tube } | Command::Use { tube } => format!("{} {}", verb, tube),
        Command::Put {
            priority,
            delay,
            ttr,
            payload,
        } => format!("{} {} {} {} {}", verb, priority, delay, ttr, payload.len()),
        Command::Delete { id } | Command::KickJob { id } => format!("{} {}", verb, id),
        Command::Reserve => verb.to_string(),
        Command::Bury { id, priority } => format!("{} {} {}", verb, id, priority),
        Command::Release {
            id,
            priority,
            delay,
        } => format!("{} {} {} {}", verb, id, priority, delay),
        Command::Kick { bound } => format!("{} {}", verb, bound),
    };

    let payload_len = match command {
        Command::Put { payload, .. } => payload.len() + CRLF.len(),
        _ => 0,
    };

    let mut message = BytesMut::with_capacity(line.len() + CRLF.len() + payload_len);
    message.put_slice(line.as_bytes());
    message.put_slice(CRLF);
    if let Command::Put { payload, .. } = command {
        message.put_slice(payload);
        message.put_slice(CRLF);
    }

    message.freeze()
}

// =============================================================================
// Error Classification
// =============================================================================

/// Turn a reply that did not match the expected success into an error
pub fn classify_error(line: &str) -> QueueError {
    QueueError::Server(ServerError::from_line(line))
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one reply line, terminator included
///
/// End of stream before a full line is a transport error.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::with_capacity(64);
    reader.read_until(b'\n', &mut buf)?;

    if buf.last() != Some(&b'\n') {
        return Err(QueueError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("connection closed after {} bytes of a reply line", buf.len()),
        )));
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Read a data block of `len` bytes and its 2-byte terminator
///
/// Blocks until all `len + 2` bytes arrive. The terminator is checked and
/// stripped; the returned bytes are exactly what the server framed.
pub fn read_payload<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let total = len.checked_add(CRLF.len()).ok_or_else(|| {
        QueueError::Protocol(format!("data length {} overflows", len))
    })?;

    // Grow with the data actually received instead of trusting the header
    let mut data = Vec::new();
    reader.take(total as u64).read_to_end(&mut data)?;

    if data.len() < total {
        return Err(QueueError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("expected {} data bytes, got {}", total, data.len()),
        )));
    }

    if &data[len..] != CRLF {
        return Err(QueueError::Protocol(format!(
            "data block of {} bytes not terminated by CRLF",
            len
        )));
    }

    data.truncate(len);
    Ok(data)
}
