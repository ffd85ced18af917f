//! Response definitions
//!
//! Scanning of success reply lines such as `INSERTED <id>\r\n`.

use crate::error::{QueueError, Result};

/// Success reply words
pub const WATCHING: &str = "WATCHING";
pub const USING: &str = "USING";
pub const INSERTED: &str = "INSERTED";
pub const BURIED: &str = "BURIED";
pub const DELETED: &str = "DELETED";
pub const RESERVED: &str = "RESERVED";
pub const RELEASED: &str = "RELEASED";
pub const KICKED: &str = "KICKED";

/// Header of a `RESERVED <id> <bytes>\r\n` reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedHeader {
    /// Job id assigned by the server
    pub id: u64,

    /// Length of the data block that follows, terminator excluded
    pub len: usize,
}

impl ReservedHeader {
    pub fn parse(line: &str) -> Result<Self> {
        let [id, len] = scan_fields(line, RESERVED)?;
        let len = usize::try_from(len).map_err(|_| {
            QueueError::Protocol(format!("data length {} does not fit in memory", len))
        })?;
        Ok(Self { id, len })
    }
}

/// Build the exact line a bare reply word is expected to be
pub fn literal(word: &str) -> String {
    format!("{}\r\n", word)
}

/// Scan `<word> <n1> ... <nN>\r\n` into N unsigned integers
///
/// The word must match exactly, the line must end in CRLF and carry exactly
/// N decimal fields. Anything else is a protocol error.
pub fn scan_fields<const N: usize>(line: &str, word: &str) -> Result<[u64; N]> {
    let malformed = || QueueError::Protocol(format!("malformed {} reply: {:?}", word, line));

    let rest = line
        .strip_suffix("\r\n")
        .and_then(|l| l.strip_prefix(word))
        .and_then(|l| l.strip_prefix(' '))
        .ok_or_else(malformed)?;

    let mut fields = [0u64; N];
    let mut tokens = rest.split(' ');
    for field in fields.iter_mut() {
        let token = tokens.next().ok_or_else(malformed)?;
        // u64::from_str takes a leading '+', the wire never sends one
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        *field = token.parse().map_err(|_| malformed())?;
    }

    if tokens.next().is_some() {
        return Err(malformed());
    }

    Ok(fields)
}
