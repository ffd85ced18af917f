//! Reliable writes
//!
//! Pushes a whole command buffer through a writer that may accept only part
//! of it per call or fail transiently.

use std::io::{ErrorKind, Write};

use crate::error::{QueueError, Result};

/// Errors worth retrying the same write for
fn is_transient(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Interrupted | ErrorKind::WouldBlock | ErrorKind::TimedOut
    )
}

/// Write all of `data`, returning the number of bytes sent
///
/// Short writes and transient errors continue with the remainder. Any other
/// error aborts with the count written so far. A writer that accepts zero
/// bytes without an error cannot make progress and is reported as
/// `WriteZero`.
pub fn send_all<W: Write>(writer: &mut W, data: &[u8]) -> Result<usize> {
    let mut written = 0;

    while written < data.len() {
        match writer.write(&data[written..]) {
            Ok(0) => {
                return Err(QueueError::Write {
                    written,
                    source: ErrorKind::WriteZero.into(),
                })
            }
            Ok(n) => written += n,
            Err(e) if is_transient(e.kind()) => {
                tracing::trace!("Transient write error after {} bytes: {}", written, e);
            }
            Err(e) => return Err(QueueError::Write { written, source: e }),
        }
    }

    Ok(written)
}
