//! Error types for beanq
//!
//! Three disjoint categories surface from every operation:
//! - **Transport**: dial, write, read or end-of-stream failures. The
//!   connection should be considered unusable afterwards.
//! - **Protocol**: a success reply whose header does not scan.
//! - **Server**: a reply the server sends as a normal outcome
//!   (`NOT_FOUND`, `DRAINING`, ...), see [`ServerError`].

use thiserror::Error;

/// Result type alias using QueueError
pub type Result<T> = std::result::Result<T, QueueError>;

/// Unified error type for queue client operations
#[derive(Debug, Error)]
pub enum QueueError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("write failed after {written} bytes: {source}")]
    Write {
        written: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("no connection to beanstalkd")]
    NoConnection,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Server Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Server(#[from] ServerError),

    /// The job was accepted but buried straight away; `id` is still valid
    #[error("buried (job {id})")]
    Buried { id: u64 },
}

impl QueueError {
    /// Dial, write, read or missing-connection failure
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            QueueError::Io(_) | QueueError::Write { .. } | QueueError::NoConnection
        )
    }

    /// Malformed success header
    pub fn is_protocol(&self) -> bool {
        matches!(self, QueueError::Protocol(_))
    }

    /// Reply reported by the server as a normal outcome
    pub fn is_server(&self) -> bool {
        matches!(self, QueueError::Server(_) | QueueError::Buried { .. })
    }

    /// The semantic server error, if this is one
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            QueueError::Server(e) => Some(e),
            QueueError::Buried { .. } => Some(&BURIED),
            _ => None,
        }
    }
}

static BURIED: ServerError = ServerError::Buried;

/// Errors the server reports as ordinary replies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerError {
    #[error("out of memory")]
    OutOfMemory,

    #[error("internal error")]
    InternalError,

    #[error("bad format")]
    BadFormat,

    #[error("unknown command")]
    UnknownCommand,

    #[error("buried")]
    Buried,

    #[error("expected CRLF")]
    ExpectedCrlf,

    #[error("job too big")]
    JobTooBig,

    #[error("draining")]
    Draining,

    #[error("deadline soon")]
    DeadlineSoon,

    #[error("timed out")]
    TimedOut,

    #[error("not found")]
    NotFound,

    /// Any reply outside the known table, kept verbatim with its terminator
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ServerError {
    /// Look up an error reply line (terminator included)
    ///
    /// Matching is exact and case-sensitive; anything else becomes
    /// [`ServerError::Unknown`] carrying the raw line.
    pub fn from_line(line: &str) -> Self {
        match line {
            "OUT_OF_MEMORY\r\n" => ServerError::OutOfMemory,
            "INTERNAL_ERROR\r\n" => ServerError::InternalError,
            "BAD_FORMAT\r\n" => ServerError::BadFormat,
            "UNKNOWN_COMMAND\r\n" => ServerError::UnknownCommand,
            "BURIED\r\n" => ServerError::Buried,
            "EXPECTED_CRLF\r\n" => ServerError::ExpectedCrlf,
            "JOB_TOO_BIG\r\n" => ServerError::JobTooBig,
            "DRAINING\r\n" => ServerError::Draining,
            "DEADLINE_SOON\r\n" => ServerError::DeadlineSoon,
            "TIMED_OUT\r\n" => ServerError::TimedOut,
            "NOT_FOUND\r\n" => ServerError::NotFound,
            other => ServerError::Unknown(other.to_string()),
        }
    }
}
