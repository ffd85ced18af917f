//! Queue Client
//!
//! The request/response session over one server connection.
//!
//! ## Responsibilities
//! - Encode each operation into its wire command
//! - Send it whole, read exactly one reply line (and data block for reserve)
//! - Turn the reply into a value or a classified error

use std::time::Duration;

use crate::config::Config;
use crate::error::{QueueError, Result};
use crate::job::Job;
use crate::network::Connection;
use crate::protocol::{
    classify_error, encode_command, literal, scan_fields, Command, ReservedHeader, BURIED,
    DELETED, INSERTED, KICKED, RELEASED, RESERVED, USING, WATCHING,
};

/// Client for a beanstalkd-style job queue
///
/// ## Concurrency
///
/// Every call is a blocking exchange on one socket and takes `&mut self`.
/// Replies arrive in the order commands were sent; there is no pipelining.
/// To share a client between threads, wrap it in a mutex so that each
/// exchange runs to completion before the next one starts. A caller wanting
/// to abandon a blocked [`reserve`](Self::reserve) has to shut the socket
/// down from elsewhere, which surfaces as a transport error.
pub struct QueueClient {
    /// Live connection; `None` once closed
    conn: Option<Connection>,

    /// Address the client was opened with
    addr: String,

    /// Client configuration (priority, ttr, delay)
    config: Config,
}

impl QueueClient {
    /// Connect to `addr` with the default configuration
    pub fn connect(addr: &str) -> Result<Self> {
        Self::connect_with_config(Config::builder().addr(addr).build())
    }

    /// Connect using the given configuration
    ///
    /// The dial is bounded by `connect_timeout_ms`; nothing else is.
    pub fn connect_with_config(config: Config) -> Result<Self> {
        let timeout = Duration::from_millis(config.connect_timeout_ms);
        let conn = Connection::open(&config.addr, timeout)?;

        tracing::debug!("Connected to beanstalkd at {}", config.addr);

        Ok(Self {
            conn: Some(conn),
            addr: config.addr.clone(),
            config,
        })
    }

    /// Say goodbye and close the socket
    ///
    /// The quit command is best effort. Close failures are logged, never
    /// returned. Calling this again does nothing; every other operation
    /// afterwards fails with [`QueueError::NoConnection`].
    pub fn close(&mut self) {
        let Some(conn) = self.conn.as_mut() else {
            return;
        };

        if let Err(e) = conn.send(&encode_command(&Command::Quit)) {
            tracing::debug!("Failed to send quit to {}: {}", self.addr, e);
        }

        if let Err(e) = conn.shutdown() {
            tracing::warn!("Failed to close the connection to beanstalkd {}: {}", self.addr, e);
        }

        self.conn = None;
        tracing::debug!("Connection to {} closed", self.addr);
    }

    /// Whether the client still owns a connection
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Address the client was opened with
    pub fn addr(&self) -> &str {
        &self.addr
    }

    // =========================================================================
    // Tube Selection
    // =========================================================================

    /// Add `tube` to the set of tubes reserve takes jobs from
    ///
    /// The watched-tube count in the reply is ignored.
    pub fn watch(&mut self, tube: &str) -> Result<()> {
        let line = self.send_command(&Command::Watch { tube })?;

        match scan_fields::<1>(&line, WATCHING) {
            Ok(_) => Ok(()),
            Err(_) => Err(classify_error(&line)),
        }
    }

    /// Make `tube` the target of later puts
    ///
    /// Succeeds only if the server echoes exactly the same tube name.
    pub fn use_tube(&mut self, tube: &str) -> Result<()> {
        let expected = format!("{} {}\r\n", USING, tube);
        self.send_command_and_check(&Command::Use { tube }, &expected)
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Submit a job and return its id
    ///
    /// A job the server accepts but buries at once (for instance when it is
    /// short of memory to grow the queue) comes back as
    /// [`QueueError::Buried`] holding the id.
    pub fn put(&mut self, data: &[u8]) -> Result<u64> {
        let command = Command::Put {
            priority: self.config.priority,
            delay: self.config.delay,
            ttr: self.config.ttr,
            payload: data,
        };
        let line = self.send_command(&command)?;

        if line.starts_with(INSERTED) {
            let [id] = scan_fields(&line, INSERTED)?;
            Ok(id)
        } else if line.starts_with(BURIED) {
            // Best effort, the job is buried either way
            let id = scan_fields::<1>(&line, BURIED).map(|[id]| id).unwrap_or(0);
            Err(QueueError::Buried { id })
        } else {
            Err(classify_error(&line))
        }
    }

    // =========================================================================
    // Job Lifecycle
    // =========================================================================

    /// Delete a job
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.send_command_and_check(&Command::Delete { id }, &literal(DELETED))
    }

    /// Reserve the next ready job from the watched tubes
    ///
    /// Blocks until the server hands out a job or answers with a
    /// timeout-class error (`DEADLINE_SOON`, `TIMED_OUT`). The client adds
    /// no timeout of its own.
    pub fn reserve(&mut self) -> Result<Job> {
        let line = self.send_command(&Command::Reserve)?;

        if !line.starts_with(RESERVED) {
            return Err(classify_error(&line));
        }

        let header = ReservedHeader::parse(&line)?;
        let data = self.conn_mut()?.read_payload(header.len)?;

        tracing::trace!("Reserved job {} ({} bytes)", header.id, data.len());

        Ok(Job::new(header.id, data))
    }

    /// Bury a reserved job
    pub fn bury(&mut self, id: u64) -> Result<()> {
        let command = Command::Bury {
            id,
            priority: self.config.priority,
        };
        self.send_command_and_check(&command, &literal(BURIED))
    }

    /// Put a reserved job back in the ready queue
    pub fn release(&mut self, id: u64) -> Result<()> {
        let command = Command::Release {
            id,
            priority: self.config.priority,
            delay: self.config.delay,
        };
        self.send_command_and_check(&command, &literal(RELEASED))
    }

    /// Kick a single buried or delayed job
    pub fn kick_job(&mut self, id: u64) -> Result<()> {
        self.send_command_and_check(&Command::KickJob { id }, &literal(KICKED))
    }

    /// Kick up to `bound` jobs in the used tube, returning how many moved
    pub fn kick(&mut self, bound: u64) -> Result<u64> {
        let line = self.send_command(&Command::Kick { bound })?;

        if !line.starts_with(KICKED) {
            return Err(classify_error(&line));
        }

        let [kicked] = scan_fields(&line, KICKED)?;
        Ok(kicked)
    }

    // =========================================================================
    // Exchange Helpers
    // =========================================================================

    fn conn_mut(&mut self) -> Result<&mut Connection> {
        self.conn.as_mut().ok_or(QueueError::NoConnection)
    }

    /// Send a command and check the reply against one exact line
    fn send_command_and_check(&mut self, command: &Command<'_>, expected: &str) -> Result<()> {
        let line = self.send_command(command)?;

        if line != expected {
            return Err(classify_error(&line));
        }
        Ok(())
    }

    /// Send a command and read its reply line
    fn send_command(&mut self, command: &Command<'_>) -> Result<String> {
        let conn = self.conn_mut()?;
        let bytes = encode_command(command);

        tracing::trace!("Sending {} ({} bytes)", command.command_type().name(), bytes.len());
        conn.send(&bytes)?;

        let line = conn.read_line()?;
        tracing::trace!("Received {:?}", line);

        Ok(line)
    }
}
