//! Command definitions
//!
//! Represents commands sent to the server.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Quit,
    Watch,
    Use,
    Put,
    Delete,
    Reserve,
    Bury,
    Release,
    KickJob,
    Kick,
}

impl CommandType {
    /// Verb as written on the wire
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Quit => "quit",
            CommandType::Watch => "watch",
            CommandType::Use => "use",
            CommandType::Put => "put",
            CommandType::Delete => "delete",
            CommandType::Reserve => "reserve",
            CommandType::Bury => "bury",
            CommandType::Release => "release",
            CommandType::KickJob => "kick-job",
            CommandType::Kick => "kick",
        }
    }
}

/// A command ready to be encoded
#[derive(Debug, Clone)]
pub enum Command<'a> {
    /// Ask the server to close the connection
    Quit,

    /// Add a tube to the reserve watch list
    Watch { tube: &'a str },

    /// Select the tube that put submits to
    Use { tube: &'a str },

    /// Submit a job; the declared length is always `payload.len()`
    Put {
        priority: u64,
        delay: u64,
        ttr: u64,
        payload: &'a [u8],
    },

    /// Remove a job
    Delete { id: u64 },

    /// Wait for the next ready job
    Reserve,

    /// Put a reserved job aside
    Bury { id: u64, priority: u64 },

    /// Return a reserved job to the ready queue
    Release { id: u64, priority: u64, delay: u64 },

    /// Kick one buried or delayed job
    KickJob { id: u64 },

    /// Kick up to `bound` jobs
    Kick { bound: u64 },
}

impl Command<'_> {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Quit => CommandType::Quit,
            Command::Watch { .. } => CommandType::Watch,
            Command::Use { .. } => CommandType::Use,
            Command::Put { .. } => CommandType::Put,
            Command::Delete { .. } => CommandType::Delete,
            Command::Reserve => CommandType::Reserve,
            Command::Bury { .. } => CommandType::Bury,
            Command::Release { .. } => CommandType::Release,
            Command::KickJob { .. } => CommandType::KickJob,
            Command::Kick { .. } => CommandType::Kick,
        }
    }
}
