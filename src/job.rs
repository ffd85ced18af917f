//! Job definitions

/// A reserved job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Opaque id assigned by the server, echoed back by delete/bury/release
    pub id: u64,

    /// Job body exactly as it was submitted
    pub data: Vec<u8>,
}

impl Job {
    pub fn new(id: u64, data: Vec<u8>) -> Self {
        Self { id, data }
    }
}
