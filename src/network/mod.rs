//! Network Module
//!
//! TCP plumbing under the queue client.
//!
//! ## Architecture
//! - One blocking socket per client, no pooling
//! - Buffered reads, whole-buffer writes retried past short writes

mod connection;
mod writer;

pub use connection::Connection;
pub use writer::send_all;
