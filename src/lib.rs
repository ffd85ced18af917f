//! # beanq
//!
//! A blocking client for beanstalkd-style job queues:
//! - One TCP connection, one request/response exchange at a time
//! - Byte-exact framing of command lines, job bodies and replies
//! - Transport, protocol and server errors kept apart
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       QueueClient                            │
//! │   watch / use / put / reserve / delete / bury / release      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Protocol Codec                            │
//! │      (command encoder, reply scanner, error table)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  send_all   │          │ BufReader   │
//!   │ (writes)    │          │ (replies)   │
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬───────────┘
//!                       ▼
//!                ┌─────────────┐
//!                │  TcpStream  │
//!                └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use beanq::QueueClient;
//!
//! # fn main() -> beanq::Result<()> {
//! let mut client = QueueClient::connect("127.0.0.1:11300")?;
//! client.use_tube("rawx")?;
//! let id = client.put(b"rebuild chunk 42")?;
//!
//! client.watch("rawx")?;
//! let job = client.reserve()?;
//! client.delete(job.id)?;
//! # let _ = id;
//! client.close();
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod job;
pub mod network;
pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{QueueError, Result, ServerError};
pub use config::Config;
pub use job::Job;
pub use client::QueueClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of beanq
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
