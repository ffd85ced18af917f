//! Server Connection
//!
//! One TCP socket to the queue server plus a buffered reader over it.

use std::io::BufReader;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::{QueueError, Result};
use crate::protocol::{read_line, read_payload};

use super::send_all;

/// A single connection to the queue server
///
/// Not safe for concurrent use: one request/response exchange at a time.
pub struct Connection {
    /// TCP stream reader (buffered, kept across exchanges)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (unbuffered, every command goes out whole)
    writer: TcpStream,

    /// Address the connection was opened with
    addr: String,
}

impl Connection {
    /// Dial `addr` with a bounded connect timeout
    ///
    /// Every address `addr` resolves to is tried in turn; the last failure
    /// is returned if none accepts.
    pub fn open(addr: &str, timeout: Duration) -> Result<Self> {
        let mut last_err = None;

        for sock_addr in addr.to_socket_addrs()? {
            match TcpStream::connect_timeout(&sock_addr, timeout) {
                Ok(stream) => return Self::new(stream, addr),
                Err(e) => {
                    tracing::debug!("Connect to {} ({}) failed: {}", addr, sock_addr, e);
                    last_err = Some(e);
                }
            }
        }

        Err(QueueError::Io(last_err.unwrap_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} resolved to no addresses", addr),
            )
        })))
    }

    /// Wrap an already connected stream
    pub fn new(stream: TcpStream, addr: impl Into<String>) -> Result<Self> {
        // Commands are small and each waits for a reply
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: stream,
            addr: addr.into(),
        })
    }

    /// Send a full command buffer
    pub fn send(&mut self, data: &[u8]) -> Result<usize> {
        send_all(&mut self.writer, data)
    }

    /// Read one reply line, terminator included
    pub fn read_line(&mut self) -> Result<String> {
        read_line(&mut self.reader)
    }

    /// Read a `len` byte data block and strip its terminator
    pub fn read_payload(&mut self, len: usize) -> Result<Vec<u8>> {
        read_payload(&mut self.reader, len)
    }

    /// Shut the socket down in both directions
    pub fn shutdown(&self) -> std::io::Result<()> {
        self.writer.shutdown(Shutdown::Both)
    }

    /// Get the address string
    pub fn addr(&self) -> &str {
        &self.addr
    }
}
