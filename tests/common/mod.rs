//! Scripted beanstalkd stand-in for integration tests
//!
//! Accepts one connection, reads whole requests (a put's data block
//! included), reports each one over a channel and answers from a script.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{unbounded, Receiver, Sender};

/// What the server does after reading a request
pub enum Step {
    /// Write these bytes back
    Reply(Vec<u8>),

    /// Write these bytes back, then hang up
    ReplyThenClose(Vec<u8>),

    /// Hang up without answering
    Close,
}

pub fn reply(bytes: &[u8]) -> Step {
    Step::Reply(bytes.to_vec())
}

pub struct ScriptedServer {
    addr: String,
    requests: Receiver<Vec<u8>>,
    handle: Option<JoinHandle<()>>,
}

impl ScriptedServer {
    /// Serve one connection with the given script
    ///
    /// Requests arriving after the script runs out are still reported but
    /// get no answer.
    pub fn spawn(script: Vec<Step>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let (tx, rx) = unbounded();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            serve(stream, script, tx);
        });

        Self {
            addr,
            requests: rx,
            handle: Some(handle),
        }
    }

    /// Accept one connection and drop it straight away
    pub fn hang_up() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let (_tx, rx) = unbounded();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let _ = stream.shutdown(Shutdown::Both);
        });

        Self {
            addr,
            requests: rx,
            handle: Some(handle),
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Next request the server read, as raw bytes
    pub fn next_request(&self) -> Vec<u8> {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server saw no request")
    }

    /// Wait for the server thread and collect everything it read
    pub fn finish(mut self) -> Vec<Vec<u8>> {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
        self.requests.try_iter().collect()
    }
}

fn serve(stream: TcpStream, script: Vec<Step>, tx: Sender<Vec<u8>>) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut writer = stream;
    let mut script = script.into_iter();

    while let Some(request) = read_request(&mut reader) {
        let _ = tx.send(request);

        match script.next() {
            Some(Step::Reply(bytes)) => {
                if writer.write_all(&bytes).is_err() {
                    return;
                }
            }
            Some(Step::ReplyThenClose(bytes)) => {
                let _ = writer.write_all(&bytes);
                let _ = writer.shutdown(Shutdown::Both);
                return;
            }
            Some(Step::Close) => {
                let _ = writer.shutdown(Shutdown::Both);
                return;
            }
            None => {}
        }
    }
}

/// Read one command line, plus the data block when it is a put
fn read_request<R: BufRead>(reader: &mut R) -> Option<Vec<u8>> {
    let mut request = Vec::new();
    match reader.read_until(b'\n', &mut request) {
        Ok(0) | Err(_) => return None,
        Ok(_) => {}
    }

    if request.starts_with(b"put ") {
        let line = String::from_utf8_lossy(&request).into_owned();
        let len: usize = line.trim_end().rsplit(' ').next()?.parse().ok()?;
        let mut data = vec![0u8; len + 2];
        reader.read_exact(&mut data).ok()?;
        request.extend_from_slice(&data);
    }

    Some(request)
}
