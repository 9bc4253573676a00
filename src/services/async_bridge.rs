//! Async Bridge: Communication between I/O worker threads and the sync main loop
//!
//! - Worker threads do the blocking file reads and writes
//! - The main UI loop stays synchronous (rendering, input, buffer manipulation)
//! - A std::sync::mpsc channel carries results back
//!
//! The main loop drains the channel once per iteration and turns each message
//! into an editor action.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

/// Messages sent from worker threads to the synchronous main loop
#[derive(Debug)]
pub enum AsyncMessage {
    /// The input file finished loading
    FileLoaded {
        path: PathBuf,
        result: std::io::Result<Vec<u8>>,
    },

    /// A save finished
    SaveCompleted {
        path: PathBuf,
        /// Buffer revision the written bytes were taken from
        revision: u64,
        result: std::io::Result<usize>,
    },
}

/// Bridge between worker threads and the main loop
pub struct AsyncBridge {
    sender: mpsc::Sender<AsyncMessage>,
    receiver: mpsc::Receiver<AsyncMessage>,
}

impl AsyncBridge {
    /// Create a new async bridge with an unbounded channel
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
        }
    }

    /// Get a sender to hand to a worker thread
    pub fn sender(&self) -> mpsc::Sender<AsyncMessage> {
        self.sender.clone()
    }

    /// Try to receive pending messages (non-blocking)
    ///
    /// Called each iteration of the main loop. Returns all pending messages
    /// without blocking.
    pub fn try_recv_all(&self) -> Vec<AsyncMessage> {
        self.receiver.try_iter().collect()
    }

    /// Block until one message arrives or `timeout` elapses
    pub fn recv_timeout(&self, timeout: Duration) -> Option<AsyncMessage> {
        self.receiver.recv_timeout(timeout).ok()
    }
}

impl Default for AsyncBridge {
    fn default() -> Self {
        Self::new()
    }
}
