//! Foreground thread detection and callback marshalling

use parking_lot::Mutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, ThreadId};
use std::time::Duration;
use tracing::{trace, warn};

/// Work posted to a foreground thread
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A thread that must not block on I/O, such as a UI event loop
pub trait MainThread: Send + Sync {
    /// Whether the calling thread is this thread
    fn is_current(&self) -> bool;

    /// Queue `task` to run on this thread
    fn post(&self, task: Task);
}

/// A [`MainThread`] driven by explicitly pumping a queue
///
/// The thread that creates the loop is its foreground thread. Posted tasks
/// run when that thread calls [`run_pending`](Self::run_pending) or
/// [`run_once`](Self::run_once).
pub struct ForegroundLoop {
    thread: ThreadId,
    sender: Mutex<Sender<Task>>,
    receiver: Mutex<Receiver<Task>>,
}

impl ForegroundLoop {
    /// Create a loop owned by the calling thread
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            thread: thread::current().id(),
            sender: Mutex::new(sender),
            receiver: Mutex::new(receiver),
        }
    }

    /// Run every queued task, returning how many ran
    pub fn run_pending(&self) -> usize {
        let tasks: Vec<Task> = self.receiver.lock().try_iter().collect();
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }

    /// Wait up to `timeout` for one task and run it
    pub fn run_once(&self, timeout: Duration) -> bool {
        let next = self.receiver.lock().recv_timeout(timeout);
        match next {
            Ok(task) => {
                task();
                true
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }
}

impl Default for ForegroundLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl MainThread for ForegroundLoop {
    fn is_current(&self) -> bool {
        thread::current().id() == self.thread
    }

    fn post(&self, task: Task) {
        trace!("Posting task to foreground thread {:?}", self.thread);
        if self.sender.lock().send(task).is_err() {
            warn!("Foreground loop is gone, dropping task");
        }
    }
}

impl std::fmt::Debug for ForegroundLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForegroundLoop")
            .field("thread", &self.thread)
            .finish_non_exhaustive()
    }
}
