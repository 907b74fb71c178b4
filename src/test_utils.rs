//! Sinks that record or refuse notices, for tests.

use crate::core::{Notice, NoticeSink, NotifyError};
use std::io;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// A sink that records every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// The recorded notices as `(label, recipient, message)` triples.
    pub fn lines(&self) -> Vec<(String, String, String)> {
        self.notices()
            .into_iter()
            .map(|n| (n.channel.label().to_string(), n.recipient, n.message))
            .collect()
    }
}

impl NoticeSink for RecordingSink {
    fn name(&self) -> &str {
        "recording_mock"
    }

    fn emit(&self, notice: &Notice) -> Result<(), NotifyError> {
        self.notices.lock().unwrap().push(notice.clone());
        Ok(())
    }
}

/// A sink that accepts `capacity` notices and fails on every one after.
#[derive(Debug)]
pub struct FailingSink {
    capacity: usize,
    accepted: AtomicUsize,
}

impl FailingSink {
    pub fn after(capacity: usize) -> Self {
        Self {
            capacity,
            accepted: AtomicUsize::new(0),
        }
    }

    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}

impl NoticeSink for FailingSink {
    fn name(&self) -> &str {
        "failing_mock"
    }

    fn emit(&self, _notice: &Notice) -> Result<(), NotifyError> {
        if self.accepted() >= self.capacity {
            return Err(NotifyError::Delivery {
                sink: self.name().to_string(),
                source: io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"),
            });
        }
        self.accepted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
