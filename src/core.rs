//! Core domain types and service traits for NotifyHub
//!
//! This module defines the fundamental data structures and trait contracts
//! shared by the channels, users and the hub that dispatches to them.

use crate::notification::ChannelKind;
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// A single rendered notification, as emitted by a channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    /// The channel the notice was sent through
    pub channel: ChannelKind,
    /// Name of the user receiving the notice
    pub recipient: String,
    /// The free-text message body
    pub message: String,
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Unknown notification type: {0}")]
    UnknownChannelType(String),

    #[error("Observer not attached: {0}")]
    NotFound(String),

    #[error("Observer already attached: {0}")]
    DuplicateObserver(String),

    #[error("Failed to deliver notice via {sink}: {source}")]
    Delivery {
        sink: String,
        #[source]
        source: io::Error,
    },
}

// =============================================================================
// Service Traits
// =============================================================================

/// Receives rendered notices and writes them to a destination
pub trait NoticeSink: Send + Sync {
    /// A short, descriptive name for the sink (e.g., "console").
    /// Used for logging and error reporting.
    fn name(&self) -> &str;

    /// Emits a notice to the destination
    ///
    /// # Returns
    /// * `Ok(())` once the notice has been written
    /// * `Err(NotifyError::Delivery)` if the underlying write failed
    fn emit(&self, notice: &Notice) -> Result<(), NotifyError>;
}

/// An entity that receives broadcast messages.
pub trait Observer: Send + Sync {
    /// Human-readable identity, used for logging and duplicate detection.
    fn name(&self) -> &str;

    /// Handles one broadcast message.
    fn update(&self, message: &str) -> Result<(), NotifyError>;
}

/// An entity that maintains observers and broadcasts messages to them.
pub trait Subject {
    type Observer: ?Sized;

    fn attach(&mut self, observer: Arc<Self::Observer>) -> Result<(), NotifyError>;

    fn detach(&mut self, observer: &Arc<Self::Observer>) -> Result<(), NotifyError>;

    /// Delivers `message` to every attached observer in attachment order.
    /// Stops at the first observer that fails.
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}
