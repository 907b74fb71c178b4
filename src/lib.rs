//! NotifyHub - register users with a notification channel and broadcast to them
//!
//! Users are observers bound to one channel strategy (email, SMS or app).
//! The hub keeps them in registration order and hands every broadcast to
//! each of them in turn.

pub mod cli;
pub mod config;
pub mod console;
pub mod core;
pub mod formatting;
pub mod hub;
pub mod notification;
pub mod outputs;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod user;

// Re-export core types for convenience
pub use crate::core::*;
pub use hub::{DuplicatePolicy, NotificationHub};
pub use notification::{ChannelFactory, ChannelKind, NotificationChannel};
pub use user::User;
