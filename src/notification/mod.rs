//! Notification channels and the factory that resolves them.
//!
//! A channel is the strategy a user is bound to at registration time. Every
//! channel renders a [`Notice`](crate::core::Notice) and hands it to the
//! output sink it was created with.
pub mod channel;
pub mod factory;

pub use channel::{ChannelKind, NotificationChannel};
pub use factory::{normalize_token, ChannelFactory};
