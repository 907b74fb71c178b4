//! Registered users, the observers of the hub.

use crate::core::{NotifyError, Observer};
use crate::notification::NotificationChannel;

/// A registered recipient bound to exactly one notification channel.
///
/// The channel is resolved before construction; a user never looks up its
/// own channel and cannot change it afterwards.
#[derive(Debug, Clone)]
pub struct User {
    name: String,
    age: u32,
    phone: String,
    email: String,
    channel: NotificationChannel,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        phone: impl Into<String>,
        email: impl Into<String>,
        channel: NotificationChannel,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            phone: phone.into(),
            email: email.into(),
            channel,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn channel(&self) -> &NotificationChannel {
        &self.channel
    }
}

impl Observer for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, message: &str) -> Result<(), NotifyError> {
        self.channel.send(&self.name, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::ChannelKind;
    use crate::test_utils::RecordingSink;
    use std::sync::Arc;

    #[test]
    fn test_update_sends_through_bound_channel() {
        let sink = Arc::new(RecordingSink::new());
        let channel = NotificationChannel::new(ChannelKind::Sms, sink.clone());
        let user = User::new("Bob", 31, "555-0101", "bob@example.com", channel);

        user.update("Ping").unwrap();

        let notices = sink.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].channel, ChannelKind::Sms);
        assert_eq!(notices[0].recipient, "Bob");
        assert_eq!(notices[0].message, "Ping");
    }

    #[test]
    fn test_accessors() {
        let sink = Arc::new(RecordingSink::new());
        let channel = NotificationChannel::new(ChannelKind::App, sink);
        let user = User::new("Cleo", 0, "", "cleo@example.com", channel);

        assert_eq!(user.name(), "Cleo");
        assert_eq!(user.age(), 0);
        assert_eq!(user.phone(), "");
        assert_eq!(user.email(), "cleo@example.com");
        assert_eq!(user.channel().kind(), ChannelKind::App);
    }
}
