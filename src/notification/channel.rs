//! The closed set of notification channels.

use crate::core::{Notice, NoticeSink, NotifyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// The kind of channel a user is notified through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Sms,
    App,
}

impl ChannelKind {
    /// Every supported channel, in menu order.
    pub const ALL: [ChannelKind; 3] = [ChannelKind::Email, ChannelKind::Sms, ChannelKind::App];

    /// The prefix printed in front of every notice sent through this channel.
    pub fn label(self) -> &'static str {
        match self {
            ChannelKind::Email => "EMAIL",
            ChannelKind::Sms => "SMS",
            ChannelKind::App => "APP",
        }
    }

    /// The token accepted by [`ChannelFactory::create`](super::ChannelFactory::create).
    pub fn token(self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::Sms => "sms",
            ChannelKind::App => "app",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A channel bound to the sink its notices are written to.
#[derive(Clone)]
pub struct NotificationChannel {
    kind: ChannelKind,
    sink: Arc<dyn NoticeSink>,
}

impl NotificationChannel {
    pub fn new(kind: ChannelKind, sink: Arc<dyn NoticeSink>) -> Self {
        Self { kind, sink }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// Renders a notice for `recipient` and emits it to the sink.
    #[instrument(skip(self, message), fields(channel = %self.kind))]
    pub fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        let notice = Notice {
            channel: self.kind,
            recipient: recipient.to_string(),
            message: message.to_string(),
        };
        debug!(sink = self.sink.name(), "Emitting notice");
        self.sink.emit(&notice)
    }
}

impl fmt::Debug for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationChannel")
            .field("kind", &self.kind)
            .field("sink", &self.sink.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingSink;

    #[test]
    fn test_labels_and_tokens() {
        assert_eq!(ChannelKind::Email.label(), "EMAIL");
        assert_eq!(ChannelKind::Sms.label(), "SMS");
        assert_eq!(ChannelKind::App.label(), "APP");
        let tokens: Vec<_> = ChannelKind::ALL.iter().map(|k| k.token()).collect();
        assert_eq!(tokens, vec!["email", "sms", "app"]);
        assert_eq!(ChannelKind::Sms.to_string(), "sms");
    }

    #[test]
    fn test_serializes_as_token() {
        let json = serde_json::to_string(&ChannelKind::App).unwrap();
        assert_eq!(json, "\"app\"");
    }

    #[test]
    fn test_send_emits_one_notice() {
        let sink = Arc::new(RecordingSink::new());
        let channel = NotificationChannel::new(ChannelKind::Email, sink.clone());

        channel.send("Ana", "Hello").unwrap();

        assert_eq!(
            sink.notices(),
            vec![Notice {
                channel: ChannelKind::Email,
                recipient: "Ana".to_string(),
                message: "Hello".to_string(),
            }]
        );
    }
}
