//! Resolves channel tokens into channels.

use super::channel::{ChannelKind, NotificationChannel};
use crate::core::{NoticeSink, NotifyError};
use std::sync::Arc;
use tracing::warn;

/// Creates channels bound to a shared output sink.
#[derive(Clone)]
pub struct ChannelFactory {
    sink: Arc<dyn NoticeSink>,
}

impl ChannelFactory {
    pub fn new(sink: Arc<dyn NoticeSink>) -> Self {
        Self { sink }
    }

    /// Maps a token to a fresh channel.
    ///
    /// Matching is exact: `"Email"` and `" email"` are rejected. Callers
    /// reading user input should pass it through [`normalize_token`] first.
    ///
    /// # Returns
    /// * `Ok(NotificationChannel)` for `"email"`, `"sms"` or `"app"`
    /// * `Err(NotifyError::UnknownChannelType)` carrying the token otherwise
    pub fn create(&self, token: &str) -> Result<NotificationChannel, NotifyError> {
        let kind = ChannelKind::ALL
            .into_iter()
            .find(|kind| kind.token() == token)
            .ok_or_else(|| {
                warn!(token, "Rejected unknown channel type");
                NotifyError::UnknownChannelType(token.to_string())
            })?;
        Ok(NotificationChannel::new(kind, self.sink.clone()))
    }
}

/// Trims and lowercases a channel token typed by a user.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingSink;

    fn factory() -> ChannelFactory {
        ChannelFactory::new(Arc::new(RecordingSink::new()))
    }

    #[test]
    fn test_create_known_tokens() {
        let factory = factory();
        assert_eq!(factory.create("email").unwrap().kind(), ChannelKind::Email);
        assert_eq!(factory.create("sms").unwrap().kind(), ChannelKind::Sms);
        assert_eq!(factory.create("app").unwrap().kind(), ChannelKind::App);
    }

    #[test]
    fn test_create_unknown_token() {
        let err = factory().create("fax").unwrap_err();
        assert!(matches!(err, NotifyError::UnknownChannelType(ref t) if t == "fax"));
        assert_eq!(err.to_string(), "Unknown notification type: fax");
    }

    #[test]
    fn test_create_is_case_sensitive() {
        let factory = factory();
        assert!(factory.create("EMAIL").is_err());
        assert!(factory.create(" sms ").is_err());
        assert!(factory.create("").is_err());
    }

    #[test]
    fn test_normalized_tokens_resolve() {
        let factory = factory();
        for raw in ["  Email ", "SMS", "aPp\n"] {
            assert!(factory.create(&normalize_token(raw)).is_ok(), "{raw:?}");
        }
    }
}
