use notifyhub::{core::Observer, ChannelFactory, User};
use std::sync::Arc;

/// Builds a user through the factory, as the console does.
#[allow(dead_code)]
pub fn user(factory: &ChannelFactory, name: &str, token: &str) -> Arc<dyn Observer> {
    let channel = factory.create(token).expect("test token should be valid");
    Arc::new(User::new(
        name,
        30,
        "555-0100",
        format!("{}@example.com", name.to_lowercase()),
        channel,
    ))
}
