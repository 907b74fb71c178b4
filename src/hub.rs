//! The notification hub: keeps registered observers and broadcasts to them.

use crate::core::{NotifyError, Observer, Subject};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// How the hub treats an observer that is already attached.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Attach it again. The observer then receives every broadcast once per
    /// attachment.
    #[default]
    Allow,
    /// Refuse observers that are already attached, or whose name matches an
    /// attached observer.
    Reject,
}

/// Holds observers in attachment order.
pub struct NotificationHub {
    observers: Vec<Arc<dyn Observer>>,
    duplicate_policy: DuplicatePolicy,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            observers: Vec::new(),
            duplicate_policy,
        }
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Names of the attached observers, in attachment order.
    pub fn names(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    fn is_duplicate(&self, observer: &Arc<dyn Observer>) -> bool {
        self.observers
            .iter()
            .any(|o| Arc::ptr_eq(o, observer) || o.name() == observer.name())
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject for NotificationHub {
    type Observer = dyn Observer;

    #[instrument(skip_all, fields(observer = observer.name()))]
    fn attach(&mut self, observer: Arc<dyn Observer>) -> Result<(), NotifyError> {
        if self.duplicate_policy == DuplicatePolicy::Reject && self.is_duplicate(&observer) {
            warn!("Refusing duplicate observer");
            return Err(NotifyError::DuplicateObserver(observer.name().to_string()));
        }
        self.observers.push(observer);
        debug!(total = self.observers.len(), "Observer attached");
        Ok(())
    }

    #[instrument(skip_all, fields(observer = observer.name()))]
    fn detach(&mut self, observer: &Arc<dyn Observer>) -> Result<(), NotifyError> {
        let index = self
            .observers
            .iter()
            .position(|o| Arc::ptr_eq(o, observer))
            .ok_or_else(|| NotifyError::NotFound(observer.name().to_string()))?;
        self.observers.remove(index);
        debug!(total = self.observers.len(), "Observer detached");
        Ok(())
    }

    #[instrument(skip_all, fields(observers = self.observers.len()))]
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        for observer in &self.observers {
            observer.update(message)?;
        }
        info!("Broadcast delivered");
        Ok(())
    }
}
