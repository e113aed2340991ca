//! Cancellation handles for hub subscriptions.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::AlertObserver;

pub(crate) type ObserverList = Mutex<Vec<Arc<dyn AlertObserver>>>;

/// Identity comparison on the observer allocation, ignoring vtables.
pub(crate) fn same_observer(a: &Arc<dyn AlertObserver>, b: &Arc<dyn AlertObserver>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Handle returned by [`NotificationHub::subscribe`](super::NotificationHub::subscribe).
///
/// Dropping the handle does not unsubscribe; call [`release`](Self::release).
#[must_use = "dropping a subscription leaves the observer registered with no way to remove it"]
pub struct Subscription {
    observers: Weak<ObserverList>,
    observer: Arc<dyn AlertObserver>,
}

impl Subscription {
    pub(crate) fn new(observers: Weak<ObserverList>, observer: Arc<dyn AlertObserver>) -> Self {
        Self {
            observers,
            observer,
        }
    }

    /// Remove the observer from the hub.
    ///
    /// Idempotent: releasing an observer that is no longer registered, or
    /// whose hub is gone, does nothing.
    pub fn release(&self) {
        let Some(observers) = self.observers.upgrade() else {
            return;
        };

        let mut observers = observers.lock();
        if let Some(pos) = observers
            .iter()
            .position(|o| same_observer(o, &self.observer))
        {
            observers.remove(pos);
            tracing::debug!(remaining = observers.len(), "subscription released");
        }
    }

    /// Whether the observer is still registered.
    pub fn is_active(&self) -> bool {
        self.observers
            .upgrade()
            .map(|observers| {
                observers
                    .lock()
                    .iter()
                    .any(|o| same_observer(o, &self.observer))
            })
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
