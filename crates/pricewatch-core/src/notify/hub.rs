//! Notification hub holding the active subscriber list.

use std::sync::Arc;

use parking_lot::Mutex;

use super::subscription::{same_observer, ObserverList};
use super::{Alert, AlertObserver, Subscription};
use crate::error::Error;
use crate::model::Product;

/// Broadcasts product alerts to subscribed observers.
///
/// Delivery is synchronous and in subscription order. Each broadcast walks a
/// snapshot of the list taken when it starts: an observer released from
/// inside a handler still receives the alert in flight and nothing after it,
/// and an observer subscribed from inside a handler first hears the next one.
pub struct NotificationHub {
    observers: Arc<ObserverList>,
}

impl NotificationHub {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        Self {
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register an observer.
    ///
    /// Subscribing an observer that is already registered leaves the list
    /// unchanged; the returned handle still removes it.
    pub fn subscribe(&self, observer: Arc<dyn AlertObserver>) -> Subscription {
        {
            let mut observers = self.observers.lock();
            if observers.iter().any(|o| same_observer(o, &observer)) {
                tracing::debug!("observer already subscribed");
            } else {
                observers.push(observer.clone());
                tracing::debug!(subscribers = observers.len(), "subscription created");
            }
        }

        Subscription::new(Arc::downgrade(&self.observers), observer)
    }

    /// Broadcast an [`AlertKind::Added`](super::AlertKind::Added) alert.
    pub fn notify_added(&self, product: &Product) {
        self.broadcast(&Alert::added(product.clone()));
    }

    /// Broadcast an [`AlertKind::PriceUpdated`](super::AlertKind::PriceUpdated) alert.
    pub fn notify_price_change(&self, updated: &Product, previous: &Product) {
        self.broadcast(&Alert::price_updated(updated.clone(), previous.clone()));
    }

    /// Deliver an alert to every current subscriber.
    pub fn broadcast(&self, alert: &Alert) {
        let observers = self.snapshot();
        tracing::trace!(
            kind = %alert.kind,
            product_id = %alert.updated.id,
            subscribers = observers.len(),
            "broadcasting alert"
        );

        for observer in observers {
            observer.on_alert(alert);
        }
    }

    /// Deliver an error signal to every current subscriber.
    pub fn notify_error(&self, error: &Error) {
        let observers = self.snapshot();
        tracing::warn!(error = %error, subscribers = observers.len(), "broadcasting error");

        for observer in observers {
            observer.on_error(error);
        }
    }

    /// End the stream: signal completion to every subscriber, then drop them all.
    ///
    /// Outstanding [`Subscription`] handles become no-ops.
    pub fn complete(&self) {
        let observers = std::mem::take(&mut *self.observers.lock());
        tracing::debug!(subscribers = observers.len(), "completing notification stream");

        for observer in observers {
            observer.on_completed();
        }
    }

    /// Number of registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.observers.lock().len()
    }

    fn snapshot(&self) -> Vec<Arc<dyn AlertObserver>> {
        self.observers.lock().clone()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}
