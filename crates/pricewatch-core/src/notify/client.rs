//! Per-client subscriber that prints notices according to preferences.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Alert, AlertKind, AlertObserver, NoticeSink};
use crate::error::Error;
use crate::model::{Client, ClientId, NotificationPrefs};

/// Observer bound to one client's notification preferences.
pub struct ClientObserver {
    client_id: ClientId,
    name: String,
    prefs: RwLock<NotificationPrefs>,
    sink: Arc<dyn NoticeSink>,
}

impl ClientObserver {
    /// Create an observer for `client` that writes notices to `sink`.
    pub fn new(client: &Client, sink: Arc<dyn NoticeSink>) -> Self {
        Self {
            client_id: client.id,
            name: client.name.clone(),
            prefs: RwLock::new(client.prefs),
            sink,
        }
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current preferences.
    pub fn prefs(&self) -> NotificationPrefs {
        *self.prefs.read()
    }

    /// Replace the preferences used for future alerts.
    pub fn set_prefs(&self, prefs: NotificationPrefs) {
        *self.prefs.write() = prefs;
    }

    /// The notice this client should see for `alert`, if any.
    pub fn notice_for(&self, alert: &Alert) -> Option<String> {
        if !self.prefs().wants(alert.kind) {
            return None;
        }

        let product = &alert.updated;
        match alert.kind {
            AlertKind::Added => Some(format!(
                "[{}] has been created with a price of {} : [{}] received a notification.",
                product.name, product.price, self.name
            )),
            AlertKind::PriceUpdated => {
                let previous = alert.previous.as_ref()?;
                Some(format!(
                    "The price of [{}] has been updated to {}. Previous price was {} : [{}] received a notification.",
                    product.name, product.price, previous.price, self.name
                ))
            }
            AlertKind::Updated | AlertKind::Removed => None,
        }
    }
}

impl AlertObserver for ClientObserver {
    fn on_alert(&self, alert: &Alert) {
        match self.notice_for(alert) {
            Some(notice) => self.sink.emit(&notice),
            None => tracing::trace!(
                client_id = %self.client_id,
                kind = %alert.kind,
                "alert filtered by preferences"
            ),
        }
    }

    fn on_completed(&self) {
        self.sink
            .emit(&format!("{} has stopped receiving notifications.", self.name));
    }

    fn on_error(&self, error: &Error) {
        self.sink
            .emit(&format!("{} encountered an error: {}", self.name, error));
    }
}

impl std::fmt::Debug for ClientObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientObserver")
            .field("client_id", &self.client_id)
            .field("name", &self.name)
            .field("prefs", &self.prefs())
            .finish()
    }
}
