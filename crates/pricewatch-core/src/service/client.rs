//! Client service: store operations plus subscription management.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::error::Result;
use crate::model::{Client, ClientId, NotificationPrefs};
use crate::notify::{ClientObserver, NoticeSink, NotificationHub, StdoutSink, Subscription};
use crate::store::Store;

/// Client operations and hub registration for client observers.
pub struct ClientService<'a> {
    store: &'a Store,
    hub: &'a NotificationHub,
    sink: Arc<dyn NoticeSink>,
    /// Observers created by [`subscribe_client`](Self::subscribe_client), so
    /// preference edits reach them.
    observers: Mutex<Vec<Weak<ClientObserver>>>,
}

impl<'a> ClientService<'a> {
    /// Create a service whose observers print notices to stdout.
    pub fn new(store: &'a Store, hub: &'a NotificationHub) -> Self {
        Self::with_sink(store, hub, Arc::new(StdoutSink))
    }

    /// Create a service whose observers write notices to `sink`.
    pub fn with_sink(store: &'a Store, hub: &'a NotificationHub, sink: Arc<dyn NoticeSink>) -> Self {
        Self {
            store,
            hub,
            sink,
            observers: Mutex::new(Vec::new()),
        }
    }

    /// All clients.
    pub fn all_clients(&self) -> Result<Vec<Client>> {
        self.store.clients()
    }

    /// Look up a client; `None` if it does not exist.
    pub fn client_by_id(&self, id: ClientId) -> Result<Option<Client>> {
        self.store.client(id)
    }

    /// Persist a new client.
    pub fn add_client(&self, name: &str, prefs: NotificationPrefs) -> Result<Client> {
        self.store.insert_client(name, prefs)
    }

    /// Delete a client. Returns `false` for a missing id.
    ///
    /// Any subscription the client holds stays registered; release it through
    /// its handle.
    pub fn delete_client(&self, id: ClientId) -> Result<bool> {
        self.store.delete_client(id)
    }

    /// Delete every client, returning how many were removed.
    pub fn delete_all(&self) -> Result<usize> {
        self.store.delete_all_clients()
    }

    /// Store new preferences and apply them to the client's live observers.
    ///
    /// Returns `None` for a missing id.
    pub fn update_subscription_prefs(
        &self,
        id: ClientId,
        prefs: NotificationPrefs,
    ) -> Result<Option<Client>> {
        let Some(mut client) = self.store.client(id)? else {
            tracing::warn!(client_id = %id, "preference update of missing client ignored");
            return Ok(None);
        };

        client.prefs = prefs;
        self.store.update_client(&client)?;

        let mut observers = self.observers.lock();
        observers.retain(|weak| match weak.upgrade() {
            Some(observer) => {
                if observer.client_id() == id {
                    observer.set_prefs(prefs);
                }
                true
            }
            None => false,
        });

        tracing::debug!(client_id = %id, ?prefs, "subscription preferences updated");
        Ok(Some(client))
    }

    /// Register a new observer for `client` with the hub.
    pub fn subscribe_client(&self, client: &Client) -> Subscription {
        let observer = Arc::new(ClientObserver::new(client, self.sink.clone()));
        self.observers.lock().push(Arc::downgrade(&observer));

        tracing::debug!(client_id = %client.id, name = %client.name, "client subscribed");
        self.hub.subscribe(observer)
    }
}
