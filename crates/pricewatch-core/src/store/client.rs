//! Client table operations.

use rusqlite::{params, OptionalExtension, Row};

use super::Store;
use crate::error::Result;
use crate::model::{Client, ClientId, NotificationPrefs};

const SELECT_CLIENT: &str = "SELECT id, name, notify_new, notify_price FROM clients";

fn client_from_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        name: row.get(1)?,
        prefs: NotificationPrefs::new(row.get(2)?, row.get(3)?),
    })
}

impl Store {
    /// Insert a client and return it with its assigned id.
    pub fn insert_client(&self, name: &str, prefs: NotificationPrefs) -> Result<Client> {
        self.conn.execute(
            "INSERT INTO clients (name, notify_new, notify_price) VALUES (?1, ?2, ?3)",
            params![name, prefs.new_products, prefs.price_changes],
        )?;
        let id = ClientId(self.conn.last_insert_rowid());
        tracing::debug!(client_id = %id, name, ?prefs, "client inserted");
        Ok(Client::new(id, name, prefs))
    }

    /// All clients, ordered by id.
    pub fn clients(&self) -> Result<Vec<Client>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_CLIENT} ORDER BY id"))?;
        let clients = stmt
            .query_map([], client_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(clients)
    }

    /// Look up a client by id.
    pub fn client(&self, id: ClientId) -> Result<Option<Client>> {
        let client = self
            .conn
            .query_row(
                &format!("{SELECT_CLIENT} WHERE id = ?1"),
                params![id],
                client_from_row,
            )
            .optional()?;
        Ok(client)
    }

    /// Persist the name and preferences of an existing client.
    ///
    /// Returns `false` if no row has the client's id.
    pub fn update_client(&self, client: &Client) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE clients SET name = ?1, notify_new = ?2, notify_price = ?3 WHERE id = ?4",
            params![
                client.name,
                client.prefs.new_products,
                client.prefs.price_changes,
                client.id
            ],
        )?;
        tracing::debug!(client_id = %client.id, changed, "client updated");
        Ok(changed > 0)
    }

    /// Delete a client. Returns `false` if it did not exist.
    pub fn delete_client(&self, id: ClientId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM clients WHERE id = ?1", params![id])?;
        tracing::debug!(client_id = %id, changed, "client deleted");
        Ok(changed > 0)
    }

    /// Delete every client, returning the number of rows removed.
    pub fn delete_all_clients(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM clients", [])?;
        tracing::debug!(removed, "clients cleared");
        Ok(removed)
    }

    /// Number of stored clients.
    pub fn client_count(&self) -> Result<usize> {
        self.count("clients")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_roundtrip_preserves_prefs() {
        let store = Store::in_memory_with_schema().unwrap();
        let client = store
            .insert_client("Client3", NotificationPrefs::new(false, true))
            .unwrap();

        let loaded = store.client(client.id).unwrap().unwrap();
        assert_eq!(loaded, client);
        assert!(!loaded.prefs.new_products);
        assert!(loaded.prefs.price_changes);
    }

    #[test]
    fn test_update_and_delete_client() {
        let store = Store::in_memory_with_schema().unwrap();
        let mut client = store.insert_client("Client1", NotificationPrefs::all()).unwrap();

        client.prefs = NotificationPrefs::none();
        assert!(store.update_client(&client).unwrap());
        assert_eq!(
            store.client(client.id).unwrap().unwrap().prefs,
            NotificationPrefs::none()
        );

        assert!(store.delete_client(client.id).unwrap());
        assert!(store.client(client.id).unwrap().is_none());
        assert_eq!(store.client_count().unwrap(), 0);
    }

    #[test]
    fn test_clients_ordered_by_id() {
        let store = Store::in_memory_with_schema().unwrap();
        for name in ["Client1", "Client2", "Client3"] {
            store.insert_client(name, NotificationPrefs::all()).unwrap();
        }

        let names: Vec<String> = store.clients().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Client1", "Client2", "Client3"]);
        assert_eq!(store.delete_all_clients().unwrap(), 3);
    }
}
