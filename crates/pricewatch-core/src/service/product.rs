//! Product service: store operations plus alerts.

use crate::error::Result;
use crate::model::{Money, Product, ProductId};
use crate::notify::NotificationHub;
use crate::store::Store;

/// Product operations that broadcast alerts on add and price change.
pub struct ProductService<'a> {
    store: &'a Store,
    hub: &'a NotificationHub,
}

impl<'a> ProductService<'a> {
    pub fn new(store: &'a Store, hub: &'a NotificationHub) -> Self {
        Self { store, hub }
    }

    /// All products.
    pub fn all_products(&self) -> Result<Vec<Product>> {
        self.store.products()
    }

    /// Look up a product; `None` if it does not exist.
    pub fn product_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        self.store.product(id)
    }

    /// Persist a new product, then broadcast an `Added` alert.
    pub fn add_product(&self, name: &str, price: Money) -> Result<Product> {
        let product = self.store.insert_product(name, price)?;
        self.hub.notify_added(&product);
        Ok(product)
    }

    /// Change name and price.
    ///
    /// A `PriceUpdated` alert is sent only if the price differs from the
    /// stored one; name-only edits are silent. Returns `None` for a missing id.
    pub fn update_product(&self, id: ProductId, name: &str, price: Money) -> Result<Option<Product>> {
        let Some(previous) = self.store.product(id)? else {
            tracing::warn!(product_id = %id, "update of missing product ignored");
            return Ok(None);
        };

        let price_changed = previous.price != price;
        let updated = Product::new(id, name, price);
        self.store.update_product(&updated)?;

        if price_changed {
            self.hub.notify_price_change(&updated, &previous);
        }
        Ok(Some(updated))
    }

    /// Change the price and always broadcast a `PriceUpdated` alert, even if
    /// the price is unchanged. Returns `None` for a missing id.
    pub fn update_product_price(&self, id: ProductId, price: Money) -> Result<Option<Product>> {
        let Some(previous) = self.store.product(id)? else {
            tracing::warn!(product_id = %id, "price update of missing product ignored");
            return Ok(None);
        };

        let updated = Product {
            price,
            ..previous.clone()
        };
        self.store.update_product(&updated)?;

        self.hub.notify_price_change(&updated, &previous);
        Ok(Some(updated))
    }

    /// Delete a product. No alert is sent. Returns `false` for a missing id.
    pub fn delete_product(&self, id: ProductId) -> Result<bool> {
        self.store.delete_product(id)
    }

    /// Delete every product, returning how many were removed.
    pub fn delete_all(&self) -> Result<usize> {
        self.store.delete_all_products()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::{Client, ClientId, NotificationPrefs};
    use crate::notify::{ClientObserver, RecordingSink};

    fn setup() -> (Store, NotificationHub, Arc<RecordingSink>) {
        let store = Store::in_memory_with_schema().unwrap();
        let hub = NotificationHub::new();
        let sink = Arc::new(RecordingSink::new());
        let client = Client::new(ClientId(1), "Watcher", NotificationPrefs::all());
        let _sub = hub.subscribe(Arc::new(ClientObserver::new(&client, sink.clone())));
        (store, hub, sink)
    }

    #[test]
    fn test_add_notifies() {
        let (store, hub, sink) = setup();
        let service = ProductService::new(&store, &hub);

        let product = service.add_product("Product2", Money::from_units(200)).unwrap();

        assert_eq!(service.product_by_id(product.id).unwrap(), Some(product));
        assert_eq!(sink.len(), 1);
        assert!(sink.notices()[0].starts_with("[Product2] has been created"));
    }

    #[test]
    fn test_update_name_only_is_silent() {
        let (store, hub, sink) = setup();
        let service = ProductService::new(&store, &hub);
        let product = service.add_product("Old", Money::from_units(5)).unwrap();
        sink.take();

        let updated = service
            .update_product(product.id, "New", Money::from_units(5))
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "New");
        assert_eq!(service.product_by_id(product.id).unwrap().unwrap().name, "New");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_update_with_new_price_notifies() {
        let (store, hub, sink) = setup();
        let service = ProductService::new(&store, &hub);
        let product = service.add_product("Thing", Money::from_units(5)).unwrap();
        sink.take();

        service
            .update_product(product.id, "Thing v2", Money::from_units(6))
            .unwrap();

        assert_eq!(
            sink.take(),
            vec!["The price of [Thing v2] has been updated to $6.00. Previous price was $5.00 : [Watcher] received a notification."]
        );
    }

    #[test]
    fn test_update_price_always_notifies() {
        let (store, hub, sink) = setup();
        let service = ProductService::new(&store, &hub);
        let product = service.add_product("Same", Money::from_units(5)).unwrap();
        sink.take();

        service
            .update_product_price(product.id, Money::from_units(5))
            .unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_missing_ids_are_silent_noops() {
        let (store, hub, sink) = setup();
        let service = ProductService::new(&store, &hub);

        assert!(service
            .update_product_price(ProductId(99), Money::from_units(1))
            .unwrap()
            .is_none());
        assert!(service
            .update_product(ProductId(99), "x", Money::from_units(1))
            .unwrap()
            .is_none());
        assert!(!service.delete_product(ProductId(99)).unwrap());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_delete_does_not_notify() {
        let (store, hub, sink) = setup();
        let service = ProductService::new(&store, &hub);
        let product = service.add_product("Gone", Money::from_units(1)).unwrap();
        sink.take();

        assert!(service.delete_product(product.id).unwrap());
        assert!(service.product_by_id(product.id).unwrap().is_none());
        assert!(sink.is_empty());
    }
}
