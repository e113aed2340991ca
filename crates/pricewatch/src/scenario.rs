//! Scripted demonstration: seed, subscribe, add a product, change a price, clean up.

use std::sync::Arc;

use pricewatch_core::{
    ClientService, Money, NoticeSink, NotificationHub, NotificationPrefs, ProductService, Store,
    Subscription,
};
use tracing::{info, warn};

use crate::config::{DemoConfig, StoreLocation};
use crate::error::Result;

/// Clients created when the client table is empty.
const SEED_CLIENTS: [(&str, NotificationPrefs); 4] = [
    ("Client1", NotificationPrefs::new(true, true)),
    ("Client2", NotificationPrefs::new(true, false)),
    ("Client3", NotificationPrefs::new(false, true)),
    ("Client4", NotificationPrefs::new(false, false)),
];

/// Product created when the product table is empty.
const SEED_PRODUCT: (&str, Money) = ("Product1", Money::from_units(100));

/// Product added while clients are subscribed.
const NEW_PRODUCT: (&str, Money) = ("Product2", Money::from_units(200));

/// Price Product1 is changed to.
const NEW_PRICE: Money = Money::from_units(190);

/// What a demo run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoReport {
    pub clients_seeded: usize,
    pub products_seeded: usize,
    pub subscriptions: usize,
    pub price_changed: bool,
    pub clients_removed: usize,
    pub products_removed: usize,
}

/// Open the configured store and create its schema.
pub fn open_store(config: &DemoConfig) -> Result<Store> {
    config.validate()?;
    let store = match &config.store {
        StoreLocation::File(path) => Store::open_with_schema(path)?,
        StoreLocation::InMemory => Store::in_memory_with_schema()?,
    };
    Ok(store)
}

/// Run the full demonstration against `store`, writing notices to `sink`.
pub fn run(store: &Store, config: &DemoConfig, sink: Arc<dyn NoticeSink>) -> Result<DemoReport> {
    let hub = NotificationHub::new();
    let products = ProductService::new(store, &hub);
    let clients = ClientService::with_sink(store, &hub, sink.clone());

    let mut report = seed_database(&clients, &products)?;
    info!(
        clients_seeded = report.clients_seeded,
        products_seeded = report.products_seeded,
        "database ready"
    );

    let subscriptions = subscribe_interested(&clients, sink.as_ref())?;
    report.subscriptions = subscriptions.len();

    report.price_changed = run_notifications(&products)?;

    for subscription in &subscriptions {
        subscription.release();
    }
    hub.complete();

    if config.clear_on_exit {
        report.clients_removed = clients.delete_all()?;
        report.products_removed = products.delete_all()?;
        sink.emit("All products have been deleted from the database.");
    }

    info!(?report, "demo finished");
    Ok(report)
}

/// Insert the reference clients and product into empty tables.
pub fn seed_database(clients: &ClientService<'_>, products: &ProductService<'_>) -> Result<DemoReport> {
    let mut report = DemoReport::default();

    if clients.all_clients()?.is_empty() {
        for (name, prefs) in SEED_CLIENTS {
            clients.add_client(name, prefs)?;
        }
        report.clients_seeded = SEED_CLIENTS.len();
    }

    if products.all_products()?.is_empty() {
        let (name, price) = SEED_PRODUCT;
        products.add_product(name, price)?;
        report.products_seeded = 1;
    }

    Ok(report)
}

/// Subscribe every client that has at least one preference enabled.
pub fn subscribe_interested(
    clients: &ClientService<'_>,
    sink: &dyn NoticeSink,
) -> Result<Vec<Subscription>> {
    let subscriptions = clients
        .all_clients()?
        .iter()
        .filter(|client| client.prefs.any())
        .map(|client| {
            let subscription = clients.subscribe_client(client);
            sink.emit(&format!("{} subscribed to notifications.", client.name));
            subscription
        })
        .collect();
    Ok(subscriptions)
}

/// Add Product2, then change Product1's price.
///
/// Returns whether Product1 was found and repriced.
pub fn run_notifications(products: &ProductService<'_>) -> Result<bool> {
    let existing = products.all_products()?;

    let (name, price) = NEW_PRODUCT;
    let added = products.add_product(name, price)?;
    info!(product_id = %added.id, name = %added.name, "product added");

    let (seed_name, _) = SEED_PRODUCT;
    let Some(target) = existing.iter().find(|p| p.name == seed_name) else {
        warn!(name = seed_name, "seed product not found, skipping price change");
        return Ok(false);
    };

    let updated = products.update_product_price(target.id, NEW_PRICE)?;
    if let Some(updated) = &updated {
        info!(product_id = %updated.id, price = %updated.price, "price changed");
    }
    Ok(updated.is_some())
}
