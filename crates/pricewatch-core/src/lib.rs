//! Pricewatch core library.
//!
//! Products and clients persisted in SQLite, and a notification hub that
//! tells subscribed clients when products are added or change price.
//!
//! Everything runs synchronously on the caller's thread: a service call
//! writes to the [`Store`], then broadcasts through the [`NotificationHub`],
//! which invokes every subscribed observer before returning.

pub mod error;
pub mod model;
pub mod notify;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use model::{Client, ClientId, Money, NotificationPrefs, Product, ProductId};
pub use notify::{
    Alert, AlertKind, AlertObserver, ClientObserver, NoticeSink, NotificationHub, RecordingSink,
    StdoutSink, Subscription,
};
pub use service::{ClientService, ProductService};
pub use store::Store;
