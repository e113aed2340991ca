//! Alert events broadcast to subscribers.

use std::fmt;

use crate::model::Product;

/// Kind of product alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// A new product was added.
    Added,
    /// A product's details changed. Never emitted.
    Updated,
    /// A product was removed. Never emitted.
    Removed,
    /// A product's price changed.
    PriceUpdated,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertKind::Added => "added",
            AlertKind::Updated => "updated",
            AlertKind::Removed => "removed",
            AlertKind::PriceUpdated => "price_updated",
        };
        f.write_str(name)
    }
}

/// A transient alert carrying product state.
///
/// `previous` is only populated for [`AlertKind::PriceUpdated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    /// Product state after the change.
    pub updated: Product,
    /// Product state before the change.
    pub previous: Option<Product>,
}

impl Alert {
    /// Alert for a newly added product.
    pub fn added(product: Product) -> Self {
        Self {
            kind: AlertKind::Added,
            updated: product,
            previous: None,
        }
    }

    /// Alert for a price change, carrying both snapshots.
    pub fn price_updated(updated: Product, previous: Product) -> Self {
        Self {
            kind: AlertKind::PriceUpdated,
            updated,
            previous: Some(previous),
        }
    }
}
