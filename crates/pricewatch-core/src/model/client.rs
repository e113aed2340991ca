//! Client records and notification preferences.

use crate::notify::AlertKind;

row_id!(
    /// Store-assigned client identifier.
    ClientId
);

/// Which alerts a client wants to hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationPrefs {
    /// Notify when a product is added.
    pub new_products: bool,
    /// Notify when a product's price changes.
    pub price_changes: bool,
}

impl NotificationPrefs {
    /// Create a preference set.
    pub const fn new(new_products: bool, price_changes: bool) -> Self {
        Self {
            new_products,
            price_changes,
        }
    }

    /// Preferences with every alert enabled.
    pub const fn all() -> Self {
        Self::new(true, true)
    }

    /// Preferences with every alert disabled.
    pub const fn none() -> Self {
        Self::new(false, false)
    }

    /// Whether any alert is enabled.
    pub const fn any(&self) -> bool {
        self.new_products || self.price_changes
    }

    /// Whether an alert of `kind` should be shown.
    ///
    /// `Updated` and `Removed` are never shown.
    pub const fn wants(&self, kind: AlertKind) -> bool {
        match kind {
            AlertKind::Added => self.new_products,
            AlertKind::PriceUpdated => self.price_changes,
            AlertKind::Updated | AlertKind::Removed => false,
        }
    }
}

/// A client with its notification preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// Identifier assigned by the store on insert.
    pub id: ClientId,
    pub name: String,
    pub prefs: NotificationPrefs,
}

impl Client {
    /// Create a client record.
    pub fn new(id: ClientId, name: impl Into<String>, prefs: NotificationPrefs) -> Self {
        Self {
            id,
            name: name.into(),
            prefs,
        }
    }

    /// Whether this client wants alerts of `kind`.
    pub fn wants(&self, kind: AlertKind) -> bool {
        self.prefs.wants(kind)
    }
}
