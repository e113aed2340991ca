//! Product records.

use super::Money;

row_id!(
    /// Store-assigned product identifier.
    ProductId
);

/// A product with a mutable name and price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Identifier assigned by the store on insert.
    pub id: ProductId,
    pub name: String,
    pub price: Money,
}

impl Product {
    /// Create a product record.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
