//! Product table operations.

use rusqlite::{params, OptionalExtension, Row};

use super::Store;
use crate::error::Result;
use crate::model::{Money, Product, ProductId};

const SELECT_PRODUCT: &str = "SELECT id, name, price FROM products";

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
    })
}

impl Store {
    /// Insert a product and return it with its assigned id.
    pub fn insert_product(&self, name: &str, price: Money) -> Result<Product> {
        self.conn.execute(
            "INSERT INTO products (name, price) VALUES (?1, ?2)",
            params![name, price],
        )?;
        let id = ProductId(self.conn.last_insert_rowid());
        tracing::debug!(product_id = %id, name, price = %price, "product inserted");
        Ok(Product::new(id, name, price))
    }

    /// All products, ordered by id.
    pub fn products(&self) -> Result<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_PRODUCT} ORDER BY id"))?;
        let products = stmt
            .query_map([], product_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(products)
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Result<Option<Product>> {
        let product = self
            .conn
            .query_row(
                &format!("{SELECT_PRODUCT} WHERE id = ?1"),
                params![id],
                product_from_row,
            )
            .optional()?;
        Ok(product)
    }

    /// Persist the name and price of an existing product.
    ///
    /// Returns `false` if no row has the product's id.
    pub fn update_product(&self, product: &Product) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE products SET name = ?1, price = ?2 WHERE id = ?3",
            params![product.name, product.price, product.id],
        )?;
        tracing::debug!(product_id = %product.id, changed, "product updated");
        Ok(changed > 0)
    }

    /// Delete a product. Returns `false` if it did not exist.
    pub fn delete_product(&self, id: ProductId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1", params![id])?;
        tracing::debug!(product_id = %id, changed, "product deleted");
        Ok(changed > 0)
    }

    /// Delete every product, returning the number of rows removed.
    pub fn delete_all_products(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM products", [])?;
        tracing::debug!(removed, "products cleared");
        Ok(removed)
    }

    /// Number of stored products.
    pub fn product_count(&self) -> Result<usize> {
        self.count("products")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        Store::in_memory_with_schema().unwrap()
    }

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let store = store();
        let p1 = store.insert_product("Product1", Money::from_units(100)).unwrap();
        let p2 = store.insert_product("Product2", Money::from_units(200)).unwrap();

        assert_ne!(p1.id, p2.id);
        assert_eq!(store.product_count().unwrap(), 2);
        assert_eq!(store.products().unwrap(), vec![p1, p2]);
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = store();
        assert!(store.product(ProductId(42)).unwrap().is_none());
    }

    #[test]
    fn test_update_persists_fields() {
        let store = store();
        let mut product = store.insert_product("Widget", Money::from_units(10)).unwrap();

        product.name = "Gadget".to_string();
        product.price = Money::from_cents(1_250);
        assert!(store.update_product(&product).unwrap());

        let loaded = store.product(product.id).unwrap().unwrap();
        assert_eq!(loaded.name, "Gadget");
        assert_eq!(loaded.price, Money::from_cents(1_250));
    }

    #[test]
    fn test_update_missing_row() {
        let store = store();
        let ghost = Product::new(ProductId(7), "Ghost", Money::ZERO);
        assert!(!store.update_product(&ghost).unwrap());
    }

    #[test]
    fn test_delete() {
        let store = store();
        let product = store.insert_product("Widget", Money::from_units(10)).unwrap();

        assert!(store.delete_product(product.id).unwrap());
        assert!(!store.delete_product(product.id).unwrap());
        assert!(store.product(product.id).unwrap().is_none());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = store();
        let first = store.insert_product("A", Money::from_units(1)).unwrap();
        store.delete_product(first.id).unwrap();
        let second = store.insert_product("B", Money::from_units(2)).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_delete_all() {
        let store = store();
        store.insert_product("A", Money::from_units(1)).unwrap();
        store.insert_product("B", Money::from_units(2)).unwrap();

        assert_eq!(store.delete_all_products().unwrap(), 2);
        assert!(store.products().unwrap().is_empty());
    }
}
