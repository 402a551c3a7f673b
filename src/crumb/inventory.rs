//! The in-memory product collection for one bakery instance.
//!
//! The inventory is an ordered sequence: products keep their insertion
//! order, names are not required to be unique, and lookups return the first
//! match. State lives only for the process's lifetime: there is no
//! persistence and no removal operation.

use crate::model::Product;

/// Ordered collection of [`Product`] records.
///
/// Constructed explicitly and owned by whoever drives it (the CLI session
/// owns one through the API facade); there is no process-wide instance.
#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product. Always succeeds; duplicate names are allowed.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Case-insensitive exact name match; first inserted wins on duplicates.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let needle = name.to_lowercase();
        self.products
            .iter()
            .find(|p| p.name().to_lowercase() == needle)
    }

    /// Mutable variant of [`Inventory::find_by_name`], used by sales.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Product> {
        let needle = name.to_lowercase();
        self.products
            .iter_mut()
            .find(|p| p.name().to_lowercase() == needle)
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::fixtures::InventoryFixture;
    use super::*;

    #[test]
    fn new_inventory_is_empty() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.len(), 0);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let inventory = InventoryFixture::new()
            .with_product("Croissant", 1.80, 12)
            .with_product("Baguette", 3.00, 5)
            .with_product("Cupcake", 2.50, 10)
            .inventory;

        let names: Vec<_> = inventory.products().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Croissant", "Baguette", "Cupcake"]);
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let inventory = InventoryFixture::new()
            .with_product("Torta", 8.00, 2)
            .inventory;

        assert!(inventory.find_by_name("torta").is_some());
        assert!(inventory.find_by_name("TORTA").is_some());
        assert!(inventory.find_by_name("ToRtA").is_some());
    }

    #[test]
    fn find_by_name_misses_unknown_products() {
        let inventory = InventoryFixture::new()
            .with_product("Torta", 8.00, 2)
            .inventory;

        assert!(inventory.find_by_name("Donut").is_none());
    }

    #[test]
    fn find_returns_first_inserted_on_duplicate_names() {
        let inventory = InventoryFixture::new()
            .with_product("Scone", 2.00, 3)
            .with_product("Scone", 9.99, 7)
            .inventory;

        let found = inventory.find_by_name("scone").unwrap();
        assert_eq!(found.unit_price(), 2.00);
        assert_eq!(found.quantity_on_hand(), 3);
    }

    #[test]
    fn add_keeps_exact_price_and_quantity() {
        let inventory = InventoryFixture::new()
            .with_product("Cupcake", 2.50, 10)
            .inventory;

        let found = inventory.find_by_name("Cupcake").unwrap();
        assert_eq!(found.unit_price(), 2.50);
        assert_eq!(found.quantity_on_hand(), 10);
    }

    #[test]
    fn mutations_through_find_mut_are_visible_in_listing() {
        let mut inventory = InventoryFixture::new()
            .with_product("Cupcake", 2.50, 10)
            .inventory;

        inventory.find_by_name_mut("cupcake").unwrap().sell(4);
        assert_eq!(inventory.products()[0].quantity_on_hand(), 6);
    }
}
