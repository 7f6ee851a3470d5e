//! Product and catalog types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A sellable item.
///
/// Products are immutable: created when the catalog is loaded and never
/// mutated afterwards. Prices are per `unit` (e.g., per pound).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Price per unit, in pesos.
    pub price: Money,
    /// Unit label (e.g., "Libra", "Unidad").
    pub unit: String,
    /// Image URL.
    pub image: String,
    /// Category tag (e.g., "Entero").
    pub category: String,
    /// Whether this is a free-range (criollo) product.
    pub is_criollo: bool,
}

/// The ordered, read-only product list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The subset shown on the home page (ids 6 through 8, the
    /// middle-weight birds).
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| (6..=8).contains(&p.id.value()))
            .collect()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::from_products(vec![
            Product {
                id: ProductId::new(1),
                name: "Pollo Criollo Entero".to_string(),
                description: "Pollo de campo".to_string(),
                price: Money::new(9_000),
                unit: "Libra".to_string(),
                image: "https://example.test/pollo.jpg".to_string(),
                category: "Entero".to_string(),
                is_criollo: true,
            },
            Product {
                id: ProductId::new(6),
                name: "Pollo Criollo (6 Libras)".to_string(),
                description: "Ave de seis libras".to_string(),
                price: Money::new(54_000),
                unit: "Unidad".to_string(),
                image: "https://example.test/pollo-6.jpg".to_string(),
                category: "Entero".to_string(),
                is_criollo: true,
            },
        ])
    }

    #[test]
    fn test_lookup() {
        let catalog = small_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(ProductId::new(6)).unwrap().price,
            Money::new(54_000)
        );
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_featured_subset() {
        let catalog = small_catalog();
        let featured = catalog.featured();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, ProductId::new(6));
    }
}
