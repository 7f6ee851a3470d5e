//! Built-in product data for Granja Los Pomos.
//!
//! Whole free-range chickens, priced at 9.000 pesos per pound. The sized
//! birds (ids 4 through 8) are sold as single units.

use super::product::{Catalog, Product};
use crate::ids::ProductId;
use crate::money::Money;

const PRICE_PER_POUND: i64 = 9_000;

fn product(
    id: u32,
    name: &str,
    description: &str,
    price: i64,
    unit: &str,
    image: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::new(price),
        unit: unit.to_string(),
        image: image.to_string(),
        category: "Entero".to_string(),
        is_criollo: true,
    }
}

fn sized_bird(id: u32, pounds: i64, image: &str) -> Product {
    product(
        id,
        &format!("Pollo Criollo ({} Libras)", pounds),
        &format!(
            "Ave criolla de {} libras, criada en campo con alimentación 100% natural.",
            pounds
        ),
        PRICE_PER_POUND * pounds,
        "Unidad",
        image,
    )
}

/// The catalog the storefront ships with.
pub fn default_catalog() -> Catalog {
    Catalog::from_products(vec![
        product(
            1,
            "Pollo Criollo Entero",
            "Pollo 100% natural, sin hormonas, criado en campo. Sabor único, \
             piel amarilla y textura firme. Ideal para disfrutar en familia.",
            PRICE_PER_POUND,
            "Libra",
            "https://i.ibb.co/wrjs4Rdn/Whats-App-Image-2025-12-12-at-9-31-33-AM.jpg",
        ),
        sized_bird(
            4,
            4,
            "https://i.ibb.co/r2nK0D65/Whats-App-Image-2025-12-12-at-9-31-32-AM.jpg",
        ),
        sized_bird(
            5,
            5,
            "https://i.ibb.co/h6RcNx4/Whats-App-Image-2025-12-12-at-9-31-31-AM-1.jpg",
        ),
        sized_bird(
            6,
            6,
            "https://i.ibb.co/5Wny0rLj/Whats-App-Image-2025-12-12-at-9-31-31-AM.jpg",
        ),
        sized_bird(
            7,
            7,
            "https://i.ibb.co/NhVPKFL/Whats-App-Image-2025-12-12-at-9-31-30-AM.jpg",
        ),
        sized_bird(
            8,
            8,
            "https://i.ibb.co/hJrJhLK1/Whats-App-Image-2025-12-12-at-9-31-27-AM.jpg",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.products().iter().all(|p| p.is_criollo));
        assert_eq!(catalog.featured().len(), 3);
    }

    #[test]
    fn test_sized_bird_pricing() {
        let catalog = default_catalog();
        let six = catalog.get(ProductId::new(6)).unwrap();
        assert_eq!(six.name, "Pollo Criollo (6 Libras)");
        assert_eq!(six.price, Money::new(54_000));
    }
}
