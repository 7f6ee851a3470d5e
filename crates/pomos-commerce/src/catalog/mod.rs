//! Catalog module.
//!
//! The static product list the storefront sells from. Loaded once at
//! session start and read-only afterwards.

mod product;
mod data;

pub use product::{Catalog, Product};
pub use data::default_catalog;
