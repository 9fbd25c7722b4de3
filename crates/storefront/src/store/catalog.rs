//! Catalog store: the in-memory product list.
//!
//! The catalog is seeded in-process (the `GET /plants.php` fetch is a
//! future-backend contract, see `services::backend`). IDs are assigned as
//! current count + 1 and are not reconciled after deletes; single-writer
//! use is assumed, matching the rest of the storefront.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;

use greenlife_core::ProductId;

use crate::models::{Category, CategoryFilter, NewProduct, Product};

/// Owns the product entities exclusively.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog pre-populated with the nursery's starter inventory.
    #[must_use]
    pub fn with_seed() -> Self {
        Self {
            products: RwLock::new(seed()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a product, assigning the next integer ID (current count + 1).
    pub fn add_product(&self, new: NewProduct) -> Product {
        let mut products = self.write();
        let id = ProductId::new(i32::try_from(products.len()).unwrap_or(i32::MAX - 1) + 1);
        let product = new.into_product(id);
        products.push(product.clone());
        product
    }

    /// Remove a product. Absent IDs are an idempotent no-op.
    pub fn delete(&self, id: ProductId) {
        self.write().retain(|p| p.id != id);
    }

    /// Replace a product's stock quantity.
    ///
    /// Returns `false` (store unchanged) when the ID is not present.
    pub fn update_quantity(&self, id: ProductId, quantity: u32) -> bool {
        let mut products = self.write();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Replace the whole catalog, e.g. with a list fetched from the
    /// nursery backend.
    pub fn replace_all(&self, products: Vec<Product>) {
        *self.write() = products;
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// Products whose name contains `term` case-insensitively and whose
    /// category passes `filter`. Pure; no side effects.
    #[must_use]
    pub fn filter(&self, term: &str, filter: &CategoryFilter) -> Vec<Product> {
        let term = term.to_lowercase();
        self.read()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term) && filter.matches(p.category))
            .cloned()
            .collect()
    }

    /// Distinct categories present in the catalog, in first-seen order.
    /// Drives the filter dropdown next to the search box.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in self.read().iter() {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

fn plant(
    id: i32,
    name: &str,
    category: Category,
    image_url: &str,
    quantity: u32,
    price: Decimal,
    watering: &str,
    light: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category,
        image_url: image_url.to_owned(),
        quantity,
        price,
        watering: watering.to_owned(),
        light: light.to_owned(),
        description: description.to_owned(),
    }
}

/// The nursery's starter inventory.
fn seed() -> Vec<Product> {
    vec![
        plant(
            1,
            "Monstera Deliciosa",
            Category::Indoor,
            "https://images.unsplash.com/photo-1614594975525-e45190c55d0b?auto=format&fit=crop&w=800",
            15,
            Decimal::new(3599, 2),
            "Weekly",
            "Indirect bright light",
            "The Swiss Cheese Plant, known for its iconic split leaves.",
        ),
        plant(
            2,
            "Snake Plant",
            Category::Indoor,
            "https://images.unsplash.com/photo-1593482892420-9c85c09c83f4?auto=format&fit=crop&w=800",
            28,
            Decimal::new(2250, 2),
            "Bi-weekly",
            "Low to bright indirect",
            "Very low maintenance plant, perfect for beginners.",
        ),
        plant(
            3,
            "Lavender",
            Category::Outdoor,
            "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07?auto=format&fit=crop&w=800",
            42,
            Decimal::new(1299, 2),
            "When soil is dry",
            "Full sun",
            "Aromatic herb with purple flowers, attracts butterflies.",
        ),
        plant(
            4,
            "Peace Lily",
            Category::Indoor,
            "https://images.unsplash.com/photo-1593691509543-c55fb32d8de5?auto=format&fit=crop&w=800",
            10,
            Decimal::new(2850, 2),
            "Weekly",
            "Low to medium indirect",
            "Beautiful white flowers and air-purifying qualities.",
        ),
        plant(
            5,
            "Tomato Plant",
            Category::Edible,
            "https://images.unsplash.com/photo-1592841200221-a6898f307baa?auto=format&fit=crop&w=800",
            35,
            Decimal::new(899, 2),
            "Daily",
            "Full sun",
            "Produces red fruits perfect for cooking.",
        ),
        plant(
            6,
            "Fiddle Leaf Fig",
            Category::Indoor,
            "https://images.unsplash.com/photo-1600411833196-7c1f6b1a8b90?auto=format&fit=crop&w=800",
            8,
            Decimal::new(6500, 2),
            "Weekly",
            "Bright indirect light",
            "Popular houseplant with large, violin-shaped leaves.",
        ),
    ]
}
