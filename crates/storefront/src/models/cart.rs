//! Cart line types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use greenlife_core::ProductId;

use super::product::Product;

/// One product's accumulated quantity within the active cart.
///
/// A cart holds at most one line per product; adding an already-carted
/// product increments the existing line. The product reference is by ID
/// only - deleting a catalog product does not touch existing lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub image_url: String,
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

impl From<&Product> for CartLine {
    /// A fresh quantity-1 line for a product's first add-to-cart.
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image_url: product.image_url.clone(),
            quantity: 1,
        }
    }
}
