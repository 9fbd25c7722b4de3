//! Invoice route handler.
//!
//! A display-only rendering of the order snapshot taken at checkout. The
//! invoice identifier is regenerated on every render with a 6-digit
//! random suffix; it is cosmetic, never persisted, and collisions are
//! tolerated. Printing/PDF is the host environment's job.

use axum::{Json, extract::State};
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::models::CartLine;
use crate::state::AppState;
use crate::store::CartStore;

use super::cart::format_price;

/// The shop's identity block, printed on every invoice.
const SELLER_NAME: &str = "GreenLife Garden";
const SELLER_ADDRESS: [&str; 2] = ["123 Botanical Street", "Garden City, 560001"];
const SELLER_EMAIL: &str = "contact@greenlife.com";

/// All orders are payable on delivery; there is no payment integration.
const PAYMENT_METHOD: &str = "Cash on Delivery";

/// Defaults when no customer record is stored.
const GUEST_NAME: &str = "Guest Customer";
const GUEST_EMAIL: &str = "guest@example.com";

/// One invoice line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub amount: String,
}

/// Seller identity block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerView {
    pub name: String,
    pub address: Vec<String>,
    pub email: String,
}

/// The rendered invoice.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView {
    pub invoice_id: String,
    pub order_date: String,
    pub payment_method: String,
    pub customer_name: String,
    pub customer_email: String,
    pub seller: SellerView,
    pub items: Vec<InvoiceLineView>,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
}

impl From<&CartLine> for InvoiceLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: format_price(line.unit_price),
            amount: format_price(line.line_total()),
        }
    }
}

/// A fresh cosmetic invoice identifier.
fn new_invoice_id() -> String {
    let suffix = rand::rng().random_range(100_000..1_000_000);
    format!("INV-{suffix}")
}

/// Render the invoice for the last checkout.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<InvoiceView>> {
    let items = state.cart().order_snapshot()?;
    let customer = state.session().current_user()?;

    let subtotal = CartStore::subtotal_of(&items);
    let shipping = state.config().shipping_fee;

    let (customer_name, customer_email) = customer.map_or_else(
        || (GUEST_NAME.to_owned(), GUEST_EMAIL.to_owned()),
        |c| (c.name, c.email.into_inner()),
    );

    Ok(Json(InvoiceView {
        invoice_id: new_invoice_id(),
        order_date: Utc::now().date_naive().to_string(),
        payment_method: PAYMENT_METHOD.to_owned(),
        customer_name,
        customer_email,
        seller: SellerView {
            name: SELLER_NAME.to_owned(),
            address: SELLER_ADDRESS.iter().map(ToString::to_string).collect(),
            email: SELLER_EMAIL.to_owned(),
        },
        items: items.iter().map(InvoiceLineView::from).collect(),
        subtotal: format_price(subtotal),
        shipping: format_price(shipping),
        total: format_price(subtotal + shipping),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_id_format() {
        for _ in 0..32 {
            let id = new_invoice_id();
            let suffix = id.strip_prefix("INV-").expect("INV- prefix");
            assert_eq!(suffix.len(), 6);
            assert!(suffix.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
