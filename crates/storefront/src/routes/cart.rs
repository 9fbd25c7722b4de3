//! Cart route handlers.
//!
//! Every mutation rewrites the persisted cart blob and returns the fresh
//! cart view, so the UI always renders what is actually stored.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use greenlife_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{CartLine, OrderPayload};
use crate::state::AppState;
use crate::store::CartStore;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Build the view for a loaded line list.
    #[must_use]
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            subtotal: format_price(CartStore::subtotal_of(lines)),
            item_count: lines.iter().map(|l| l.quantity).sum(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            image_url: line.image_url.clone(),
            quantity: line.quantity,
            price: format_price(line.unit_price),
            line_price: format_price(line.line_total()),
        }
    }
}

/// Format an amount as a display price string.
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Add to cart request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

/// Cart quantity update request.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub quantity: u32,
}

/// Display the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<CartView>> {
    let lines = state.cart().lines()?;
    Ok(Json(CartView::from_lines(&lines)))
}

/// Add a catalog product to the cart.
///
/// When the login flag is not set this is a silent no-op: the current
/// cart is returned unchanged. The gate lives here, not in the store.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    if !state.session().is_logged_in()? {
        tracing::debug!(product_id = %request.product_id, "add to cart ignored: not logged in");
        let lines = state.cart().lines()?;
        return Ok(Json(CartView::from_lines(&lines)));
    }

    let product = state
        .catalog()
        .get(request.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;

    let lines = state.cart().add(&product)?;
    Ok(Json(CartView::from_lines(&lines)))
}

/// Replace a cart line's quantity.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let lines = state
        .cart()
        .update_quantity(ProductId::new(id), request.quantity)?;
    Ok(Json(CartView::from_lines(&lines)))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<CartView>> {
    let lines = state.cart().remove(ProductId::new(id))?;
    Ok(Json(CartView::from_lines(&lines)))
}

/// Check out: atomically snapshot the cart into the order record and
/// clear it, then notify the backend fire-and-forget.
///
/// The backend call carries no compensation; a failure is logged and the
/// local checkout stands (the server contract is a placeholder).
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Json<CartView>> {
    let items = state.cart().checkout()?;
    tracing::info!(lines = items.len(), "checkout complete");

    let subtotal = CartStore::subtotal_of(&items);
    let shipping = state.config().shipping_fee;
    let payload = OrderPayload {
        items: items.clone(),
        subtotal,
        shipping,
        total: subtotal + shipping,
        customer: state.session().current_user()?,
    };

    let backend = state.backend().clone();
    tokio::spawn(async move {
        if let Err(e) = backend.create_order(&payload).await {
            tracing::error!("order notification failed: {e}");
        }
    });

    Ok(Json(CartView::from_lines(&items)))
}
