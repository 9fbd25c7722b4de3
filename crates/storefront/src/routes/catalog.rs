//! Catalog route handlers.
//!
//! Browsing, inventory management, and the selection coordinator surface.
//! Catalog mutations notify the view state so the detail pane never shows
//! a product that no longer exists.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use greenlife_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{Category, CategoryFilter, NewProduct, Product};
use crate::state::AppState;

/// Search/filter query for the catalog list.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive name substring; empty matches everything.
    #[serde(default)]
    pub search: String,
    /// Category name, or "All" (the default).
    pub category: Option<String>,
}

/// Catalog listing: the filtered products plus the categories the filter
/// dropdown offers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

/// Selection coordinator state as shown to the UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub selected: Option<Product>,
    pub add_form_open: bool,
}

/// Stock quantity update request.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: u32,
}

/// List products matching the search term and category filter.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogView>> {
    let filter = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::BadRequest(format!("unknown category: {raw}")))?,
    };

    Ok(Json(CatalogView {
        products: state.catalog().filter(&query.search, &filter),
        categories: state.catalog().categories(),
    }))
}

/// Add a product. The new product becomes the selection and the add form
/// closes, mirroring the catalog page's flow.
#[instrument(skip(state, new))]
pub async fn add(
    State(state): State<AppState>,
    Json(new): Json<NewProduct>,
) -> (StatusCode, Json<Product>) {
    let product = state.catalog().add_product(new);
    state.view().select(product.clone());
    tracing::info!(id = %product.id, name = %product.name, "product added");
    (StatusCode::CREATED, Json(product))
}

/// Delete a product. Absent IDs are a no-op; a matching selection is
/// cleared either way.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> StatusCode {
    let id = ProductId::new(id);
    state.catalog().delete(id);
    state.view().on_product_deleted(id);
    StatusCode::NO_CONTENT
}

/// Replace a product's stock quantity and refresh the selection mirror.
#[instrument(skip(state))]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    if !state.catalog().update_quantity(id, request.quantity) {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    state.view().on_quantity_updated(id, request.quantity);

    state
        .catalog()
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Replace the catalog with the list served by the nursery backend.
///
/// The backend is a placeholder contract; until it exists this returns
/// 502. A selection pointing at a product missing from the fetched list
/// is cleared.
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> Result<Json<CatalogView>> {
    let products = state.backend().fetch_plants().await.map_err(|e| {
        tracing::error!("catalog refresh failed: {e}");
        AppError::from(e)
    })?;
    state.catalog().replace_all(products);

    if let Some(selected) = state.view().selected()
        && state.catalog().get(selected.id).is_none()
    {
        state.view().on_product_deleted(selected.id);
    }

    Ok(Json(CatalogView {
        products: state.catalog().all(),
        categories: state.catalog().categories(),
    }))
}

/// Select a product for the detail pane.
#[instrument(skip(state))]
pub async fn select(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    state.view().select(product.clone());
    Ok(Json(product))
}

/// Current selection coordinator state.
pub async fn selected(State(state): State<AppState>) -> Json<SelectionView> {
    Json(SelectionView {
        selected: state.view().selected(),
        add_form_open: state.view().add_form_open(),
    })
}

/// Open the add-product form (clears the selection).
pub async fn open_add_form(State(state): State<AppState>) -> StatusCode {
    state.view().open_add_form();
    StatusCode::NO_CONTENT
}

/// Close the add-product form.
pub async fn close_add_form(State(state): State<AppState>) -> StatusCode {
    state.view().close_add_form();
    StatusCode::NO_CONTENT
}
