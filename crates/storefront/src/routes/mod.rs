//! Route handlers for the storefront JSON API.
//!
//! One route group per view: catalog (with the selection coordinator),
//! cart, invoice, and the thin auth surface. Presentation is the host
//! UI's job; these handlers return view data.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod invoice;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Build the storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::list).post(catalog::add))
        .route("/catalog/refresh", post(catalog::refresh))
        .route("/catalog/selected", get(catalog::selected))
        .route("/catalog/add-form/open", post(catalog::open_add_form))
        .route("/catalog/add-form/close", post(catalog::close_add_form))
        .route("/catalog/{id}", delete(catalog::remove))
        .route("/catalog/{id}/quantity", put(catalog::update_quantity))
        .route("/catalog/{id}/select", post(catalog::select))
        .route("/cart", get(cart::show).post(cart::add))
        .route("/cart/checkout", post(cart::checkout))
        .route("/cart/{id}", put(cart::update).delete(cart::remove))
        .route("/invoice", get(invoice::show))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
}
