//! Auth route handlers.
//!
//! Login is delegated to the placeholder backend; on success the session
//! blobs are written. There is no local credential checking, token, or
//! expiry - the persisted flag is the whole session.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use greenlife_core::Email;

use crate::error::{AppError, Result};
use crate::models::Customer;
use crate::state::AppState;

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Log in via the nursery backend and persist the session.
#[instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Customer>> {
    let response = state
        .backend()
        .login(&request.email, &request.password)
        .await
        .map_err(|e| {
            tracing::error!("login failed: {e}");
            AppError::from(e)
        })?;

    let email = Email::parse(&response.email).map_err(|e| {
        AppError::Internal(format!("backend returned invalid email: {e}"))
    })?;

    let customer = Customer {
        name: response.name,
        email,
    };
    state.session().login(&customer)?;

    Ok(Json(customer))
}

/// Clear the persisted session.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode> {
    state.session().logout()?;
    Ok(StatusCode::NO_CONTENT)
}
