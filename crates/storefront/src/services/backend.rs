//! Placeholder client for the future nursery backend.
//!
//! The server side of these endpoints does not exist yet; the contract is
//! assumed, not verified. Calls are plain one-shot requests: no retry, no
//! timeout, no compensation. A failure is logged by the caller and
//! surfaced as a [`BackendError`].

use serde::Deserialize;
use serde_json::json;

use crate::config::BackendConfig;
use crate::models::{OrderPayload, Product};

/// Errors from the nursery backend client.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Session payload expected from `POST /auth/login.php`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub name: String,
    pub email: String,
}

/// Confirmation payload expected from `POST /orders/create.php`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Client for the (unimplemented) PHP nursery backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(BackendError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Fetch the catalog from the backend.
    ///
    /// `GET {base}/plants.php`, expected to return an array of products.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure, non-success status,
    /// or an unparseable body.
    pub async fn fetch_plants(&self) -> Result<Vec<Product>, BackendError> {
        let url = format!("{}/plants.php", self.base_url);
        let response = Self::check(self.client.get(&url).send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    /// Log in against the backend.
    ///
    /// `POST {base}/auth/login.php` with `{ email, password }`, expected
    /// to return a session/user payload.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure, non-success status,
    /// or an unparseable body.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, BackendError> {
        let url = format!("{}/auth/login.php", self.base_url);
        let body = json!({
            "email": email,
            "password": password,
        });
        let response = Self::check(self.client.post(&url).json(&body).send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    /// Submit an order to the backend.
    ///
    /// `POST {base}/orders/create.php` with the order payload, expected
    /// to return a confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure, non-success status,
    /// or an unparseable body.
    pub async fn create_order(
        &self,
        order: &OrderPayload,
    ) -> Result<OrderConfirmation, BackendError> {
        let url = format!("{}/orders/create.php", self.base_url);
        let response = Self::check(self.client.post(&url).json(order).send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = BackendClient::new(&BackendConfig {
            base_url: "http://localhost/api/".to_owned(),
        });
        assert_eq!(client.base_url, "http://localhost/api");
    }

    #[test]
    fn test_order_confirmation_tolerates_sparse_payloads() {
        let confirmation: OrderConfirmation = serde_json::from_str("{}").expect("parse");
        assert!(confirmation.order_id.is_none());

        let confirmation: OrderConfirmation =
            serde_json::from_str(r#"{"orderId":"42","message":"ok"}"#).expect("parse");
        assert_eq!(confirmation.order_id.as_deref(), Some("42"));
    }
}
