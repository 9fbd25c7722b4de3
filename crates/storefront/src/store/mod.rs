//! Storefront stores over the blob persistence port.
//!
//! Three stores own the durable and in-memory state:
//!
//! - [`CatalogStore`] - the product list (in-memory, seeded)
//! - [`CartStore`] - cart lines and the checkout transfer (blob-backed)
//! - [`SessionStore`] - login flag and customer record (blob-backed)
//!
//! JSON decoding happens here, at the persistence boundary: a malformed
//! blob is rejected as [`StoreError::DataCorruption`] instead of crashing
//! the view layer.

mod cart;
mod catalog;
mod session;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::blob::{BlobError, BlobStore};

pub use cart::CartStore;
pub use catalog::CatalogStore;
pub use session::SessionStore;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The blob store failed.
    #[error("blob store error: {0}")]
    Blob(#[from] BlobError),

    /// A persisted blob does not match its expected schema.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Decode the JSON blob under `key`, if present.
fn load_json<T: DeserializeOwned>(
    blob: &dyn BlobStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match blob.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::DataCorruption(format!("malformed {key} blob: {e}"))),
    }
}

/// Serialize `value` and store it under `key`.
fn store_json<T: Serialize>(
    blob: &dyn BlobStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StoreError::DataCorruption(format!("cannot encode {key} blob: {e}")))?;
    blob.set(key, &raw)?;
    Ok(())
}
