//! Persisted key-value blob store.
//!
//! The storefront keeps its durable state in a handful of string blobs,
//! the same layout the browser build kept in local storage. The store is
//! an explicit injected port rather than ambient global state: consumers
//! receive an `Arc<dyn BlobStore>` at construction, and tests substitute
//! [`MemoryBlobStore`] for the on-disk [`FileBlobStore`].
//!
//! Values are opaque strings at this level; JSON decoding (and schema
//! rejection of malformed blobs) happens in the `store` layer.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

/// Well-known blob keys.
pub mod keys {
    /// Active cart: JSON array of cart lines.
    pub const CART: &str = "cart";

    /// Order snapshot taken at checkout: JSON array of cart lines.
    pub const ORDER_ITEMS: &str = "orderItems";

    /// Login flag: the literal string `"true"`, or absent.
    pub const IS_LOGGED_IN: &str = "isLoggedIn";

    /// Customer identity record: JSON `{ name, email }`, or absent.
    pub const USER: &str = "user";

    /// Checkout write-ahead marker: JSON array of cart lines. Present only
    /// while a checkout's snapshot-and-clear is in flight.
    pub const CHECKOUT_PENDING: &str = "checkoutPending";
}

/// Errors from the blob store itself (not from decoding values).
#[derive(Debug, Error)]
pub enum BlobError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A reader or writer panicked while holding the store lock.
    #[error("blob store lock poisoned")]
    Poisoned,

    /// Key contains characters that cannot be mapped to a file name.
    #[error("invalid blob key: {0:?}")]
    InvalidKey(String),
}

/// String key-value persistence port.
///
/// Writes are whole-value: every mutating storefront operation
/// re-serializes the full blob, and reads re-parse it. The blob store is
/// authoritative; in-memory views are caches.
pub trait BlobStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError`] if the underlying storage fails.
    fn get(&self, key: &str) -> Result<Option<String>, BlobError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError`] if the underlying storage fails.
    fn set(&self, key: &str, value: &str) -> Result<(), BlobError>;

    /// Remove the value stored under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError`] if the underlying storage fails.
    fn remove(&self, key: &str) -> Result<(), BlobError>;
}
