//! Session store: login flag and customer record.
//!
//! "Authentication" here is only a persisted boolean and an identity
//! record written after a backend login; there is nothing to verify
//! locally. Stores consult it through this interface so the flag's
//! string encoding stays in one place.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use greenlife_core::Email;

use crate::blob::{BlobStore, keys};
use crate::models::Customer;

use super::{StoreError, load_json, store_json};

/// The login flag's on-disk value.
const LOGGED_IN: &str = "true";

/// Raw persisted shape of the `user` blob; the email is validated when
/// read back into a [`Customer`].
#[derive(Debug, Serialize, Deserialize)]
struct StoredUser {
    name: String,
    email: String,
}

/// Blob-backed session state.
#[derive(Clone)]
pub struct SessionStore {
    blob: Arc<dyn BlobStore>,
}

impl SessionStore {
    /// Create a session store over a blob store.
    #[must_use]
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        Self { blob }
    }

    /// Whether the login flag is set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the blob store fails.
    pub fn is_logged_in(&self) -> Result<bool, StoreError> {
        Ok(self.blob.get(keys::IS_LOGGED_IN)?.as_deref() == Some(LOGGED_IN))
    }

    /// Set the login flag and store the customer record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the blob store fails.
    pub fn login(&self, customer: &Customer) -> Result<(), StoreError> {
        self.blob.set(keys::IS_LOGGED_IN, LOGGED_IN)?;
        store_json(
            self.blob.as_ref(),
            keys::USER,
            &StoredUser {
                name: customer.name.clone(),
                email: customer.email.to_string(),
            },
        )
    }

    /// Clear the login flag and the customer record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the blob store fails.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.blob.remove(keys::IS_LOGGED_IN)?;
        self.blob.remove(keys::USER)?;
        Ok(())
    }

    /// The stored customer record, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DataCorruption`] for a malformed user blob or
    /// an invalid stored email.
    pub fn current_user(&self) -> Result<Option<Customer>, StoreError> {
        let Some(stored) = load_json::<StoredUser>(self.blob.as_ref(), keys::USER)? else {
            return Ok(None);
        };

        let email = Email::parse(&stored.email).map_err(|e| {
            StoreError::DataCorruption(format!("invalid email in user blob: {e}"))
        })?;

        Ok(Some(Customer {
            name: stored.name,
            email,
        }))
    }
}
