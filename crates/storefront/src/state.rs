//! Application state shared across handlers.

use std::sync::Arc;

use crate::blob::BlobStore;
use crate::config::StorefrontConfig;
use crate::services::BackendClient;
use crate::store::{CartStore, CatalogStore, SessionStore, StoreError};
use crate::view::ViewState;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Constructed once per process with an
/// injected blob store and passed by reference to every consumer; there
/// is no other path to the persisted state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
    cart: CartStore,
    session: SessionStore,
    view: ViewState,
    backend: BackendClient,
}

impl AppState {
    /// Create the application state over a blob store, with the seeded
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if opening the cart store fails (e.g., a
    /// malformed checkout marker).
    pub fn new(config: StorefrontConfig, blob: Arc<dyn BlobStore>) -> Result<Self, StoreError> {
        Self::with_catalog(config, blob, CatalogStore::with_seed())
    }

    /// Create the application state with a caller-provided catalog.
    /// Tests use this with an empty or purpose-built catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if opening the cart store fails.
    pub fn with_catalog(
        config: StorefrontConfig,
        blob: Arc<dyn BlobStore>,
        catalog: CatalogStore,
    ) -> Result<Self, StoreError> {
        let cart = CartStore::open(Arc::clone(&blob))?;
        let session = SessionStore::new(blob);
        let backend = BackendClient::new(&config.backend);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
                session,
                view: ViewState::new(),
                backend,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Get a reference to the view/selection coordinator.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.inner.view
    }

    /// Get a reference to the nursery backend client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }
}
