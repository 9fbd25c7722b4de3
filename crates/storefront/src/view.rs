//! View/selection coordinator for the catalog page.
//!
//! Tracks which product the detail pane shows and whether the add-product
//! form is open. This is UI-local state: never persisted, reset on
//! restart. The selection holds a mirror copy of the product so the
//! detail view stays consistent with the list without a refetch; catalog
//! mutations call the `on_*` hooks to keep the mirror honest.

use std::sync::{Arc, PoisonError, RwLock};

use greenlife_core::ProductId;

use crate::models::Product;

#[derive(Debug, Default)]
struct ViewInner {
    selected: Option<Product>,
    add_form_open: bool,
}

/// Shared, cheaply cloneable selection state.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    inner: Arc<RwLock<ViewInner>>,
}

impl ViewState {
    /// Fresh state: nothing selected, add form closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_read<T>(&self, f: impl FnOnce(&ViewInner) -> T) -> T {
        f(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn with_write<T>(&self, f: impl FnOnce(&mut ViewInner) -> T) -> T {
        f(&mut self.inner.write().unwrap_or_else(PoisonError::into_inner))
    }

    /// Select a product for the detail pane; closes the add form.
    pub fn select(&self, product: Product) {
        self.with_write(|inner| {
            inner.selected = Some(product);
            inner.add_form_open = false;
        });
    }

    /// Clear the selection.
    pub fn clear_selection(&self) {
        self.with_write(|inner| inner.selected = None);
    }

    /// Open the add-product form; clears the selection.
    pub fn open_add_form(&self) {
        self.with_write(|inner| {
            inner.add_form_open = true;
            inner.selected = None;
        });
    }

    /// Close the add-product form.
    pub fn close_add_form(&self) {
        self.with_write(|inner| inner.add_form_open = false);
    }

    /// The currently selected product, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Product> {
        self.with_read(|inner| inner.selected.clone())
    }

    /// Whether the add-product form is open.
    #[must_use]
    pub fn add_form_open(&self) -> bool {
        self.with_read(|inner| inner.add_form_open)
    }

    /// Catalog hook: a product was deleted. Clears the selection iff it
    /// pointed at the deleted product.
    pub fn on_product_deleted(&self, id: ProductId) {
        self.with_write(|inner| {
            if inner.selected.as_ref().is_some_and(|p| p.id == id) {
                inner.selected = None;
            }
        });
    }

    /// Catalog hook: a product's stock quantity changed. Updates the
    /// selection's mirror copy iff that product is selected.
    pub fn on_quantity_updated(&self, id: ProductId, quantity: u32) {
        self.with_write(|inner| {
            if let Some(product) = inner.selected.as_mut()
                && product.id == id
            {
                product.quantity = quantity;
            }
        });
    }
}
