//! Cart store: blob-backed cart lines and the checkout transfer.
//!
//! The persisted blob is authoritative: every read re-parses it and every
//! mutation re-serializes the whole line list. The in-memory view is only
//! ever a transient local variable, so a second store over the same blob
//! (a new session) sees exactly the persisted state.

use std::sync::Arc;

use rust_decimal::Decimal;

use greenlife_core::ProductId;

use crate::blob::{BlobStore, keys};
use crate::models::{CartLine, Product};

use super::{StoreError, load_json, store_json};

/// Owns the cart lines; products are referenced by ID only.
#[derive(Clone)]
pub struct CartStore {
    blob: Arc<dyn BlobStore>,
}

impl CartStore {
    /// Open the cart over a blob store, replaying any checkout that was
    /// interrupted between its snapshot and clear writes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the blob store fails or a persisted blob
    /// is malformed.
    pub fn open(blob: Arc<dyn BlobStore>) -> Result<Self, StoreError> {
        let store = Self { blob };
        store.replay_pending_checkout()?;
        Ok(store)
    }

    /// The current cart lines (empty when the blob is absent).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DataCorruption`] for a malformed cart blob.
    pub fn lines(&self) -> Result<Vec<CartLine>, StoreError> {
        Ok(load_json(self.blob.as_ref(), keys::CART)?.unwrap_or_default())
    }

    fn persist(&self, lines: &[CartLine]) -> Result<(), StoreError> {
        store_json(self.blob.as_ref(), keys::CART, &lines)
    }

    /// Add a product to the cart: increment its existing line, or append a
    /// fresh quantity-1 line. Returns the updated lines.
    ///
    /// The authentication gate is the caller's responsibility; the store
    /// itself does not check the login flag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on blob failure or a malformed cart blob.
    pub fn add(&self, product: &Product) -> Result<Vec<CartLine>, StoreError> {
        let mut lines = self.lines()?;
        match lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => lines.push(CartLine::from(product)),
        }
        self.persist(&lines)?;
        Ok(lines)
    }

    /// Replace the quantity of a line. Absent IDs are a no-op (nothing is
    /// rewritten). No lower bound: the quantity stepper's floor of 1 is a
    /// view concern.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on blob failure or a malformed cart blob.
    pub fn update_quantity(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<Vec<CartLine>, StoreError> {
        let mut lines = self.lines()?;
        if let Some(line) = lines.iter_mut().find(|l| l.product_id == id) {
            line.quantity = quantity;
            self.persist(&lines)?;
        }
        Ok(lines)
    }

    /// Remove a line from the cart. Returns the updated lines.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on blob failure or a malformed cart blob.
    pub fn remove(&self, id: ProductId) -> Result<Vec<CartLine>, StoreError> {
        let mut lines = self.lines()?;
        lines.retain(|l| l.product_id != id);
        self.persist(&lines)?;
        Ok(lines)
    }

    /// Sum of unit price times quantity across all lines; zero when empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on blob failure or a malformed cart blob.
    pub fn subtotal(&self) -> Result<Decimal, StoreError> {
        Ok(Self::subtotal_of(&self.lines()?))
    }

    /// Subtotal of an already-loaded line list. Pure.
    #[must_use]
    pub fn subtotal_of(lines: &[CartLine]) -> Decimal {
        lines.iter().map(CartLine::line_total).sum()
    }

    /// Convert the cart into an order snapshot and clear it.
    ///
    /// The snapshot-and-clear is guarded by a write-ahead marker: the
    /// snapshot lands in `checkoutPending` before `orderItems` and the
    /// cleared `cart` are written, and the marker is dropped last. A crash
    /// anywhere in between is repaired by [`CartStore::open`], so the
    /// order can neither duplicate nor vanish on retry.
    ///
    /// Returns the snapshotted lines.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on blob failure or a malformed cart blob.
    pub fn checkout(&self) -> Result<Vec<CartLine>, StoreError> {
        let lines = self.lines()?;
        store_json(self.blob.as_ref(), keys::CHECKOUT_PENDING, &lines)?;
        store_json(self.blob.as_ref(), keys::ORDER_ITEMS, &lines)?;
        self.persist(&[])?;
        self.blob.remove(keys::CHECKOUT_PENDING)?;
        Ok(lines)
    }

    /// The order snapshot taken at the last checkout (empty when none).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on blob failure or a malformed order blob.
    pub fn order_snapshot(&self) -> Result<Vec<CartLine>, StoreError> {
        Ok(load_json(self.blob.as_ref(), keys::ORDER_ITEMS)?.unwrap_or_default())
    }

    /// Complete a checkout whose marker survived a crash.
    fn replay_pending_checkout(&self) -> Result<(), StoreError> {
        if let Some(pending) =
            load_json::<Vec<CartLine>>(self.blob.as_ref(), keys::CHECKOUT_PENDING)?
        {
            store_json(self.blob.as_ref(), keys::ORDER_ITEMS, &pending)?;
            self.persist(&[])?;
            self.blob.remove(keys::CHECKOUT_PENDING)?;
            tracing::warn!(lines = pending.len(), "replayed interrupted checkout");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::blob::MemoryBlobStore;
    use crate::models::Category;

    use super::*;

    fn product(id: i32, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Plant {id}"),
            category: Category::Indoor,
            image_url: format!("https://img.example/{id}.jpg"),
            quantity: 10,
            price,
            watering: "Weekly".to_owned(),
            light: "Indirect".to_owned(),
            description: String::new(),
        }
    }

    fn open_cart() -> CartStore {
        CartStore::open(Arc::new(MemoryBlobStore::new())).expect("open")
    }

    #[test]
    fn test_add_twice_increments_one_line() {
        let cart = open_cart();
        let p = product(1, Decimal::new(2250, 2));

        cart.add(&p).expect("first add");
        let lines = cart.add(&p).expect("second add");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().map(|l| l.quantity), Some(2));
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let cart = open_cart();
        assert_eq!(cart.subtotal().expect("subtotal"), Decimal::ZERO);

        cart.add(&product(1, Decimal::new(2250, 2))).expect("add");
        cart.add(&product(1, Decimal::new(2250, 2))).expect("add");
        cart.add(&product(2, Decimal::new(899, 2))).expect("add");

        // 2 x 22.50 + 1 x 8.99
        assert_eq!(cart.subtotal().expect("subtotal"), Decimal::new(5399, 2));
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let blob = Arc::new(MemoryBlobStore::new());
        let cart = CartStore::open(Arc::clone(&blob) as Arc<dyn BlobStore>).expect("open");
        cart.add(&product(1, Decimal::new(100, 2))).expect("add");
        let before = blob.get(keys::CART).expect("raw cart");

        cart.update_quantity(ProductId::new(42), 5).expect("update");

        assert_eq!(blob.get(keys::CART).expect("raw cart"), before);
    }

    #[test]
    fn test_update_quantity_allows_zero() {
        let cart = open_cart();
        cart.add(&product(1, Decimal::new(100, 2))).expect("add");
        let lines = cart.update_quantity(ProductId::new(1), 0).expect("update");
        // Zero quantity keeps the line; only remove() drops it
        assert_eq!(lines.len(), 1);
        assert_eq!(cart.subtotal().expect("subtotal"), Decimal::ZERO);
    }

    #[test]
    fn test_remove_drops_line() {
        let cart = open_cart();
        cart.add(&product(1, Decimal::new(100, 2))).expect("add");
        cart.add(&product(2, Decimal::new(200, 2))).expect("add");

        let lines = cart.remove(ProductId::new(1)).expect("remove");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().map(|l| l.product_id), Some(ProductId::new(2)));
    }

    #[test]
    fn test_blob_is_authoritative_across_stores() {
        let blob: Arc<dyn BlobStore> = Arc::new(MemoryBlobStore::new());
        let cart = CartStore::open(Arc::clone(&blob)).expect("open");
        cart.add(&product(1, Decimal::new(100, 2))).expect("add");

        // A second store over the same blob is the "next session"
        let rehydrated = CartStore::open(blob).expect("reopen");
        assert_eq!(rehydrated.lines().expect("lines").len(), 1);
    }

    #[test]
    fn test_checkout_snapshots_and_clears() {
        let cart = open_cart();
        cart.add(&product(1, Decimal::new(2250, 2))).expect("add");
        cart.add(&product(2, Decimal::new(899, 2))).expect("add");
        let before = cart.lines().expect("lines");

        let snapshot = cart.checkout().expect("checkout");

        assert_eq!(snapshot, before);
        assert!(cart.lines().expect("lines").is_empty());
        assert_eq!(cart.order_snapshot().expect("order"), before);
    }

    #[test]
    fn test_checkout_empty_cart_is_allowed() {
        let cart = open_cart();
        let snapshot = cart.checkout().expect("checkout");
        assert!(snapshot.is_empty());
        assert!(cart.order_snapshot().expect("order").is_empty());
    }

    #[test]
    fn test_open_replays_interrupted_checkout() {
        let blob: Arc<dyn BlobStore> = Arc::new(MemoryBlobStore::new());
        {
            let cart = CartStore::open(Arc::clone(&blob)).expect("open");
            cart.add(&product(1, Decimal::new(2250, 2))).expect("add");
        }
        // Simulate a crash right after the write-ahead marker landed:
        // the marker exists, but orderItems and cart were never touched.
        let raw = blob.get(keys::CART).expect("raw cart").expect("cart blob");
        blob.set(keys::CHECKOUT_PENDING, &raw).expect("marker");

        let cart = CartStore::open(Arc::clone(&blob)).expect("reopen");

        assert!(cart.lines().expect("lines").is_empty());
        let order = cart.order_snapshot().expect("order");
        assert_eq!(order.len(), 1);
        assert!(blob.get(keys::CHECKOUT_PENDING).expect("marker").is_none());
    }

    #[test]
    fn test_malformed_cart_blob_is_rejected() {
        let blob: Arc<dyn BlobStore> = Arc::new(MemoryBlobStore::new());
        blob.set(keys::CART, "{definitely not json").expect("set");

        let cart = CartStore::open(blob).expect("open");
        assert!(matches!(
            cart.lines(),
            Err(StoreError::DataCorruption(_))
        ));
    }
}
