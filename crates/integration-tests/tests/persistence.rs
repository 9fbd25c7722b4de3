//! Persistence tests over the file-backed blob store.
//!
//! Each `CartStore::open` over the same directory stands in for a new
//! browser session: the blobs on disk are the only source of truth.

use std::sync::Arc;

use rust_decimal::Decimal;

use greenlife_core::ProductId;
use greenlife_storefront::blob::{BlobStore, FileBlobStore, keys};
use greenlife_storefront::models::{Category, Product};
use greenlife_storefront::store::CartStore;

fn snake_plant() -> Product {
    Product {
        id: ProductId::new(2),
        name: "Snake Plant".to_owned(),
        category: Category::Indoor,
        image_url: "https://img.example/snake.jpg".to_owned(),
        quantity: 28,
        price: Decimal::new(2250, 2),
        watering: "Bi-weekly".to_owned(),
        light: "Low to bright indirect".to_owned(),
        description: "Very low maintenance plant.".to_owned(),
    }
}

#[test]
fn test_cart_survives_sessions_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let blob: Arc<dyn BlobStore> =
            Arc::new(FileBlobStore::open(dir.path()).expect("open blob"));
        let cart = CartStore::open(blob).expect("open cart");
        cart.add(&snake_plant()).expect("add");
        cart.add(&snake_plant()).expect("add");
    }

    // Next session rehydrates from disk
    let blob: Arc<dyn BlobStore> = Arc::new(FileBlobStore::open(dir.path()).expect("reopen blob"));
    let cart = CartStore::open(blob).expect("reopen cart");

    let lines = cart.lines().expect("lines");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines.first().map(|l| l.quantity), Some(2));
    assert_eq!(cart.subtotal().expect("subtotal"), Decimal::new(4500, 2));
}

#[test]
fn test_checkout_snapshot_survives_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");

    let before = {
        let blob: Arc<dyn BlobStore> =
            Arc::new(FileBlobStore::open(dir.path()).expect("open blob"));
        let cart = CartStore::open(blob).expect("open cart");
        cart.add(&snake_plant()).expect("add");
        cart.checkout().expect("checkout")
    };

    let blob: Arc<dyn BlobStore> = Arc::new(FileBlobStore::open(dir.path()).expect("reopen blob"));
    let cart = CartStore::open(blob).expect("reopen cart");

    assert!(cart.lines().expect("lines").is_empty());
    assert_eq!(cart.order_snapshot().expect("order"), before);
}

#[test]
fn test_interrupted_checkout_is_replayed_on_open() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blob = Arc::new(FileBlobStore::open(dir.path()).expect("open blob"));

    {
        let cart = CartStore::open(Arc::clone(&blob) as Arc<dyn BlobStore>).expect("open cart");
        cart.add(&snake_plant()).expect("add");
    }

    // Crash simulation: the write-ahead marker landed, nothing after it did
    let raw = blob.get(keys::CART).expect("get").expect("cart blob");
    blob.set(keys::CHECKOUT_PENDING, &raw).expect("marker");

    let cart = CartStore::open(blob.clone() as Arc<dyn BlobStore>).expect("reopen cart");

    assert!(cart.lines().expect("lines").is_empty());
    assert_eq!(cart.order_snapshot().expect("order").len(), 1);
    assert!(
        blob.get(keys::CHECKOUT_PENDING)
            .expect("marker read")
            .is_none()
    );
}
