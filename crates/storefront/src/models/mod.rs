//! Domain models for the storefront.
//!
//! All persisted models serialize as camelCase JSON; the blob store layout
//! is the same shape the browser build of this storefront kept in local
//! storage, so existing data rehydrates unchanged.

pub mod cart;
pub mod order;
pub mod product;
pub mod session;

pub use cart::CartLine;
pub use order::OrderPayload;
pub use product::{Category, CategoryFilter, NewProduct, Product};
pub use session::Customer;
