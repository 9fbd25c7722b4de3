//! Session-related types.
//!
//! The session is two blobs: `isLoggedIn` (the literal string `"true"` or
//! absent) and `user` (a name/email record or absent). There is no real
//! authentication behind them; the flag is all the storefront checks.

use serde::{Deserialize, Serialize};

use greenlife_core::Email;

/// The customer identity stored alongside the login flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: Email,
}
