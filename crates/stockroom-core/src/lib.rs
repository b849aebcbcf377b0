//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the heart of the Stockroom inventory backend. It contains
//! the domain model and business rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Stockroom Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  apps/rest-api (axum)                         │ │
//! │  │   register ──► login ──► list/add/update/delete products     │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │             ★ stockroom-core (THIS CRATE) ★                   │ │
//! │  │                                                               │ │
//! │  │   ┌──────────┐  ┌──────────┐  ┌────────────┐  ┌───────────┐  │ │
//! │  │   │  types   │  │  money   │  │ validation │  │   error   │  │ │
//! │  │   │ Product  │  │  Money   │  │   rules    │  │  domain   │  │ │
//! │  │   │  User    │  │ (cents)  │  │   checks   │  │  errors   │  │ │
//! │  │   └──────────┘  └──────────┘  └────────────┘  └───────────┘  │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                 stockroom-db (SQLite layer)                   │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Role, Product)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// Re-exports for convenience: `use stockroom_core::Product` instead of
// `use stockroom_core::types::Product`
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a username.
pub const MAX_USERNAME_LEN: usize = 64;

/// Minimum length of a password. Shorter passwords are rejected at
/// registration before any hashing happens.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum length of a password. Bounds the argon2 input size.
pub const MAX_PASSWORD_LEN: usize = 128;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a supplier name.
pub const MAX_SUPPLIER_LEN: usize = 150;

/// Maximum stock level for a single product.
///
/// Prevents accidental over-entry (e.g., typing 1000000 instead of 100).
pub const MAX_STOCK: i64 = 1_000_000;
