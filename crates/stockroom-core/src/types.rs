//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │      User       │   │     Product     │   │      Role       │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  User           │   │
//! │  │  username       │   │  name           │   │  Admin          │   │
//! │  │  password_hash  │   │  supplier       │   └─────────────────┘   │
//! │  │  role           │   │  price_cents    │                         │
//! │  └─────────────────┘   │  stock          │                         │
//! │                        │  image (opt)    │                         │
//! │                        └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every entity carries an immutable UUID v4 `id` generated at creation,
//! plus `created_at`/`updated_at` timestamps maintained by the database
//! layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Role
// =============================================================================

/// The role of a user account.
///
/// Mutating product endpoints are gated on [`Role::Admin`]; everything a
/// regular user can do, an admin can do too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account: can authenticate and read the catalog.
    User,
    /// Administrator: can also create, update, and delete products.
    Admin,
}

impl Role {
    /// Checks whether this role grants catalog mutation rights.
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Stable lowercase name, matching the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered account.
///
/// `password_hash` is an argon2 PHC string; the plaintext password never
/// appears outside the registration/login handlers. Handlers expose users
/// through DTOs that omit the hash entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Login name. Unique across all accounts.
    pub username: String,

    /// Argon2 hash of the password in PHC string format.
    pub password_hash: String,

    /// Account role.
    pub role: Role,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a new user with a generated id and current timestamps.
    ///
    /// The caller provides an already-hashed password; this constructor
    /// never sees plaintext.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        let now = Utc::now();
        User {
            id: generate_id(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the inventory catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Supplier the product is sourced from.
    pub supplier: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Current stock level. Never negative.
    pub stock: i64,

    /// Optional image filename, served from the assets directory.
    pub image: Option<String>,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Builds a new product with a generated id and current timestamps.
    pub fn new(
        name: impl Into<String>,
        supplier: impl Into<String>,
        price_cents: i64,
        stock: i64,
        image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Product {
            id: generate_id(),
            name: name.into(),
            supplier: supplier.into(),
            price_cents,
            stock,
            image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether at least one unit is available.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Id Generation
// =============================================================================

/// Generates a new entity id (UUID v4 string).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_default_is_user() {
        assert_eq!(Role::default(), Role::User);
        assert!(!Role::default().is_admin());
        assert!(Role::Admin.is_admin());
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_product_price_helper() {
        let product = Product::new("Watch", "Casio", 4999, 30, None);
        assert_eq!(product.price().cents(), 4999);
        assert!(product.in_stock());
    }

    #[test]
    fn test_out_of_stock() {
        let product = Product::new("Laptop", "Dell", 59999, 0, None);
        assert!(!product.in_stock());
    }

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_user_constructor_sets_timestamps() {
        let user = User::new("alice", "$argon2id$fake", Role::Admin);
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.role, Role::Admin);
    }
}
