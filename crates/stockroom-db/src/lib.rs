//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides database access for the Stockroom inventory backend.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Data Flow                           │
//! │                                                                     │
//! │  HTTP handler (list_products, register, ...)                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  stockroom-db (THIS CRATE)                    │ │
//! │  │                                                               │ │
//! │  │   ┌─────────────┐   ┌───────────────┐   ┌────────────────┐   │ │
//! │  │   │  Database   │   │ Repositories  │   │   Migrations   │   │ │
//! │  │   │  (pool.rs)  │◄──│ user.rs       │   │   (embedded)   │   │ │
//! │  │   │ SqlitePool  │   │ product.rs    │   │ 001_init.sql   │   │ │
//! │  │   └─────────────┘   └───────────────┘   └────────────────┘   │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode)                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/stockroom.db")).await?;
//! let products = db.products().list().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::user::UserRepository;
