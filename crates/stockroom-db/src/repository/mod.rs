//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Repository Pattern Explained                        │
//! │                                                                     │
//! │  HTTP handler                                                       │
//! │       │                                                             │
//! │       │  db.products().get_by_id(&id)                               │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── list(&self)                                                    │
//! │  ├── get_by_id(&self, id)                                           │
//! │  ├── insert(&self, product)                                         │
//! │  └── update(&self, product)                                         │
//! │       │                                                             │
//! │       │  SQL query                                                  │
//! │       ▼                                                             │
//! │  SQLite database                                                    │
//! │                                                                     │
//! │  SQL is isolated in one place, and tests can exercise each          │
//! │  repository against an in-memory database.                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`user::UserRepository`] - Account storage and lookup
//! - [`product::ProductRepository`] - Product CRUD

pub mod product;
pub mod user;
