//! HTTP request handlers.
//!
//! - [`auth`] - registration, login, token refresh, current user
//! - [`products`] - product CRUD
//! - [`health`] - liveness/readiness probe

pub mod auth;
pub mod health;
pub mod products;
