//! Product handlers.
//!
//! Listing is public; every mutation requires an admin access token.
//! Partial updates follow read-modify-write: fetch the row, overlay the
//! provided fields, validate the merged result, write it back.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use stockroom_core::validation::{
    validate_image_filename, validate_price_cents, validate_product_name, validate_stock,
    validate_supplier,
};
use stockroom_core::Product;

// =============================================================================
// DTOs
// =============================================================================

/// Public view of a product.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub supplier: String,
    /// Price in cents (integer money; clients format for display).
    pub price_cents: i64,
    pub stock: i64,
    /// Image filename under `/assets`, if any.
    pub image: Option<String>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            supplier: p.supplier,
            price_cents: p.price_cents,
            stock: p.stock,
            image: p.image,
        }
    }
}

/// Creation request body. All fields except `image` are required.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub supplier: String,
    pub price_cents: i64,
    pub stock: i64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Partial update body. Absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub supplier: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i64>,
    pub image: Option<String>,
}

/// Absolute stock update body.
#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub stock: i64,
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /api/products`
///
/// Full catalog, ordered by name. Public.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state.db.products().list().await?;
    let dtos: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();

    Ok(Json(dtos))
}

/// `POST /api/products`
///
/// Creates a product. Admin only.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    current.ensure_admin()?;

    let name = validate_product_name(&req.name)?;
    let supplier = validate_supplier(&req.supplier)?;
    validate_price_cents(req.price_cents)?;
    validate_stock(req.stock)?;
    if let Some(ref image) = req.image {
        validate_image_filename(image)?;
    }

    let product = Product::new(name, supplier, req.price_cents, req.stock, req.image);
    let product = state.db.products().insert(&product).await?;

    info!(id = %product.id, name = %product.name, by = %current.username, "Product created");

    Ok((StatusCode::CREATED, Json(ProductDto::from(product))))
}

/// `PUT /api/products/{id}`
///
/// Partially updates a product. Admin only; 404 on unknown id.
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    current.ensure_admin()?;

    let mut product = state
        .db
        .products()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &id))?;

    if let Some(name) = req.name {
        product.name = validate_product_name(&name)?;
    }
    if let Some(supplier) = req.supplier {
        product.supplier = validate_supplier(&supplier)?;
    }
    if let Some(price_cents) = req.price_cents {
        validate_price_cents(price_cents)?;
        product.price_cents = price_cents;
    }
    if let Some(stock) = req.stock {
        validate_stock(stock)?;
        product.stock = stock;
    }
    if let Some(image) = req.image {
        validate_image_filename(&image)?;
        product.image = Some(image);
    }

    state.db.products().update(&product).await?;

    info!(id = %product.id, by = %current.username, "Product updated");

    // Re-read for the authoritative updated_at
    let product = state
        .db
        .products()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &id))?;

    Ok(Json(ProductDto::from(product)))
}

/// `PUT /api/products/{id}/stock`
///
/// Sets the stock level to an absolute value. Admin only.
pub async fn update_stock(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStockRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    current.ensure_admin()?;

    validate_stock(req.stock)?;

    state.db.products().set_stock(&id, req.stock).await?;

    info!(id = %id, stock = %req.stock, by = %current.username, "Stock updated");

    let product = state
        .db
        .products()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &id))?;

    Ok(Json(ProductDto::from(product)))
}

/// `DELETE /api/products/{id}`
///
/// Hard-deletes a product. Admin only; 204 on success.
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    current.ensure_admin()?;

    state.db.products().delete(&id).await?;

    info!(id = %id, by = %current.username, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}
