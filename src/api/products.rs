// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Product handlers.
//!
//! Mutating handlers sit behind the ownership gate and work on the product
//! it attached, so they never fetch it a second time. Only methods the gate
//! covers get a mutating handler.
//!
//! Paths below use the default `/api/products` prefix; [`super::router`]
//! publishes them under the configured one.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    error::ApiError,
    models::{Product, ProductId, UpdateProductRequest},
    ownership::Attached,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Identifier of the product")
    ),
    tag = "Products",
    responses(
        (status = 200, body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Product>, ApiError> {
    state
        .store
        .get(&ProductId::from(id))
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product not found"))
}

/// Update a product. Also mounted for `PATCH`; absent fields are unchanged.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Identifier of the product to update")
    ),
    request_body = UpdateProductRequest,
    tag = "Products",
    responses(
        (status = 200, body = Product),
        (status = 401, description = "No authenticated actor"),
        (status = 403, description = "Actor is neither seller nor administrator"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(attached): Extension<Attached<Product>>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let updated = state.store.update(&attached.value.id, request).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Identifier of the product to delete")
    ),
    tag = "Products",
    responses(
        (status = 204),
        (status = 401, description = "No authenticated actor"),
        (status = 403, description = "Actor is neither seller nor administrator"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(attached): Extension<Attached<Product>>,
) -> Result<StatusCode, ApiError> {
    state.store.remove(&attached.value.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
