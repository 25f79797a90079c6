// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::Method,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::forwarded_actor,
    config::{GateConfig, DEFAULT_PATH_PREFIX},
    models::{ActorId, Product, ProductId, SellerRef, UpdateProductRequest},
    ownership::ownership_gate,
    state::AppState,
};

pub mod health;
pub mod products;

/// Build the service router.
///
/// Product routes are mounted under the gate's configured prefix so the gate
/// and the router agree on what is protected. The forwarded actor layer is
/// outermost so the actor is in place before the gate runs.
pub fn router(state: AppState) -> Router {
    let config = state.gate.config();
    let product_path = format!("{}/{{id}}", config.path_prefix);

    let product_routes = Router::new()
        .route(&product_path, product_methods(config))
        .route_layer(from_fn_with_state(state.gate.clone(), ownership_gate));
    let doc = api_doc(config);

    let health_routes = Router::new()
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    Router::new()
        .merge(product_routes)
        .merge(health_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", doc))
        .layer(from_fn(forwarded_actor))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

/// Product methods. Mutating handlers are only mounted for gated methods;
/// anything else on the product path answers 405.
fn product_methods(config: &GateConfig) -> MethodRouter<AppState> {
    let mut methods = get(products::get_product);
    for method in &config.mutating_methods {
        methods = if *method == Method::PUT {
            methods.put(products::update_product)
        } else if *method == Method::PATCH {
            methods.patch(products::update_product)
        } else if *method == Method::DELETE {
            methods.delete(products::delete_product)
        } else {
            methods
        };
    }
    methods
}

/// OpenAPI document matching the mounted routes.
///
/// Product paths are declared under the default prefix and moved to the
/// configured one; operations for ungated methods are dropped.
fn api_doc(config: &GateConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    doc.paths.paths = std::mem::take(&mut doc.paths.paths)
        .into_iter()
        .map(|(path, mut item)| match path.strip_prefix(DEFAULT_PATH_PREFIX) {
            Some(rest) => {
                if !config.is_mutating(&Method::PUT) {
                    item.put = None;
                }
                if !config.is_mutating(&Method::DELETE) {
                    item.delete = None;
                }
                (format!("{}{rest}", config.path_prefix), item)
            }
            None => (path, item),
        })
        .collect();

    doc
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::liveness,
        health::readiness,
        products::get_product,
        products::update_product,
        products::delete_product
    ),
    components(
        schemas(
            Product,
            ProductId,
            SellerRef,
            ActorId,
            UpdateProductRequest,
            health::HealthResponse,
            health::ReadyResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Products", description = "Product access guarded by seller ownership")
    )
)]
struct ApiDoc;
