// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The ownership gate and its axum middleware adapter.
//!
//! ## Pipeline
//!
//! Each step either halts with a [`GateError`] or falls through:
//!
//! 1. Applicability: unrelated paths and non-mutating methods pass untouched
//! 2. Actor: a resolved [`Actor`] must be present (401)
//! 3. Identifier: the product ID must be present (400)
//! 4. Resolution: one lookup with the seller populated (404 / 500)
//! 5. Decision: seller or administrator (403)
//! 6. The fetched product is attached as [`Attached<Product>`] and the
//!    request continues
//!
//! ## Usage
//!
//! ```rust,ignore
//! let gate = OwnershipGate::new(GateConfig::from_env()?, store)?;
//!
//! let app = Router::new()
//!     .route("/api/products/{id}", put(update_product).delete(delete_product))
//!     .route_layer(axum::middleware::from_fn_with_state(gate, ownership_gate));
//! ```
//!
//! Installing with `route_layer` makes the matched `{id}` parameter visible
//! to the gate; a matched route without `{id}` is rejected with 400. Wrapped
//! around a whole router instead, no parameters are captured and the gate
//! reads the path segment following the configured prefix.

use std::sync::Arc;

use axum::{
    extract::{rejection::RawPathParamsRejection, RawPathParams, Request, State},
    http::{request::Parts, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::applicability::{classify, segment_after_prefix, Applicability};
use super::decision::{decide, Decision};
use super::lookup::{FindOptions, LookupError, ProductLookup};
use crate::auth::Actor;
use crate::config::{ConfigError, GateConfig};
use crate::error::GateError;
use crate::models::{Product, ProductId};

/// Route parameter holding the product identifier.
pub const ID_PARAM: &str = "id";

/// A value attached to the request by the gate for downstream stages.
///
/// Downstream handlers read it with `Extension<Attached<Product>>` instead
/// of fetching the product again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attached<T> {
    /// Configured state key
    pub key: Arc<str>,
    /// Instance fetched while deciding this request
    pub value: T,
}

/// Where the product identifier comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource<'a> {
    /// A route matched; holds its `id` parameter, if it captured one
    Routed(Option<&'a str>),
    /// The gate runs outside routing, so nothing was captured
    Unrouted,
}

/// Inputs the gate reads from one request.
#[derive(Debug, Clone, Copy)]
pub struct GateRequest<'a> {
    pub method: &'a Method,
    pub path: &'a str,
    pub actor: Option<&'a Actor>,
    pub id: IdSource<'a>,
}

impl<'a> GateRequest<'a> {
    fn from_parts(parts: &'a Parts, id: IdSource<'a>) -> Self {
        Self {
            method: &parts.method,
            path: parts.uri.path(),
            actor: parts.extensions.get::<Actor>(),
            id,
        }
    }
}

/// Non-terminal outcome of the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Passage {
    /// Request is not subject to the check
    Bypass,
    /// Check passed; carries the product fetched for the decision
    Authorized(Product),
}

/// Ownership-or-admin gate for mutating product requests.
///
/// Cheap to clone; holds no per-request state.
#[derive(Clone)]
pub struct OwnershipGate {
    config: Arc<GateConfig>,
    lookup: Arc<dyn ProductLookup>,
    find_options: Arc<FindOptions>,
    state_key: Arc<str>,
}

impl OwnershipGate {
    /// Build a gate, validating the configuration.
    pub fn new(config: GateConfig, lookup: Arc<dyn ProductLookup>) -> Result<Self, ConfigError> {
        config.validate()?;
        let find_options = FindOptions::populate(config.populate.iter().cloned());
        let state_key = Arc::from(config.state_key.as_str());
        Ok(Self {
            config: Arc::new(config),
            lookup,
            find_options: Arc::new(find_options),
            state_key,
        })
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Run the gate for one request.
    pub async fn evaluate(&self, request: GateRequest<'_>) -> Result<Passage, GateError> {
        let applicability = classify(&self.config, request.method, request.path);
        if applicability != Applicability::Gated {
            return Ok(Passage::Bypass);
        }

        let actor = request.actor.ok_or(GateError::Unauthenticated)?;

        let product_id = self
            .resolve_identifier(&request)
            .ok_or(GateError::BadRequest)?;

        let product = self.fetch(&product_id).await?;

        match decide(actor, &product, &self.config.admin_role) {
            Decision::Allow(grant) => {
                tracing::debug!(
                    actor_id = %actor.id,
                    product_id = %product_id,
                    ?grant,
                    "Product mutation authorized"
                );
                Ok(Passage::Authorized(product))
            }
            Decision::Deny(reason) => {
                tracing::info!(
                    actor_id = %actor.id,
                    product_id = %product_id,
                    method = %request.method,
                    ?reason,
                    "Product mutation denied"
                );
                Err(GateError::Forbidden)
            }
        }
    }

    /// The captured `id` parameter of a matched route. Only an unrouted
    /// request reads the segment after the prefix.
    fn resolve_identifier(&self, request: &GateRequest<'_>) -> Option<ProductId> {
        let id = match request.id {
            IdSource::Routed(id) => id,
            IdSource::Unrouted => segment_after_prefix(&self.config.path_prefix, request.path),
        };
        id.filter(|id| !id.is_empty()).map(ProductId::from)
    }

    async fn fetch(&self, product_id: &ProductId) -> Result<Product, GateError> {
        match self.lookup.find_one(product_id, &self.find_options).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) | Err(LookupError::NotFound) => Err(GateError::NotFound),
            Err(err) => {
                tracing::error!(
                    product_id = %product_id,
                    error = %err,
                    "Product lookup failed"
                );
                Err(GateError::Internal)
            }
        }
    }

    fn attach(&self, product: Product) -> Attached<Product> {
        Attached {
            key: Arc::clone(&self.state_key),
            value: product,
        }
    }
}

/// Ownership gate middleware function.
pub async fn ownership_gate(
    State(gate): State<OwnershipGate>,
    params: Result<RawPathParams, RawPathParamsRejection>,
    request: Request,
    next: Next,
) -> Response {
    let captured = match params {
        Ok(params) => Some(
            params
                .iter()
                .find(|(name, _)| *name == ID_PARAM)
                .map(|(_, value)| value.to_string()),
        ),
        Err(RawPathParamsRejection::MissingPathParams(_)) => None,
        Err(_) => Some(None),
    };

    let (mut parts, body) = request.into_parts();

    let id = match &captured {
        Some(id) => IdSource::Routed(id.as_deref()),
        None => IdSource::Unrouted,
    };
    let outcome = gate.evaluate(GateRequest::from_parts(&parts, id)).await;

    match outcome {
        Ok(Passage::Bypass) => next.run(Request::from_parts(parts, body)).await,
        Ok(Passage::Authorized(product)) => {
            parts.extensions.insert(gate.attach(product));
            next.run(Request::from_parts(parts, body)).await
        }
        Err(err) => err.into_response(),
    }
}
