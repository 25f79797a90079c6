// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Product Ownership Gate
//!
//! Axum middleware deciding whether an authenticated actor may mutate a
//! product: the product's seller and administrators pass, everyone else is
//! stopped with a classified JSON error before the handler runs.
//!
//! ## Modules
//!
//! - `ownership` - The gate: applicability, lookup contract, decision, middleware
//! - `auth` - Actor and role labels, forwarded-actor middleware
//! - `api` - Host router (products, health, OpenAPI docs)
//! - `store` - In-memory product lookup

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod ownership;
pub mod state;
pub mod store;
pub mod telemetry;
