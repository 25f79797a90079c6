// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use product_ownership_gate::{
    api::router,
    config::{GateConfig, ServerConfig, SEED_PRODUCTS_ENV},
    state::AppState,
    store::InMemoryProductStore,
    telemetry::{self, LogFormat},
};

#[tokio::main]
async fn main() {
    telemetry::init(LogFormat::from_env());

    let gate_config = GateConfig::from_env().expect("Invalid ownership gate configuration");
    let server_config = ServerConfig::from_env().expect("Invalid server configuration");
    let addr = server_config
        .socket_addr()
        .expect("Failed to parse bind address");

    let store = match std::env::var(SEED_PRODUCTS_ENV) {
        Ok(json) => {
            InMemoryProductStore::from_seed_json(&json).expect("Invalid SEED_PRODUCTS JSON")
        }
        Err(_) => InMemoryProductStore::new(),
    };

    let state = AppState::new(store, gate_config)
        .expect("Failed to build ownership gate");

    tracing::info!(
        prefix = %state.gate.config().path_prefix,
        admin_role = %state.gate.config().admin_role,
        "Ownership gate configured"
    );

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(%addr, "Product service listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
