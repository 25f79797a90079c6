// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::config::{ConfigError, GateConfig};
use crate::ownership::OwnershipGate;
use crate::store::InMemoryProductStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryProductStore>,
    pub gate: OwnershipGate,
}

impl AppState {
    /// Build state whose gate looks products up in `store`.
    pub fn new(store: InMemoryProductStore, config: GateConfig) -> Result<Self, ConfigError> {
        let store = Arc::new(store);
        let gate = OwnershipGate::new(config, store.clone())?;
        Ok(Self { store, gate })
    }
}

