// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is read from the environment once at startup and validated
//! before the router is built. Invalid values abort startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GATE_PATH_PREFIX` | Route prefix protected by the ownership gate | `/api/products` |
//! | `GATE_MUTATING_METHODS` | Comma-separated methods that are gated | `PUT,PATCH,DELETE` |
//! | `GATE_ADMIN_ROLE` | Role label that overrides ownership | `Administrator` |
//! | `GATE_STATE_KEY` | Key the fetched product is attached under | `product` |
//! | `GATE_POPULATE` | Comma-separated relations populated on lookup | `seller` |
//! | `SEED_PRODUCTS` | JSON array of products loaded at startup | none |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;

use axum::http::Method;

use crate::auth::{roles, RoleLabel};

pub const GATE_PATH_PREFIX_ENV: &str = "GATE_PATH_PREFIX";
pub const GATE_MUTATING_METHODS_ENV: &str = "GATE_MUTATING_METHODS";
pub const GATE_ADMIN_ROLE_ENV: &str = "GATE_ADMIN_ROLE";
pub const GATE_STATE_KEY_ENV: &str = "GATE_STATE_KEY";
pub const GATE_POPULATE_ENV: &str = "GATE_POPULATE";
pub const SEED_PRODUCTS_ENV: &str = "SEED_PRODUCTS";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_PATH_PREFIX: &str = "/api/products";
pub const DEFAULT_ADMIN_ROLE: &str = roles::ADMINISTRATOR;
pub const DEFAULT_STATE_KEY: &str = "product";
pub const DEFAULT_POPULATE: &str = "seller";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration validation error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("path prefix must start with '/' and name a collection: {0:?}")]
    InvalidPathPrefix(String),

    #[error("at least one mutating method is required")]
    NoMutatingMethods,

    #[error("invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    #[error("admin role label must not be empty")]
    EmptyAdminRole,

    #[error("state key must not be empty")]
    EmptyStateKey,

    #[error("at least one populate relation is required")]
    NoPopulateRelations,

    #[error("invalid port: {0:?}")]
    InvalidPort(String),

    #[error("invalid bind address: {0}")]
    InvalidBindAddress(String),
}

/// Ownership gate configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// Route prefix of the protected collection, without trailing slash.
    pub path_prefix: String,
    /// Methods considered mutating (update, partial update, delete).
    pub mutating_methods: Vec<Method>,
    /// Role label granting the administrative override.
    pub admin_role: RoleLabel,
    /// Key the fetched product is attached under for downstream stages.
    pub state_key: String,
    /// Relations to populate in the single lookup call.
    pub populate: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            mutating_methods: vec![Method::PUT, Method::PATCH, Method::DELETE],
            admin_role: RoleLabel::administrator(),
            state_key: DEFAULT_STATE_KEY.to_string(),
            populate: vec![DEFAULT_POPULATE.to_string()],
        }
    }
}

impl GateConfig {
    /// Load from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let path_prefix = lookup(GATE_PATH_PREFIX_ENV)
            .map(|p| p.trim().to_string())
            .unwrap_or(defaults.path_prefix);

        let mutating_methods = match lookup(GATE_MUTATING_METHODS_ENV) {
            Some(raw) => parse_methods(&raw)?,
            None => defaults.mutating_methods,
        };

        let admin_role = match lookup(GATE_ADMIN_ROLE_ENV) {
            Some(raw) => RoleLabel::new(raw).ok_or(ConfigError::EmptyAdminRole)?,
            None => defaults.admin_role,
        };

        let state_key = lookup(GATE_STATE_KEY_ENV)
            .map(|k| k.trim().to_string())
            .unwrap_or(defaults.state_key);

        let populate = match lookup(GATE_POPULATE_ENV) {
            Some(raw) => split_list(&raw).map(str::to_string).collect(),
            None => defaults.populate,
        };

        let config = Self {
            path_prefix,
            mutating_methods,
            admin_role,
            state_key,
            populate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the gate relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.path_prefix;
        if !prefix.starts_with('/') || prefix.ends_with('/') || prefix.contains("//") {
            return Err(ConfigError::InvalidPathPrefix(prefix.clone()));
        }
        if self.mutating_methods.is_empty() {
            return Err(ConfigError::NoMutatingMethods);
        }
        if self.state_key.trim().is_empty() {
            return Err(ConfigError::EmptyStateKey);
        }
        if self.populate.iter().all(|r| r.trim().is_empty()) {
            return Err(ConfigError::NoPopulateRelations);
        }
        Ok(())
    }

    /// Whether `method` is one of the gated methods.
    pub fn is_mutating(&self, method: &Method) -> bool {
        self.mutating_methods.contains(method)
    }
}

/// Server bind configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddress(e.to_string()))
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_methods(raw: &str) -> Result<Vec<Method>, ConfigError> {
    let mut methods = Vec::new();
    for token in split_list(raw) {
        let method = Method::from_bytes(token.to_ascii_uppercase().as_bytes())
            .map_err(|_| ConfigError::InvalidMethod(token.to_string()))?;
        if !methods.contains(&method) {
            methods.push(method);
        }
    }
    if methods.is_empty() {
        return Err(ConfigError::NoMutatingMethods);
    }
    Ok(methods)
}
