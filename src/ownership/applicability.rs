// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Route filter deciding whether a request is subject to the ownership check.

use axum::http::Method;

use crate::config::GateConfig;

/// How the gate treats a request before looking at the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// Path is outside the protected collection
    Unrelated,
    /// Protected collection, but a non-mutating method
    ReadOnly,
    /// Mutating call on the protected collection
    Gated,
}

impl Applicability {
    pub fn is_gated(self) -> bool {
        self == Applicability::Gated
    }
}

/// Classify a request by path and method.
pub fn classify(config: &GateConfig, method: &Method, path: &str) -> Applicability {
    if !path_matches(&config.path_prefix, path) {
        Applicability::Unrelated
    } else if !config.is_mutating(method) {
        Applicability::ReadOnly
    } else {
        Applicability::Gated
    }
}

/// Segment-aware prefix test: `/api/products` matches `/api/products` and
/// `/api/products/9`, not `/api/productsale`.
pub fn path_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// First path segment after the prefix, used when the gate runs outside
/// routing (`/api/products/9/images` gives `9`).
pub fn segment_after_prefix<'a>(prefix: &str, path: &'a str) -> Option<&'a str> {
    path.strip_prefix(prefix)?
        .strip_prefix('/')?
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrelated_paths_are_never_gated() {
        let config = GateConfig::default();
        for method in [Method::GET, Method::PUT, Method::PATCH, Method::DELETE] {
            assert_eq!(
                classify(&config, &method, "/api/orders/9"),
                Applicability::Unrelated
            );
            assert_eq!(
                classify(&config, &method, "/api/productsale/9"),
                Applicability::Unrelated
            );
        }
    }

    #[test]
    fn reads_on_protected_collection_are_not_gated() {
        let config = GateConfig::default();
        for method in [Method::GET, Method::HEAD, Method::OPTIONS, Method::POST] {
            assert_eq!(
                classify(&config, &method, "/api/products/9"),
                Applicability::ReadOnly
            );
        }
    }

    #[test]
    fn mutations_on_protected_collection_are_gated() {
        let config = GateConfig::default();
        for method in [Method::PUT, Method::PATCH, Method::DELETE] {
            assert!(classify(&config, &method, "/api/products/9").is_gated());
        }
        assert!(classify(&config, &Method::PUT, "/api/products").is_gated());
    }

    #[test]
    fn segment_after_prefix_extracts_first_segment() {
        assert_eq!(segment_after_prefix("/api/products", "/api/products/9"), Some("9"));
        assert_eq!(
            segment_after_prefix("/api/products", "/api/products/9/images"),
            Some("9")
        );
        assert_eq!(segment_after_prefix("/api/products", "/api/products"), None);
        assert_eq!(segment_after_prefix("/api/products", "/api/products/"), None);
        assert_eq!(segment_after_prefix("/api/products", "/api/productsale"), None);
    }
}
