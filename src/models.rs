// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Product Data Models
//!
//! Types shared between the ownership gate, the lookup collaborator and the
//! host API handlers. All types derive `Serialize`, `Deserialize`, and
//! `ToSchema` for JSON handling and OpenAPI documentation.
//!
//! ## Identifier Types
//!
//! - [`ProductId`] is opaque: it arrives as a path segment and is handed to the
//!   lookup collaborator unchanged.
//! - [`ActorId`] is the numeric user identifier shared by actors and sellers,
//!   so ownership is a plain equality test.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Identifier Types
// =============================================================================

/// Opaque product identifier.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub String);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        ProductId(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId(value.to_string())
    }
}

/// Numeric user identifier.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct ActorId(pub u64);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(value: u64) -> Self {
        ActorId(value)
    }
}

// =============================================================================
// Product Models
// =============================================================================

/// Reference to the user who sells a product.
///
/// Only populated when the lookup was asked to populate the `seller`
/// relation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SellerRef {
    /// Seller's user identifier.
    pub id: ActorId,
}

/// A listed product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier for this product.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in minor currency units.
    pub price_cents: u64,
    /// Seller, absent when the product has no assigned owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerRef>,
}

/// Request body for updating a product.
///
/// Every field is optional so the same body serves `PUT` and `PATCH`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Default)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price_cents: Option<u64>,
}

impl Product {
    /// Apply an update request, returning the modified copy.
    pub fn with_update(mut self, update: UpdateProductRequest) -> Self {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price_cents) = update.price_cents {
            self.price_cents = price_cents;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_without_seller_omits_field() {
        let product = Product {
            id: ProductId::from("9"),
            name: "Lamp".into(),
            price_cents: 1200,
            seller: None,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("seller").is_none());
        assert_eq!(json["id"], "9");
    }

    #[test]
    fn with_update_only_touches_present_fields() {
        let product = Product {
            id: ProductId::from("9"),
            name: "Lamp".into(),
            price_cents: 1200,
            seller: Some(SellerRef { id: ActorId(5) }),
        };
        let updated = product.clone().with_update(UpdateProductRequest {
            name: None,
            price_cents: Some(900),
        });
        assert_eq!(updated.name, "Lamp");
        assert_eq!(updated.price_cents, 900);
        assert_eq!(updated.seller, product.seller);
    }
}
