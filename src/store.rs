// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory product store.
//!
//! Backs the host binary and the router tests. Relations are only returned
//! when requested through [`FindOptions::populate`], the same contract a
//! database-backed lookup follows.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::models::{Product, ProductId, UpdateProductRequest};
use crate::ownership::{FindOptions, LookupError, ProductLookup};

/// Relation name for the product's seller.
pub const SELLER_RELATION: &str = "seller";

#[derive(Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            products: RwLock::new(products),
        }
    }

    /// Build a store from a JSON array of products.
    pub fn from_seed_json(json: &str) -> Result<Self, serde_json::Error> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::with_products(products))
    }

    /// Get a product with all relations populated.
    pub async fn get(&self, id: &ProductId) -> Option<Product> {
        self.products.read().await.get(id).cloned()
    }

    pub async fn update(
        &self,
        id: &ProductId,
        update: UpdateProductRequest,
    ) -> Result<Product, ApiError> {
        let mut products = self.products.write().await;
        let current = products
            .remove(id)
            .ok_or_else(|| ApiError::not_found("Product not found"))?;
        let updated = current.with_update(update);
        products.insert(id.clone(), updated.clone());
        Ok(updated)
    }

    pub async fn remove(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.products
            .write()
            .await
            .remove(id)
            .ok_or_else(|| ApiError::not_found("Product not found"))
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }
}

#[async_trait]
impl ProductLookup for InMemoryProductStore {
    async fn find_one(
        &self,
        id: &ProductId,
        options: &FindOptions,
    ) -> Result<Option<Product>, LookupError> {
        let product = self.products.read().await.get(id).cloned();
        Ok(product.map(|mut product| {
            if !options.wants(SELLER_RELATION) {
                product.seller = None;
            }
            product
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActorId, SellerRef};

    fn lamp() -> Product {
        Product {
            id: ProductId::from("9"),
            name: "Lamp".into(),
            price_cents: 1200,
            seller: Some(SellerRef { id: ActorId(5) }),
        }
    }

    #[tokio::test]
    async fn find_one_populates_seller_only_when_asked() {
        let store = InMemoryProductStore::with_products([lamp()]);

        let populated = store
            .find_one(&ProductId::from("9"), &FindOptions::populate([SELLER_RELATION]))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(populated.seller, Some(SellerRef { id: ActorId(5) }));

        let bare = store
            .find_one(&ProductId::from("9"), &FindOptions::default())
            .await
            .unwrap()
            .unwrap();
        assert!(bare.seller.is_none());
    }

    #[tokio::test]
    async fn find_one_returns_none_for_unknown_id() {
        let store = InMemoryProductStore::new();
        let result = store
            .find_one(&ProductId::from("404"), &FindOptions::default())
            .await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn seed_json_loads_products() {
        let store = InMemoryProductStore::from_seed_json(
            r#"[{"id":"9","name":"Lamp","price_cents":1200,"seller":{"id":5}},
                {"id":"10","name":"Chair","price_cents":4500}]"#,
        )
        .unwrap();
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(&ProductId::from("9")).await, Some(lamp()));
        assert!(store.get(&ProductId::from("10")).await.unwrap().seller.is_none());

        assert!(InMemoryProductStore::from_seed_json("{}").is_err());
    }

    #[tokio::test]
    async fn update_and_remove() {
        let store = InMemoryProductStore::with_products([lamp()]);
        let id = ProductId::from("9");

        let updated = store
            .update(
                &id,
                UpdateProductRequest {
                    name: Some("Desk lamp".into()),
                    price_cents: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Desk lamp");
        assert_eq!(store.get(&id).await, Some(updated));

        store.remove(&id).await.unwrap();
        assert_eq!(store.len().await, 0);
        assert!(store.remove(&id).await.is_err());
    }
}
