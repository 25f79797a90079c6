// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Contract for the product lookup collaborator.
//!
//! The gate performs exactly one lookup per gated request and asks for the
//! seller relation in the same call. Implementations distinguish "no such
//! product" (`Ok(None)` or [`LookupError::NotFound`]) from faults.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{Product, ProductId};

/// Options passed to [`ProductLookup::find_one`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Relations to populate (e.g. `seller`).
    pub populate: Vec<String>,
}

impl FindOptions {
    pub fn populate<I, S>(relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            populate: relations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn wants(&self, relation: &str) -> bool {
        self.populate.iter().any(|r| r == relation)
    }
}

/// Failure reported by a lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The collaborator signalled absence explicitly
    #[error("product not found")]
    NotFound,

    #[error("product store unavailable: {0}")]
    Unavailable(String),

    #[error("product lookup timed out")]
    Timeout,

    #[error("product store error: {0}")]
    Storage(String),
}

/// Read access to products.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Fetch one product by identifier.
    async fn find_one(
        &self,
        id: &ProductId,
        options: &FindOptions,
    ) -> Result<Option<Product>, LookupError>;
}

#[async_trait]
impl<T: ProductLookup + ?Sized> ProductLookup for Arc<T> {
    async fn find_one(
        &self,
        id: &ProductId,
        options: &FindOptions,
    ) -> Result<Option<Product>, LookupError> {
        (**self).find_one(id, options).await
    }
}
