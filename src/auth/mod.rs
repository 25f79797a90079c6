// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Actor Module
//!
//! Representation of the authenticated caller as seen by the ownership gate.
//!
//! ## Flow
//!
//! 1. An upstream authenticator verifies the caller
//! 2. It forwards the resolved identity (`x-actor-id`, `x-actor-roles`)
//! 3. [`forwarded::forwarded_actor`] places an [`Actor`] in request extensions
//! 4. The ownership gate reads it as an explicit request-scoped value
//!
//! Verifying who the caller is belongs to the upstream, not to this crate.

pub mod actor;
pub mod forwarded;
pub mod roles;

pub use actor::Actor;
pub use forwarded::forwarded_actor;
pub use roles::{RoleLabel, RoleSet};
