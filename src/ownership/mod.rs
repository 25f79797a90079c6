// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Ownership Gate
//!
//! Request-scoped authorization for mutating product calls: only the
//! product's seller, or an actor holding the administrative role label, may
//! update or delete it.
//!
//! - `applicability` - which requests are subject to the check
//! - `lookup` - the product lookup collaborator contract
//! - `decision` - the ownership-or-admin predicate
//! - `gate` - orchestration and the axum middleware

pub mod applicability;
pub mod decision;
pub mod gate;
pub mod lookup;

pub use applicability::Applicability;
pub use decision::{decide, Decision, DenyReason, Grant, OwnedResource};
pub use gate::{ownership_gate, Attached, GateRequest, IdSource, OwnershipGate, Passage};
pub use lookup::{FindOptions, LookupError, ProductLookup};
