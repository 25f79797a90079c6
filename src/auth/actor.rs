// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The authenticated caller.

use serde::{Deserialize, Serialize};

use super::roles::{RoleLabel, RoleSet};
use crate::models::ActorId;

/// Authenticated caller, resolved by an upstream authenticator.
///
/// The gate reads it from request extensions and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Canonical user ID
    pub id: ActorId,

    /// Role labels held by the user
    #[serde(default)]
    pub roles: RoleSet,
}

impl Actor {
    pub fn new(id: impl Into<ActorId>, roles: RoleSet) -> Self {
        Self {
            id: id.into(),
            roles,
        }
    }

    /// Check if the actor holds the given role label.
    pub fn has_role(&self, role: &RoleLabel) -> bool {
        self.roles.contains(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_role_checks_exact_label() {
        let actor = Actor::new(5, RoleSet::parse_list("Administrator"));
        assert!(actor.has_role(&RoleLabel::new("Administrator").unwrap()));
        assert!(!actor.has_role(&RoleLabel::new("Admin").unwrap()));
    }

    #[test]
    fn deserializes_without_roles() {
        let actor: Actor = serde_json::from_str(r#"{"id":5}"#).unwrap();
        assert_eq!(actor.id, ActorId(5));
        assert!(actor.roles.is_empty());
    }
}
