// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ownership-or-admin decision predicate.
//!
//! Pure function of the actor, the resource and the configured admin label.
//! No I/O and no state, so identical inputs always yield identical decisions.

use crate::auth::{Actor, RoleLabel};
use crate::models::{ActorId, Product};

/// Trait for resources that may have an owner.
pub trait OwnedResource {
    /// Get the owner's user ID, if the resource has one.
    fn owner_id(&self) -> Option<ActorId>;

    /// Check if `actor` owns this resource. Unowned resources have no owner.
    fn is_owned_by(&self, actor: &Actor) -> bool {
        self.owner_id() == Some(actor.id)
    }
}

impl OwnedResource for Product {
    fn owner_id(&self) -> Option<ActorId> {
        self.seller.as_ref().map(|seller| seller.id)
    }
}

/// Why access was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    Owner,
    Administrator,
}

/// Why access was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Resource belongs to another user
    NotOwner,
    /// Resource has no owner and the actor is not an administrator
    Unowned,
}

/// Transient per-request authorization outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow(Grant),
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }
}

/// Decide whether `actor` may mutate `resource`.
///
/// Ownership is checked first so an owner who is also an administrator is
/// reported as `Grant::Owner`.
pub fn decide<R: OwnedResource>(actor: &Actor, resource: &R, admin_role: &RoleLabel) -> Decision {
    if resource.is_owned_by(actor) {
        Decision::Allow(Grant::Owner)
    } else if actor.has_role(admin_role) {
        Decision::Allow(Grant::Administrator)
    } else if resource.owner_id().is_none() {
        Decision::Deny(DenyReason::Unowned)
    } else {
        Decision::Deny(DenyReason::NotOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::RoleSet;
    use crate::models::{ProductId, SellerRef};

    fn admin() -> RoleLabel {
        RoleLabel::new("Administrator").unwrap()
    }

    fn product(seller: Option<u64>) -> Product {
        Product {
            id: ProductId::from("9"),
            name: "Lamp".into(),
            price_cents: 1200,
            seller: seller.map(|id| SellerRef { id: ActorId(id) }),
        }
    }

    #[test]
    fn owner_is_allowed() {
        let actor = Actor::new(5, RoleSet::new());
        assert_eq!(
            decide(&actor, &product(Some(5)), &admin()),
            Decision::Allow(Grant::Owner)
        );
    }

    #[test]
    fn administrator_overrides_ownership() {
        let actor = Actor::new(5, RoleSet::parse_list("Administrator"));
        assert_eq!(
            decide(&actor, &product(Some(7)), &admin()),
            Decision::Allow(Grant::Administrator)
        );
        assert_eq!(
            decide(&actor, &product(None), &admin()),
            Decision::Allow(Grant::Administrator)
        );
    }

    #[test]
    fn owner_and_admin_reports_owner() {
        let actor = Actor::new(5, RoleSet::parse_list("Administrator"));
        assert_eq!(
            decide(&actor, &product(Some(5)), &admin()),
            Decision::Allow(Grant::Owner)
        );
    }

    #[test]
    fn non_owner_is_denied() {
        let actor = Actor::new(5, RoleSet::parse_list("Editor"));
        assert_eq!(
            decide(&actor, &product(Some(7)), &admin()),
            Decision::Deny(DenyReason::NotOwner)
        );
    }

    #[test]
    fn unowned_product_denies_regular_actor() {
        let actor = Actor::new(5, RoleSet::new());
        let decision = decide(&actor, &product(None), &admin());
        assert_eq!(decision, Decision::Deny(DenyReason::Unowned));
        assert!(!decision.is_allowed());
    }

    #[test]
    fn admin_label_match_is_case_sensitive() {
        let actor = Actor::new(5, RoleSet::parse_list("administrator"));
        assert!(!decide(&actor, &product(Some(7)), &admin()).is_allowed());
    }

    #[test]
    fn admin_label_is_configurable() {
        let actor = Actor::new(5, RoleSet::parse_list("Moderator"));
        let moderator = RoleLabel::new("Moderator").unwrap();
        assert!(decide(&actor, &product(Some(7)), &moderator).is_allowed());
        assert!(!decide(&actor, &product(Some(7)), &admin()).is_allowed());
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let actor = Actor::new(5, RoleSet::new());
        let resource = product(Some(7));
        let first = decide(&actor, &resource, &admin());
        let second = decide(&actor, &resource, &admin());
        assert_eq!(first, second);
    }
}
