// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Actor propagation from a trusted upstream authenticator.
//!
//! Token verification happens in front of this service (API gateway or auth
//! proxy). The upstream forwards the resolved identity as headers:
//!
//! - `x-actor-id`: numeric user ID
//! - `x-actor-roles`: comma-separated role labels (optional)
//!
//! This middleware turns them into an [`Actor`] in request extensions. It
//! never rejects: a request without a usable actor continues anonymously and
//! protected stages decide what to do with that.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .route("/api/products/{id}", put(update_product))
//!     .layer(axum::middleware::from_fn(forwarded_actor));
//! ```
//!
//! Only deploy this behind a proxy that strips client-supplied copies of
//! these headers.

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use super::{Actor, RoleSet};
use crate::models::ActorId;

/// Header carrying the authenticated user ID.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";

/// Header carrying the authenticated user's role labels.
pub const ACTOR_ROLES_HEADER: &str = "x-actor-roles";

/// Middleware that attaches the forwarded actor to the request.
pub async fn forwarded_actor(mut request: Request, next: Next) -> Response {
    if let Some(actor) = actor_from_headers(request.headers()) {
        request.extensions_mut().insert(actor);
    }
    next.run(request).await
}

/// Build an actor from forwarded headers.
///
/// Returns `None` when the ID header is missing or unparseable.
pub fn actor_from_headers(headers: &HeaderMap) -> Option<Actor> {
    let raw_id = headers.get(ACTOR_ID_HEADER)?;

    let id = match raw_id.to_str().ok().and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(id) => ActorId(id),
        None => {
            tracing::warn!("Ignoring malformed {} header", ACTOR_ID_HEADER);
            return None;
        }
    };

    let roles = headers
        .get(ACTOR_ROLES_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(RoleSet::parse_list)
        .unwrap_or_default();

    Some(Actor { id, roles })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::RoleLabel;
    use axum::{body::Body, http::Request as HttpRequest, routing::get, Extension, Router};
    use tower::ServiceExt;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, value.parse().unwrap());
        }
        map
    }

    #[test]
    fn parses_id_and_roles() {
        let actor = actor_from_headers(&headers(&[
            (ACTOR_ID_HEADER, "5"),
            (ACTOR_ROLES_HEADER, "Editor, Administrator"),
        ]))
        .expect("actor");

        assert_eq!(actor.id, ActorId(5));
        assert!(actor.has_role(&RoleLabel::new("Administrator").unwrap()));
        assert!(actor.has_role(&RoleLabel::new("Editor").unwrap()));
    }

    #[test]
    fn missing_roles_header_gives_empty_roles() {
        let actor = actor_from_headers(&headers(&[(ACTOR_ID_HEADER, "7")])).expect("actor");
        assert!(actor.roles.is_empty());
    }

    #[test]
    fn missing_or_malformed_id_gives_no_actor() {
        assert!(actor_from_headers(&HeaderMap::new()).is_none());
        assert!(actor_from_headers(&headers(&[(ACTOR_ID_HEADER, "abc")])).is_none());
        assert!(actor_from_headers(&headers(&[(ACTOR_ID_HEADER, "-1")])).is_none());
    }

    #[tokio::test]
    async fn middleware_inserts_actor_extension() {
        async fn whoami(actor: Option<Extension<Actor>>) -> String {
            match actor {
                Some(Extension(actor)) => actor.id.to_string(),
                None => "anonymous".to_string(),
            }
        }

        let app = Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn(forwarded_actor));

        let response = app
            .clone()
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header(ACTOR_ID_HEADER, "42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"42");

        let response = app
            .oneshot(HttpRequest::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"anonymous");
    }
}
