//! Bearer-token guard for the admin site.
//!
//! ```text
//! Request → admin_auth_middleware → compares token in constant time
//!                 ↓ match                      ↓ mismatch / missing
//!              handler                     401 Unauthorized
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use http::{header, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::adapters::http::error::ErrorResponse;

/// Holds the configured admin token.
#[derive(Clone)]
pub struct AdminAuth {
    token: Arc<SecretString>,
}

impl AdminAuth {
    pub fn new(token: SecretString) -> Self {
        Self {
            token: Arc::new(token),
        }
    }

    /// True if `candidate` equals the configured token. An empty configured
    /// token matches nothing.
    pub fn verify(&self, candidate: &str) -> bool {
        let expected = self.token.expose_secret().as_bytes();
        if expected.is_empty() {
            return false;
        }
        bool::from(expected.ct_eq(candidate.as_bytes()))
    }
}

impl std::fmt::Debug for AdminAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAuth").finish_non_exhaustive()
    }
}

/// Rejects requests without `Authorization: Bearer <admin token>`.
pub async fn admin_auth_middleware(
    State(auth): State<AdminAuth>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) if auth.verify(token) => next.run(request).await,
        Some(_) => {
            tracing::warn!(path = %request.uri().path(), "admin request with invalid token");
            unauthorized("Invalid admin token")
        }
        None => unauthorized("Admin authentication required"),
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(ErrorResponse::new("UNAUTHORIZED", message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn auth() -> AdminAuth {
        AdminAuth::new(SecretString::new("correct-horse-battery".to_string()))
    }

    fn app() -> Router {
        Router::new()
            .route("/secret", get(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(auth(), admin_auth_middleware))
    }

    async fn status_for(authorization: Option<&str>) -> StatusCode {
        let mut builder = http::Request::builder().uri("/secret");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn verify_matches_exact_token_only() {
        let auth = auth();
        assert!(auth.verify("correct-horse-battery"));
        assert!(!auth.verify("correct-horse-batter"));
        assert!(!auth.verify(""));
    }

    #[test]
    fn empty_configured_token_matches_nothing() {
        let auth = AdminAuth::new(SecretString::new(String::new()));
        assert!(!auth.verify(""));
    }

    #[test]
    fn debug_does_not_leak_token() {
        assert!(!format!("{:?}", auth()).contains("correct-horse"));
    }

    #[tokio::test]
    async fn valid_token_passes() {
        assert_eq!(
            status_for(Some("Bearer correct-horse-battery")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_token_is_unauthorized() {
        assert_eq!(
            status_for(Some("Bearer wrong")).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(Some("Basic correct-horse-battery")).await,
            StatusCode::UNAUTHORIZED
        );
    }
}
