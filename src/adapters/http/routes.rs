//! Top-level route table.
//!
//! - `/admin/...` - admin site (bearer token)
//! - `/polls/...` - public polls pages
//! - `/health` - liveness probe
//!
//! Anything else falls through to axum's 404.

use axum::routing::get;
use axum::{Json, Router};
use http::{header, HeaderValue, Method};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::admin::admin_router;
use super::middleware::AdminAuth;
use super::polls::polls_router;
use super::state::PollsAppState;
use crate::config::ServerConfig;

/// GET /health - Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the application router without transport layers.
pub fn app_router(state: PollsAppState, admin_auth: AdminAuth) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(polls_router())
        .merge(admin_router(admin_auth))
        .with_state(state)
}

/// Wrap a router with tracing, request ids, timeouts and CORS.
pub fn with_http_layers(router: Router, server: &ServerConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(server.request_timeout()))
            .layer(cors_layer(&server.cors_origins_list())),
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
