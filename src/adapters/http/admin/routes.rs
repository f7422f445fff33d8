//! Axum router configuration for the admin site.

use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    add_choice, create_question, delete_choice, delete_question, get_question, list_questions,
    update_choice, update_question,
};
use crate::adapters::http::middleware::{admin_auth_middleware, AdminAuth};
use crate::adapters::http::state::PollsAppState;

/// Admin routes, relative to the `/admin` mount point.
pub fn admin_routes() -> Router<PollsAppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route(
            "/questions/:id",
            get(get_question).put(update_question).delete(delete_question),
        )
        .route("/questions/:id/choices", post(add_choice))
        .route("/choices/:id", put(update_choice).delete(delete_choice))
}

/// Create the admin router, mounted at `/admin` and guarded by `auth`.
///
/// The guard is a route layer, so unknown admin paths still 404.
pub fn admin_router(auth: AdminAuth) -> Router<PollsAppState> {
    Router::new().nest(
        "/admin",
        admin_routes().route_layer(middleware::from_fn_with_state(auth, admin_auth_middleware)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use secrecy::SecretString;

    use crate::adapters::clock::SystemClock;
    use crate::adapters::memory::InMemoryPollStore;

    #[test]
    fn admin_router_creates_router() {
        let store = Arc::new(InMemoryPollStore::new());
        let state = PollsAppState::new(store.clone(), store, Arc::new(SystemClock));
        let auth = AdminAuth::new(SecretString::new("admin-token-for-tests".to_string()));
        let _: Router<()> = admin_router(auth).with_state(state);
    }
}
