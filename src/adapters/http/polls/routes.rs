//! Axum router configuration for the polls pages.

use axum::routing::{get, post, MethodRouter};
use axum::Router;

use super::handlers::{detail, index, results, vote};
use crate::adapters::http::state::PollsAppState;

/// Registers `path` both with and without a trailing slash.
fn slash_tolerant(
    router: Router<PollsAppState>,
    path: &str,
    method_router: MethodRouter<PollsAppState>,
) -> Router<PollsAppState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{}/", path), method_router)
}

/// Create the polls router.
///
/// # Routes
/// - `GET /polls/` - index
/// - `GET /polls/:question_id/` - detail
/// - `GET /polls/:question_id/results/` - results
/// - `POST /polls/:question_id/vote/` - vote
pub fn polls_router() -> Router<PollsAppState> {
    let router = Router::new();
    let router = slash_tolerant(router, "/polls", get(index));
    let router = slash_tolerant(router, "/polls/:question_id", get(detail));
    let router = slash_tolerant(router, "/polls/:question_id/results", get(results));
    slash_tolerant(router, "/polls/:question_id/vote", post(vote))
}
