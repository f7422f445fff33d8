//! HTTP handlers for the polls pages.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use super::dto::{DetailResponse, IndexResponse, QuestionResponse, ResultsResponse, VoteRequest};
use crate::adapters::http::error::{parse_question_id, PollsApiError};
use crate::adapters::http::state::PollsAppState;
use crate::application::handlers::{
    CastVoteCommand, GetPublishedQuestionQuery, LatestQuestionsQuery,
};

/// GET /polls/ - Latest published questions
pub async fn index(State(state): State<PollsAppState>) -> Result<impl IntoResponse, PollsApiError> {
    let questions = state
        .latest_questions_handler()
        .handle(LatestQuestionsQuery::default())
        .await?;

    Ok(Json(IndexResponse {
        latest_question_list: questions.iter().map(QuestionResponse::from).collect(),
    }))
}

/// GET /polls/:question_id/ - Question with its choices
pub async fn detail(
    State(state): State<PollsAppState>,
    Path(question_id): Path<String>,
) -> Result<impl IntoResponse, PollsApiError> {
    let detail = state
        .get_published_question_handler()
        .handle(GetPublishedQuestionQuery {
            question_id: parse_question_id(&question_id)?,
        })
        .await?;

    Ok(Json(DetailResponse::from(&detail)))
}

/// GET /polls/:question_id/results/ - Vote counts
pub async fn results(
    State(state): State<PollsAppState>,
    Path(question_id): Path<String>,
) -> Result<impl IntoResponse, PollsApiError> {
    let detail = state
        .get_published_question_handler()
        .handle(GetPublishedQuestionQuery {
            question_id: parse_question_id(&question_id)?,
        })
        .await?;

    Ok(Json(ResultsResponse::from(&detail)))
}

/// POST /polls/:question_id/vote/ - Vote for one choice
///
/// A missing or unreadable body counts as "nothing selected".
pub async fn vote(
    State(state): State<PollsAppState>,
    Path(question_id): Path<String>,
    payload: Option<Json<VoteRequest>>,
) -> Result<impl IntoResponse, PollsApiError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();

    let result = state
        .cast_vote_handler()
        .handle(CastVoteCommand {
            question_id: parse_question_id(&question_id)?,
            choice_id: request.choice_id,
        })
        .await?;

    Ok(Json(ResultsResponse::from(&result.results)))
}
