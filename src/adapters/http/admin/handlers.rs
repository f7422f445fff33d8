//! HTTP handlers for the admin site.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{
    AdminChoiceResponse, AdminQuestionDetailResponse, AdminQuestionResponse,
    CreateChoiceRequest, CreateQuestionRequest, QuestionListResponse, QuestionRowResponse,
    UpdateChoiceRequest, UpdateQuestionRequest,
};
use crate::adapters::http::error::{parse_choice_id, parse_question_id, PollsApiError};
use crate::adapters::http::state::PollsAppState;
use crate::application::handlers::{
    AddChoiceCommand, CreateQuestionCommand, DeleteChoiceCommand, DeleteQuestionCommand,
    GetQuestionQuery, UpdateChoiceCommand, UpdateQuestionCommand,
};
use crate::domain::foundation::Timestamp;

// ════════════════════════════════════════════════════════════════════════════════
// Questions
// ════════════════════════════════════════════════════════════════════════════════

/// GET /admin/questions - Change list, future questions included
pub async fn list_questions(
    State(state): State<PollsAppState>,
) -> Result<impl IntoResponse, PollsApiError> {
    let summaries = state.list_questions_handler().handle().await?;

    Ok(Json(QuestionListResponse {
        questions: summaries.iter().map(QuestionRowResponse::from).collect(),
    }))
}

/// POST /admin/questions - Add a question
pub async fn create_question(
    State(state): State<PollsAppState>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PollsApiError> {
    let Json(request) = body?;

    let question = state
        .create_question_handler()
        .handle(CreateQuestionCommand {
            question_text: request.question_text,
            pub_date: request.pub_date.map(Timestamp::from_datetime),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AdminQuestionResponse::from(&question))))
}

/// GET /admin/questions/:id - Question with its choices
pub async fn get_question(
    State(state): State<PollsAppState>,
    Path(question_id): Path<String>,
) -> Result<impl IntoResponse, PollsApiError> {
    let detail = state
        .get_question_handler()
        .handle(GetQuestionQuery {
            question_id: parse_question_id(&question_id)?,
        })
        .await?;

    Ok(Json(AdminQuestionDetailResponse::from(&detail)))
}

/// PUT /admin/questions/:id - Edit a question
pub async fn update_question(
    State(state): State<PollsAppState>,
    Path(question_id): Path<String>,
    body: Result<Json<UpdateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PollsApiError> {
    let Json(request) = body?;

    let question = state
        .update_question_handler()
        .handle(UpdateQuestionCommand {
            question_id: parse_question_id(&question_id)?,
            question_text: request.question_text,
            pub_date: request.pub_date.map(Timestamp::from_datetime),
        })
        .await?;

    Ok(Json(AdminQuestionResponse::from(&question)))
}

/// DELETE /admin/questions/:id - Delete a question and its choices
pub async fn delete_question(
    State(state): State<PollsAppState>,
    Path(question_id): Path<String>,
) -> Result<impl IntoResponse, PollsApiError> {
    state
        .delete_question_handler()
        .handle(DeleteQuestionCommand {
            question_id: parse_question_id(&question_id)?,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Choices
// ════════════════════════════════════════════════════════════════════════════════

/// POST /admin/questions/:id/choices - Add a choice
pub async fn add_choice(
    State(state): State<PollsAppState>,
    Path(question_id): Path<String>,
    body: Result<Json<CreateChoiceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PollsApiError> {
    let Json(request) = body?;

    let choice = state
        .add_choice_handler()
        .handle(AddChoiceCommand {
            question_id: parse_question_id(&question_id)?,
            choice_text: request.choice_text,
            votes: request.votes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AdminChoiceResponse::from(&choice))))
}

/// PUT /admin/choices/:id - Edit a choice
pub async fn update_choice(
    State(state): State<PollsAppState>,
    Path(choice_id): Path<String>,
    body: Result<Json<UpdateChoiceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PollsApiError> {
    let Json(request) = body?;

    let choice = state
        .update_choice_handler()
        .handle(UpdateChoiceCommand {
            choice_id: parse_choice_id(&choice_id)?,
            choice_text: request.choice_text,
            votes: request.votes,
        })
        .await?;

    Ok(Json(AdminChoiceResponse::from(&choice)))
}

/// DELETE /admin/choices/:id - Delete a choice
pub async fn delete_choice(
    State(state): State<PollsAppState>,
    Path(choice_id): Path<String>,
) -> Result<impl IntoResponse, PollsApiError> {
    state
        .delete_choice_handler()
        .handle(DeleteChoiceCommand {
            choice_id: parse_choice_id(&choice_id)?,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
