//! Error responses shared by the polls and admin endpoints.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{ChoiceId, DomainError, ErrorCode, QuestionId};
use crate::domain::polls::PollsError;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error type that converts polls errors to HTTP responses.
#[derive(Debug)]
pub enum PollsApiError {
    /// Failure reported by a command or query handler.
    Polls(PollsError),
    /// Path segment that is not an integer id, so it names no row.
    UnknownId { code: ErrorCode, message: String },
    /// Body missing, not JSON, or lacking a required field.
    InvalidBody(String),
}

impl From<PollsError> for PollsApiError {
    fn from(err: PollsError) -> Self {
        Self::Polls(err)
    }
}

impl From<DomainError> for PollsApiError {
    fn from(err: DomainError) -> Self {
        Self::Polls(PollsError::from(err))
    }
}

impl From<JsonRejection> for PollsApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

/// Parses a `:question_id` path segment; anything but an integer is a 404.
pub fn parse_question_id(raw: &str) -> Result<QuestionId, PollsApiError> {
    raw.parse().map_err(|_| PollsApiError::UnknownId {
        code: ErrorCode::QuestionNotFound,
        message: format!("Question not found: {}", raw),
    })
}

/// Parses a `:choice_id` path segment; anything but an integer is a 404.
pub fn parse_choice_id(raw: &str) -> Result<ChoiceId, PollsApiError> {
    raw.parse().map_err(|_| PollsApiError::UnknownId {
        code: ErrorCode::ChoiceNotFound,
        message: format!("Choice not found: {}", raw),
    })
}

impl PollsApiError {
    fn status(&self) -> StatusCode {
        match self {
            PollsApiError::Polls(PollsError::QuestionNotFound(_))
            | PollsApiError::Polls(PollsError::ChoiceNotFound(_))
            | PollsApiError::UnknownId { .. } => StatusCode::NOT_FOUND,
            PollsApiError::Polls(PollsError::NoChoiceSelected)
            | PollsApiError::Polls(PollsError::ValidationFailed { .. })
            | PollsApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            PollsApiError::Polls(PollsError::Infrastructure(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PollsApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            PollsApiError::Polls(PollsError::Infrastructure(detail)) => {
                tracing::error!(error = %detail, "request failed");
                ErrorResponse::new(ErrorCode::InternalError.to_string(), "Internal server error")
            }
            PollsApiError::Polls(err) => ErrorResponse::new(err.code().to_string(), err.to_string()),
            PollsApiError::UnknownId { code, message } => {
                ErrorResponse::new(code.to_string(), message)
            }
            PollsApiError::InvalidBody(message) => {
                ErrorResponse::new(ErrorCode::ValidationFailed.to_string(), message)
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: PollsError) -> StatusCode {
        PollsApiError::from(err).into_response().status()
    }

    #[test]
    fn not_found_errors_map_to_404() {
        assert_eq!(
            status_of(PollsError::QuestionNotFound(QuestionId::new(1))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(PollsError::ChoiceNotFound(ChoiceId::new(1))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(status_of(PollsError::NoChoiceSelected), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(PollsError::validation("question_text", "too long")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        assert_eq!(
            status_of(PollsError::infrastructure("connection reset")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_response_serializes_code_and_message() {
        let body = ErrorResponse::new("VALIDATION_FAILED", "You didn't select a choice.");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "VALIDATION_FAILED",
                "message": "You didn't select a choice."
            })
        );
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        assert_eq!(parse_question_id("12").unwrap(), QuestionId::new(12));
        assert_eq!(parse_choice_id("7").unwrap(), ChoiceId::new(7));

        let err = parse_question_id("abc").unwrap_err();
        assert!(matches!(
            &err,
            PollsApiError::UnknownId { code: ErrorCode::QuestionNotFound, message }
                if message == "Question not found: abc"
        ));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = parse_choice_id("1.5").unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_body_maps_to_400() {
        let err = PollsApiError::InvalidBody("missing field `question_text`".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
