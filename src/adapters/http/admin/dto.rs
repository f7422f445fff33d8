//! Request and response DTOs for the admin site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::{QuestionDetail, QuestionSummary};
use crate::domain::foundation::{ChoiceId, QuestionId, Timestamp};
use crate::domain::polls::{Choice, Question};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub question_text: String,
    /// Defaults to now.
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestionRequest {
    #[serde(default)]
    pub question_text: Option<String>,
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateChoiceRequest {
    pub choice_text: String,
    #[serde(default)]
    pub votes: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChoiceRequest {
    #[serde(default)]
    pub choice_text: Option<String>,
    #[serde(default)]
    pub votes: Option<i32>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminQuestionResponse {
    pub id: QuestionId,
    pub question_text: String,
    pub pub_date: Timestamp,
}

impl From<&Question> for AdminQuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id(),
            question_text: question.question_text().to_string(),
            pub_date: *question.pub_date(),
        }
    }
}

/// One row of the change list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRowResponse {
    pub id: QuestionId,
    pub question_text: String,
    pub pub_date: Timestamp,
    pub was_published_recently: bool,
    pub choice_count: u64,
}

impl From<&QuestionSummary> for QuestionRowResponse {
    fn from(summary: &QuestionSummary) -> Self {
        Self {
            id: summary.question.id(),
            question_text: summary.question.question_text().to_string(),
            pub_date: *summary.question.pub_date(),
            was_published_recently: summary.was_published_recently,
            choice_count: summary.choice_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionRowResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminChoiceResponse {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub choice_text: String,
    pub votes: i32,
}

impl From<&Choice> for AdminChoiceResponse {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id(),
            question_id: choice.question_id(),
            choice_text: choice.choice_text().to_string(),
            votes: choice.votes(),
        }
    }
}

/// A question with its choices shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminQuestionDetailResponse {
    pub question: AdminQuestionResponse,
    pub choices: Vec<AdminChoiceResponse>,
}

impl From<&QuestionDetail> for AdminQuestionDetailResponse {
    fn from(detail: &QuestionDetail) -> Self {
        Self {
            question: AdminQuestionResponse::from(&detail.question),
            choices: detail.choices.iter().map(AdminChoiceResponse::from).collect(),
        }
    }
}
