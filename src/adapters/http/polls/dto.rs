//! Request and response DTOs for the polls pages.

use serde::{Deserialize, Serialize};

use crate::application::handlers::QuestionDetail;
use crate::domain::foundation::{ChoiceId, QuestionId, Timestamp};
use crate::domain::polls::{Choice, Question};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /polls/:question_id/vote/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteRequest {
    /// Absent when nothing was selected.
    #[serde(default)]
    pub choice_id: Option<ChoiceId>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub question_text: String,
    pub pub_date: Timestamp,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id(),
            question_text: question.question_text().to_string(),
            pub_date: *question.pub_date(),
        }
    }
}

/// Body of the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<QuestionResponse>,
}

/// A choice as offered on the voting form; counts stay hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOptionResponse {
    pub id: ChoiceId,
    pub choice_text: String,
}

impl From<&Choice> for ChoiceOptionResponse {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id(),
            choice_text: choice.choice_text().to_string(),
        }
    }
}

/// Body of the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub question: QuestionResponse,
    pub choices: Vec<ChoiceOptionResponse>,
}

impl From<&QuestionDetail> for DetailResponse {
    fn from(detail: &QuestionDetail) -> Self {
        Self {
            question: QuestionResponse::from(&detail.question),
            choices: detail.choices.iter().map(ChoiceOptionResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceResultResponse {
    pub id: ChoiceId,
    pub choice_text: String,
    pub votes: i32,
}

impl From<&Choice> for ChoiceResultResponse {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id(),
            choice_text: choice.choice_text().to_string(),
            votes: choice.votes(),
        }
    }
}

/// Body of the results page, also returned after a vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub question: QuestionResponse,
    pub choices: Vec<ChoiceResultResponse>,
    pub total_votes: i64,
}

impl From<&QuestionDetail> for ResultsResponse {
    fn from(detail: &QuestionDetail) -> Self {
        Self {
            question: QuestionResponse::from(&detail.question),
            choices: detail.choices.iter().map(ChoiceResultResponse::from).collect(),
            total_votes: detail.total_votes(),
        }
    }
}
