//! UpdateQuestionHandler - Command handler for editing a question.

use std::sync::Arc;

use crate::application::handlers::lookup::{reject_blank, require_question};
use crate::domain::foundation::{QuestionId, Timestamp};
use crate::domain::polls::{PollsError, Question};
use crate::ports::QuestionRepository;

/// Command to edit a question. `None` fields are left as they are.
#[derive(Debug, Clone)]
pub struct UpdateQuestionCommand {
    pub question_id: QuestionId,
    pub question_text: Option<String>,
    pub pub_date: Option<Timestamp>,
}

/// Handler for editing questions.
pub struct UpdateQuestionHandler {
    questions: Arc<dyn QuestionRepository>,
}

impl UpdateQuestionHandler {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    pub async fn handle(&self, cmd: UpdateQuestionCommand) -> Result<Question, PollsError> {
        let mut question = require_question(self.questions.as_ref(), cmd.question_id).await?;

        if let Some(text) = cmd.question_text {
            reject_blank("question_text", &text)?;
            question.update_text(text)?;
        }
        if let Some(pub_date) = cmd.pub_date {
            question.reschedule(pub_date);
        }

        self.questions.update(&question).await?;

        tracing::info!(question_id = %question.id(), "question updated");
        Ok(question)
    }
}
