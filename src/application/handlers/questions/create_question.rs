//! CreateQuestionHandler - Command handler for adding a question.

use std::sync::Arc;

use crate::application::handlers::lookup::reject_blank;
use crate::domain::foundation::Timestamp;
use crate::domain::polls::{NewQuestion, PollsError, Question};
use crate::ports::{Clock, QuestionRepository};

/// Command to create a question.
#[derive(Debug, Clone)]
pub struct CreateQuestionCommand {
    pub question_text: String,
    /// Defaults to the current instant.
    pub pub_date: Option<Timestamp>,
}

/// Handler for creating questions.
pub struct CreateQuestionHandler {
    questions: Arc<dyn QuestionRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateQuestionHandler {
    pub fn new(questions: Arc<dyn QuestionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { questions, clock }
    }

    pub async fn handle(&self, cmd: CreateQuestionCommand) -> Result<Question, PollsError> {
        reject_blank("question_text", &cmd.question_text)?;

        let pub_date = cmd.pub_date.unwrap_or_else(|| self.clock.now());
        let new = NewQuestion::new(cmd.question_text, pub_date)?;
        let question = self.questions.insert(new).await?;

        tracing::info!(
            question_id = %question.id(),
            pub_date = %question.pub_date().to_rfc3339(),
            "question created"
        );

        Ok(question)
    }
}
