//! DeleteQuestionHandler - Command handler for removing a question.

use std::sync::Arc;

use crate::domain::foundation::QuestionId;
use crate::domain::polls::PollsError;
use crate::ports::QuestionRepository;

/// Command to delete a question and, with it, all of its choices.
#[derive(Debug, Clone, Copy)]
pub struct DeleteQuestionCommand {
    pub question_id: QuestionId,
}

/// Handler for deleting questions.
pub struct DeleteQuestionHandler {
    questions: Arc<dyn QuestionRepository>,
}

impl DeleteQuestionHandler {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    pub async fn handle(&self, cmd: DeleteQuestionCommand) -> Result<(), PollsError> {
        self.questions.delete(cmd.question_id).await?;
        tracing::info!(question_id = %cmd.question_id, "question deleted");
        Ok(())
    }
}
