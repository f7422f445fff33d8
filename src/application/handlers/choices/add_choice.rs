//! AddChoiceHandler - Command handler for attaching a choice to a question.

use std::sync::Arc;

use crate::application::handlers::lookup::{reject_blank, require_question};
use crate::domain::foundation::QuestionId;
use crate::domain::polls::{Choice, NewChoice, PollsError};
use crate::ports::{ChoiceRepository, QuestionRepository};

/// Command to add a choice to a question.
#[derive(Debug, Clone)]
pub struct AddChoiceCommand {
    pub question_id: QuestionId,
    pub choice_text: String,
    /// Defaults to 0.
    pub votes: Option<i32>,
}

/// Handler for adding choices.
pub struct AddChoiceHandler {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
}

impl AddChoiceHandler {
    pub fn new(questions: Arc<dyn QuestionRepository>, choices: Arc<dyn ChoiceRepository>) -> Self {
        Self { questions, choices }
    }

    pub async fn handle(&self, cmd: AddChoiceCommand) -> Result<Choice, PollsError> {
        reject_blank("choice_text", &cmd.choice_text)?;
        require_question(self.questions.as_ref(), cmd.question_id).await?;

        let new = NewChoice::new(cmd.question_id, cmd.choice_text, cmd.votes)?;
        let choice = self.choices.insert(new).await?;

        tracing::info!(
            question_id = %choice.question_id(),
            choice_id = %choice.id(),
            "choice added"
        );

        Ok(choice)
    }
}
