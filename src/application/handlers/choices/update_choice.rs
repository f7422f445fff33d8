//! UpdateChoiceHandler - Command handler for editing a choice.

use std::sync::Arc;

use crate::application::handlers::lookup::reject_blank;
use crate::domain::foundation::ChoiceId;
use crate::domain::polls::{Choice, ChoiceEdit, PollsError};
use crate::ports::ChoiceRepository;

/// Command to edit a choice. `None` fields are left as they are.
#[derive(Debug, Clone)]
pub struct UpdateChoiceCommand {
    pub choice_id: ChoiceId,
    pub choice_text: Option<String>,
    pub votes: Option<i32>,
}

/// Handler for editing choices.
///
/// Only the supplied fields are written, in one repository call, so votes
/// cast while an admin edits the text are kept.
pub struct UpdateChoiceHandler {
    choices: Arc<dyn ChoiceRepository>,
}

impl UpdateChoiceHandler {
    pub fn new(choices: Arc<dyn ChoiceRepository>) -> Self {
        Self { choices }
    }

    pub async fn handle(&self, cmd: UpdateChoiceCommand) -> Result<Choice, PollsError> {
        if let Some(text) = &cmd.choice_text {
            reject_blank("choice_text", text)?;
        }
        let edit = ChoiceEdit::new(cmd.choice_text, cmd.votes)?;

        let choice = self.choices.apply_edit(cmd.choice_id, &edit).await?;

        tracing::info!(choice_id = %choice.id(), votes = choice.votes(), "choice updated");
        Ok(choice)
    }
}
