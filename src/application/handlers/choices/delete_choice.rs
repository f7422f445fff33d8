//! DeleteChoiceHandler - Command handler for removing a choice.

use std::sync::Arc;

use crate::domain::foundation::ChoiceId;
use crate::domain::polls::PollsError;
use crate::ports::ChoiceRepository;

/// Command to delete a choice.
#[derive(Debug, Clone, Copy)]
pub struct DeleteChoiceCommand {
    pub choice_id: ChoiceId,
}

/// Handler for deleting choices.
pub struct DeleteChoiceHandler {
    choices: Arc<dyn ChoiceRepository>,
}

impl DeleteChoiceHandler {
    pub fn new(choices: Arc<dyn ChoiceRepository>) -> Self {
        Self { choices }
    }

    pub async fn handle(&self, cmd: DeleteChoiceCommand) -> Result<(), PollsError> {
        self.choices.delete(cmd.choice_id).await?;
        tracing::info!(choice_id = %cmd.choice_id, "choice deleted");
        Ok(())
    }
}
