//! Question command and query handlers (admin site).

mod create_question;
mod delete_question;
mod get_question;
mod list_questions;
mod update_question;

pub use create_question::{CreateQuestionCommand, CreateQuestionHandler};
pub use delete_question::{DeleteQuestionCommand, DeleteQuestionHandler};
pub use get_question::{GetQuestionHandler, GetQuestionQuery};
pub use list_questions::ListQuestionsHandler;
pub use update_question::{UpdateQuestionCommand, UpdateQuestionHandler};
