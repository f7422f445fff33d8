//! Choice command handlers (admin site).

mod add_choice;
mod delete_choice;
mod update_choice;

pub use add_choice::{AddChoiceCommand, AddChoiceHandler};
pub use delete_choice::{DeleteChoiceCommand, DeleteChoiceHandler};
pub use update_choice::{UpdateChoiceCommand, UpdateChoiceHandler};
