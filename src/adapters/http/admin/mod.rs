//! HTTP adapter for the admin site.
//!
//! Every route requires `Authorization: Bearer <admin token>`:
//! - `GET /admin/questions` - change list
//! - `POST /admin/questions` - add a question
//! - `GET /admin/questions/:id` - question with its choices
//! - `PUT /admin/questions/:id` - edit a question
//! - `DELETE /admin/questions/:id` - delete a question and its choices
//! - `POST /admin/questions/:id/choices` - add a choice
//! - `PUT /admin/choices/:id` - edit a choice
//! - `DELETE /admin/choices/:id` - delete a choice

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::admin_router;
