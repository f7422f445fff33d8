//! HTTP adapter for the public polls pages.
//!
//! - `GET /polls/` - latest five published questions
//! - `GET /polls/:question_id/` - question with its choices
//! - `GET /polls/:question_id/results/` - vote counts
//! - `POST /polls/:question_id/vote/` - vote for one choice
//!
//! Every route also answers without the trailing slash.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::polls_router;
