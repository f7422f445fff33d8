//! HTTP adapters - REST API implementations.
//!
//! - `polls` - public pages
//! - `admin` - token-guarded management endpoints
//! - `routes` - the top-level route table

pub mod admin;
pub mod error;
pub mod middleware;
pub mod polls;
pub mod routes;
pub mod state;

pub use error::{ErrorResponse, PollsApiError};
pub use middleware::AdminAuth;
pub use routes::{app_router, with_http_layers};
pub use state::PollsAppState;
