//! HTTP middleware for axum.
//!
//! - `admin_auth` - bearer-token guard for the admin site

pub mod admin_auth;

pub use admin_auth::{admin_auth_middleware, AdminAuth};
