//! mysite - Polls application
//!
//! Questions with multiple-choice answers, a public site for browsing and
//! voting, and a token-guarded admin API for managing the polls.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
