//! myassistant: search comparison backend.
//!
//! Serves the [`assistant_search`] pipeline over HTTP for the assistant UI:
//! a query goes in, normalized results from the best-performing search
//! provider come out together with a short comparison against the AI
//! answer and phrases to highlight.
//!
//! # Architecture
//!
//! - **config**: TOML configuration with a `PORT` environment override
//! - **server**: axum router (`/api/search`, `/api/health`) and lifecycle
//! - **error**: process-level errors and their HTTP mapping

pub mod config;
pub mod error;
pub mod server;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use server::SearchServer;
