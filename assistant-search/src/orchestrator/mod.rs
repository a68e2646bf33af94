//! Provider orchestration: sequential fallback across search providers.
//!
//! This module picks a primary provider for the requested engine and
//! walks the fallback chain until enough results are found or every
//! provider has been tried.

pub mod fallback;

pub use fallback::{FallbackOrchestrator, SUFFICIENT_RESULTS};
