//! Search provider adapters.
//!
//! Each module provides a struct implementing [`crate::engine::ProviderAdapter`]
//! that scrapes one provider's HTML results page through its extraction profile.

pub mod baidu;
pub mod bing;
pub mod duckduckgo;

pub use baidu::BaiduAdapter;
pub use bing::BingAdapter;
pub use duckduckgo::DuckDuckGoAdapter;
