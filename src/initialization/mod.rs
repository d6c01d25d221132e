//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON)
//! - HTTP client and the places search backend

mod client;
mod logger;

// Re-export public API
pub use client::{autocomplete_endpoint, init_client, init_search_client};
pub use logger::init_logger_with;
