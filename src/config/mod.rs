//! Widget configuration and constants.
//!
//! This module provides:
//! - Default values (debounce delay, cache limits, blur timing, etc.)
//! - Library options for a widget instance
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{AutocompleteOptions, LogFormat, LogLevel, Opt};
