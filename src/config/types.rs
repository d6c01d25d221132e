//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring a widget instance.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    BLUR_CLOSE_DELAY, CACHE_MAX_ENTRIES, CACHE_TTL, DEFAULT_API_URL, DEFAULT_DEBOUNCE_DELAY,
    DEFAULT_MAX_RESULTS, DEFAULT_MIN_CHARS, DEFAULT_PLACEHOLDER, DEFAULT_TYPES, HTTP_TIMEOUT,
    POINTER_RELEASE_DELAY,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Options for one autocomplete widget instance.
///
/// Every field has a default matching the behaviour of the trip planner's
/// location inputs, so callers usually override only a few of them.
///
/// # Examples
///
/// ```
/// use places_autocomplete::AutocompleteOptions;
/// use std::time::Duration;
///
/// let options = AutocompleteOptions {
///     types: "city".to_string(),
///     debounce_delay: Duration::from_millis(150),
///     ..Default::default()
/// };
/// assert_eq!(options.min_chars, 2);
/// ```
#[derive(Debug, Clone)]
pub struct AutocompleteOptions {
    /// Minimum trimmed query length before searching
    pub min_chars: usize,

    /// Quiet period after the last keystroke before a search runs
    pub debounce_delay: Duration,

    /// Maximum predictions requested and displayed
    pub max_results: usize,

    /// Comma-separated type filter (`city,state,country,place`)
    pub types: String,

    /// Placeholder text for the input
    pub placeholder: String,

    /// Whether Enter may commit the raw typed text
    pub allow_free_text: bool,

    /// Whether the clear button is rendered
    pub show_clear_button: bool,

    /// Base URL of the places API
    pub api_url: String,

    /// Per-request timeout for the places API
    pub request_timeout: Duration,

    /// Lifetime of a cached prediction list
    pub cache_ttl: Duration,

    /// Maximum number of cached queries
    pub cache_capacity: usize,

    /// Delay before a blur closes the dropdown
    pub blur_close_delay: Duration,

    /// Cool-down after a pointer release before the interaction ends
    pub pointer_release_delay: Duration,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
            max_results: DEFAULT_MAX_RESULTS,
            types: DEFAULT_TYPES.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            allow_free_text: true,
            show_clear_button: true,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: HTTP_TIMEOUT,
            cache_ttl: CACHE_TTL,
            cache_capacity: CACHE_MAX_ENTRIES,
            blur_close_delay: BLUR_CLOSE_DELAY,
            pointer_release_delay: POINTER_RELEASE_DELAY,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Show suggestions for "par"
/// places_autocomplete par
///
/// # Highlight the second suggestion and commit it
/// places_autocomplete "new y" --select 2
///
/// # Commit the typed text verbatim
/// places_autocomplete "Lake Tahoe" --free-text
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "places_autocomplete",
    about = "Types a query into a places autocomplete widget and prints the suggestions."
)]
pub struct Opt {
    /// Text to type into the widget
    pub query: String,

    /// Base URL of the places API (falls back to PLACES_API_URL, then localhost:3000)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Comma-separated type filter: city,state,country,place
    #[arg(long, default_value = DEFAULT_TYPES)]
    pub types: String,

    /// Maximum number of suggestions
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub limit: usize,

    /// Minimum query length before searching
    #[arg(long, default_value_t = DEFAULT_MIN_CHARS)]
    pub min_chars: usize,

    /// Debounce delay in milliseconds
    #[arg(long, default_value_t = 200)]
    pub debounce_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout_seconds: u64,

    /// Highlight the Nth suggestion (1-based) and commit it
    #[arg(long, conflicts_with = "free_text")]
    pub select: Option<usize>,

    /// Commit the typed text verbatim instead of a suggestion
    #[arg(long)]
    pub free_text: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for AutocompleteOptions {
    fn from(opt: &Opt) -> Self {
        Self {
            min_chars: opt.min_chars,
            debounce_delay: Duration::from_millis(opt.debounce_ms),
            max_results: opt.limit,
            types: opt.types.clone(),
            api_url: opt
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            request_timeout: Duration::from_secs(opt.timeout_seconds),
            ..Default::default()
        }
    }
}
