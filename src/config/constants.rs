//! Configuration constants.
//!
//! This module defines the defaults used by the autocomplete widget, its
//! result cache, the fallback engine and the HTTP search client.

use std::time::Duration;

// Input handling
/// Minimum trimmed query length before a search is dispatched
pub const DEFAULT_MIN_CHARS: usize = 2;
/// Quiet period after the last keystroke before a search runs (trailing-edge debounce)
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(200);
/// Maximum number of predictions requested from the API and shown in the dropdown
pub const DEFAULT_MAX_RESULTS: usize = 8;
/// Type filter sent with every search
pub const DEFAULT_TYPES: &str = "city,state,country";
/// Placeholder text for the wrapped input
pub const DEFAULT_PLACEHOLDER: &str = "Search for a city or place";

// Result cache
/// How long a cached prediction list stays valid
pub const CACHE_TTL: Duration = Duration::from_secs(60);
/// Maximum number of cached queries; the oldest-inserted key is evicted past this
pub const CACHE_MAX_ENTRIES: usize = 50;

// Blur / pointer reconciliation
/// Delay before a blur actually closes the dropdown (re-checked when it fires)
pub const BLUR_CLOSE_DELAY: Duration = Duration::from_millis(500);
/// Cool-down after pointer up/leave before the pointer interaction counts as over
pub const POINTER_RELEASE_DELAY: Duration = Duration::from_millis(100);

// Fallback suggestions
/// Maximum number of fallback suggestions returned for a query
pub const FALLBACK_MAX_RESULTS: usize = 8;
/// Number of fallback suggestions returned for an empty query
pub const FALLBACK_DEFAULT_COUNT: usize = 5;

// HTTP search
/// Path of the autocomplete endpoint, relative to the API base URL
pub const AUTOCOMPLETE_PATH: &str = "/api/places/autocomplete";
/// API base URL used when neither `--api-url` nor `PLACES_API_URL` is set
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "PLACES_API_URL";
/// Per-request timeout for the autocomplete endpoint
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(5);
/// TCP connect timeout for the autocomplete endpoint
pub const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

// Dropdown messages
pub const NO_RESULTS_MESSAGE: &str = "No results found";
