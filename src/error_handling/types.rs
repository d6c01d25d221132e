//! Error type definitions.
//!
//! This module defines the error types and search outcome categories used
//! throughout the crate.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured API base URL could not be parsed.
    #[error("Invalid places API URL '{url}': {source}")]
    InvalidApiUrl {
        /// The rejected URL
        url: String,
        /// Parse failure
        source: url::ParseError,
    },
}

/// Failure of a single autocomplete search.
///
/// The widget never surfaces these to the user: every variant degrades to
/// fallback suggestions. They exist so the search seam can report *why* a
/// search failed for logging and statistics.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("Places request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The endpoint answered with something other than 200.
    #[error("Places endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not JSON or had no `predictions` field.
    #[error("Malformed places response: {0}")]
    MalformedBody(String),
}

impl SearchError {
    /// True when the failure was a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, SearchError::Http(e) if e.is_timeout())
    }
}

/// Construction-time errors for mounting a widget onto a document.
///
/// These are programmer errors with no recovery path: the caller pointed the
/// widget at something that is not there.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WidgetError {
    /// Only `#id` selectors are supported.
    #[error("Invalid selector '{0}': expected '#id'")]
    InvalidSelector(String),

    /// No node with the selected id exists.
    #[error("No element matches '{0}'")]
    ElementNotFound(String),

    /// The node exists but is not an input element.
    #[error("Element '{0}' is not an input")]
    NotAnInput(String),

    /// Another widget already holds the input.
    #[error("Element '{0}' already has an autocomplete attached")]
    AlreadyMounted(String),

    /// The widget's mount point disappeared before it was destroyed.
    #[error("Mount point for '{0}' is missing from the document")]
    MountPointMissing(String),
}

/// Outcome categories recorded for every search the widget runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SearchOutcome {
    /// Served from the result cache without a request
    CacheHit,
    /// Network request returned predictions
    NetworkSuccess,
    /// Network request failed (any reason)
    NetworkFailure,
    /// Request timed out (also counted as a failure)
    NetworkTimeout,
    /// Fallback suggestions were shown
    FallbackServed,
    /// Request superseded by a newer search before its response was applied
    StaleDiscarded,
}
