//! HTTP client initialization.
//!
//! Builds the `reqwest::Client` used by [`HttpPlaceSearch`] and resolves the
//! autocomplete endpoint URL from the configured API base.

use std::sync::Arc;

use reqwest::ClientBuilder;
use url::Url;

use crate::config::{AutocompleteOptions, AUTOCOMPLETE_PATH, HTTP_CONNECT_TIMEOUT};
use crate::error_handling::InitializationError;
use crate::search::HttpPlaceSearch;

/// Initializes the HTTP client with the configured request timeout.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(options: &AutocompleteOptions) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(options.request_timeout)
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .build()?;
    Ok(Arc::new(client))
}

/// Resolves `{api_url}/api/places/autocomplete`.
///
/// A trailing slash or an existing path prefix on the base is respected, so
/// `http://host/v2` resolves to `http://host/v2/api/places/autocomplete`.
pub fn autocomplete_endpoint(api_url: &str) -> Result<Url, InitializationError> {
    let invalid = |source| InitializationError::InvalidApiUrl {
        url: api_url.to_string(),
        source,
    };
    let mut base = Url::parse(api_url).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(AUTOCOMPLETE_PATH.trim_start_matches('/'))
        .map_err(invalid)
}

/// Initializes a ready-to-use HTTP search backend from widget options.
///
/// # Errors
///
/// Returns `InitializationError` if the client cannot be built or the API URL
/// is invalid.
pub fn init_search_client(
    options: &AutocompleteOptions,
) -> Result<HttpPlaceSearch, InitializationError> {
    let client = init_client(options)?;
    let endpoint = autocomplete_endpoint(&options.api_url)?;
    log::debug!("Places autocomplete endpoint: {}", endpoint);
    Ok(HttpPlaceSearch::new(client, endpoint))
}
