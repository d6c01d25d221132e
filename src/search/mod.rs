//! Places search backends.
//!
//! The widget never talks to the network directly: it is handed a
//! [`PlaceSearch`] implementation, which makes it testable without a server and
//! lets callers swap in other providers.

mod http;

pub use http::{parse_predictions, HttpPlaceSearch};

use futures::future::BoxFuture;

use crate::error_handling::SearchError;
use crate::models::Prediction;

/// Parameters of one autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Trimmed query text
    pub query: String,
    /// Current search session token
    pub session_token: String,
    /// Comma-separated type filter
    pub types: String,
    /// Maximum number of predictions wanted
    pub limit: usize,
}

/// Source of autocomplete predictions.
///
/// Returned futures must be `'static` because the widget runs each search as
/// its own abortable task.
pub trait PlaceSearch: Send + Sync + 'static {
    fn autocomplete(
        &self,
        request: SearchRequest,
    ) -> BoxFuture<'static, Result<Vec<Prediction>, SearchError>>;
}
