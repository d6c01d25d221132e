//! Error handling and search statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, search, widget mounting)
//! - Search outcome categories and their counters
//!
//! Search errors never escape the widget; they are logged, counted, and
//! answered with fallback suggestions.

mod stats;
mod types;

// Re-export public API
pub use stats::SearchStats;
pub use types::{InitializationError, SearchError, SearchOutcome, WidgetError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_search_stats_initialization() {
        let stats = SearchStats::new();
        for outcome in SearchOutcome::iter() {
            assert_eq!(stats.count(outcome), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_search_stats_record() {
        let stats = SearchStats::new();
        stats.record(SearchOutcome::CacheHit);
        stats.record(SearchOutcome::CacheHit);
        stats.record(SearchOutcome::FallbackServed);
        assert_eq!(stats.count(SearchOutcome::CacheHit), 2);
        assert_eq!(stats.count(SearchOutcome::FallbackServed), 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_network_requests_excludes_cache_hits() {
        let stats = SearchStats::new();
        stats.record(SearchOutcome::CacheHit);
        stats.record(SearchOutcome::NetworkSuccess);
        stats.record(SearchOutcome::NetworkFailure);
        stats.record(SearchOutcome::StaleDiscarded);
        assert_eq!(stats.network_requests(), 3);
    }

    #[test]
    fn test_search_error_messages() {
        assert_eq!(
            SearchError::Status(503).to_string(),
            "Places endpoint returned HTTP 503"
        );
        assert!(SearchError::MalformedBody("missing predictions".into())
            .to_string()
            .contains("missing predictions"));
        assert!(!SearchError::Status(500).is_timeout());
    }

    #[test]
    fn test_widget_error_messages() {
        assert_eq!(
            WidgetError::InvalidSelector("destination".into()).to_string(),
            "Invalid selector 'destination': expected '#id'"
        );
        assert_eq!(
            WidgetError::ElementNotFound("#missing".into()).to_string(),
            "No element matches '#missing'"
        );
    }
}
