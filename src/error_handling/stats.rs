//! Search statistics tracking.
//!
//! Counts how each search of a widget instance was resolved, so degraded
//! behaviour (fallbacks, stale responses) is observable without surfacing
//! errors to the user.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::SearchOutcome;

/// Thread-safe search statistics tracker.
///
/// Every [`SearchOutcome`] is initialized to zero on creation, so lookups never
/// miss.
#[derive(Debug)]
pub struct SearchStats {
    outcomes: HashMap<SearchOutcome, AtomicUsize>,
}

impl SearchStats {
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in SearchOutcome::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }
        SearchStats { outcomes }
    }

    /// Increment an outcome counter.
    pub fn record(&self, outcome: SearchOutcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record {:?} which is not in the stats map. \
                 This indicates a bug in SearchStats initialization.",
                outcome
            );
        }
    }

    /// Get the count for an outcome.
    pub fn count(&self, outcome: SearchOutcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Number of requests that actually reached the network layer.
    pub fn network_requests(&self) -> usize {
        self.count(SearchOutcome::NetworkSuccess)
            + self.count(SearchOutcome::NetworkFailure)
            + self.count(SearchOutcome::StaleDiscarded)
    }

    /// Sum over all outcome counters.
    pub fn total(&self) -> usize {
        SearchOutcome::iter().map(|o| self.count(o)).sum()
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}
