//! Offline fallback suggestions.
//!
//! Used whenever the places endpoint fails, so a network problem never leaves
//! the user with a dead dropdown.

use crate::config::{FALLBACK_DEFAULT_COUNT, FALLBACK_MAX_RESULTS};
use crate::models::{PlaceType, Prediction};

/// Well-known destinations offered when the live search is unavailable.
pub const FALLBACK_CITIES: [&str; 20] = [
    "New York, NY, USA",
    "Los Angeles, CA, USA",
    "Chicago, IL, USA",
    "San Francisco, CA, USA",
    "Miami, FL, USA",
    "Las Vegas, NV, USA",
    "Seattle, WA, USA",
    "Boston, MA, USA",
    "Denver, CO, USA",
    "Austin, TX, USA",
    "London, United Kingdom",
    "Paris, France",
    "Tokyo, Japan",
    "Rome, Italy",
    "Barcelona, Spain",
    "Amsterdam, Netherlands",
    "Sydney, Australia",
    "Dubai, United Arab Emirates",
    "Toronto, Canada",
    "Mexico City, Mexico",
];

/// Returns fallback predictions for `query`.
///
/// Matching runs in two passes: a case-insensitive substring match on the
/// full label, then, only if that found nothing, a looser match where every
/// query term must prefix some whitespace/comma-delimited word of the label.
/// An empty query yields the first five entries.
pub fn fallback_suggestions(query: &str) -> Vec<Prediction> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return FALLBACK_CITIES
            .iter()
            .take(FALLBACK_DEFAULT_COUNT)
            .map(|label| Prediction::from_label(label, PlaceType::City))
            .collect();
    }

    let mut matches: Vec<&str> = FALLBACK_CITIES
        .iter()
        .copied()
        .filter(|label| label.to_lowercase().contains(&needle))
        .collect();

    if matches.is_empty() {
        matches = FALLBACK_CITIES
            .iter()
            .copied()
            .filter(|label| terms_prefix_words(&needle, label))
            .collect();
    }

    matches
        .into_iter()
        .take(FALLBACK_MAX_RESULTS)
        .map(|label| Prediction::from_label(label, PlaceType::City))
        .collect()
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
}

fn terms_prefix_words(needle: &str, label: &str) -> bool {
    let label = label.to_lowercase();
    let label_words: Vec<&str> = words(&label).collect();
    let mut terms = words(needle).peekable();
    terms.peek().is_some()
        && terms.all(|term| label_words.iter().any(|word| word.starts_with(term)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(predictions: &[Prediction]) -> Vec<&str> {
        predictions.iter().map(|p| p.description.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_first_five() {
        let result = fallback_suggestions("   ");
        assert_eq!(
            labels(&result),
            vec![
                "New York, NY, USA",
                "Los Angeles, CA, USA",
                "Chicago, IL, USA",
                "San Francisco, CA, USA",
                "Miami, FL, USA",
            ]
        );
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let result = fallback_suggestions("PAR");
        assert_eq!(labels(&result), vec!["Paris, France"]);
        assert_eq!(result[0].main_text, "Paris");
        assert_eq!(result[0].secondary_text.as_deref(), Some("France"));
        assert_eq!(result[0].place_type, PlaceType::City);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        let result = fallback_suggestions("ork");
        assert_eq!(labels(&result), vec!["New York, NY, USA"]);
    }

    #[test]
    fn test_word_prefix_pass_when_substring_fails() {
        // "york usa" is not a substring, but both terms start words of the label
        let result = fallback_suggestions("york usa");
        assert_eq!(labels(&result), vec!["New York, NY, USA"]);
    }

    #[test]
    fn test_results_capped_at_eight() {
        let result = fallback_suggestions("usa");
        assert_eq!(result.len(), 8);
        assert_eq!(result[0].description, "New York, NY, USA");
    }

    #[test]
    fn test_no_match() {
        assert!(fallback_suggestions("Lake Tahoe").is_empty());
    }
}
