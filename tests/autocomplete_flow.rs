//! End-to-end widget sessions driven through the public API.
//!
//! Each test plays a user: typing, arrowing, pressing Enter, clicking. The
//! places server is replaced by a scripted backend and time is paused, so the
//! debounce and blur timers run deterministically.

mod helpers;

use std::time::Duration;

use serde_json::json;

use helpers::{recording_widget, type_text, ScriptedSearch};
use places_autocomplete::{
    AutocompleteOptions, DropdownRow, DropdownState, FocusTarget, Key, SearchOutcome,
};

const DESTINATIONS: [&str; 4] = [
    "New York, NY, USA",
    "New York Mills, MN, USA",
    "Newark, NJ, USA",
    "York, United Kingdom",
];

#[tokio::test(start_paused = true)]
async fn test_type_arrow_and_enter_commits_prediction() {
    let search = ScriptedSearch::new(&DESTINATIONS);
    let (widget, selected) = recording_widget(search.clone(), AutocompleteOptions::default());

    type_text(&widget, "new y", Duration::from_millis(80)).await;
    widget.wait_idle().await;

    // One request for the whole burst
    assert_eq!(search.queries(), vec!["new y".to_string()]);
    let rows = widget.view().dropdown.expect("dropdown open");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].to_string(), "  1. 🏙️ New York (NY, USA)");

    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::ArrowDown);
    assert_eq!(widget.get_value(), "New York Mills, MN, USA");
    widget.key_down(Key::ArrowUp);
    widget.key_down(Key::Enter);

    let selected = selected.lock().unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(
        serde_json::to_value(&selected[0]).unwrap(),
        json!({
            "description": "New York, NY, USA",
            "main_text": "New York",
            "secondary_text": "NY, USA",
            "type": "city"
        })
    );
    assert_eq!(widget.get_value(), "New York, NY, USA");
    assert!(!widget.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_session_token_rotates_after_commit() {
    let search = ScriptedSearch::new(&DESTINATIONS);
    let (widget, _selected) = recording_widget(search.clone(), AutocompleteOptions::default());

    widget.handle_input("york");
    widget.wait_idle().await;
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::Enter);

    widget.handle_input("newa");
    widget.wait_idle().await;

    let requests = search.requests();
    assert_eq!(requests.len(), 2);
    assert_ne!(requests[0].session_token, requests[1].session_token);
    assert_eq!(requests[1].session_token, widget.session_token().as_str());
}

#[tokio::test(start_paused = true)]
async fn test_free_text_commit_serializes_custom_location() {
    let search = ScriptedSearch::new(&DESTINATIONS);
    let (widget, selected) = recording_widget(search, AutocompleteOptions::default());

    widget.handle_input("  Lake Tahoe ");
    widget.wait_idle().await;
    let rows = widget.view().dropdown.expect("dropdown open");
    assert_eq!(
        rows.last(),
        Some(&DropdownRow::FreeTextHint {
            message: "Press Enter to use \"Lake Tahoe\"".to_string()
        })
    );

    assert!(widget.key_down(Key::Enter));
    let selected = selected.lock().unwrap();
    assert_eq!(
        serde_json::to_value(&selected[0]).unwrap(),
        json!({
            "description": "Lake Tahoe",
            "main_text": "Lake Tahoe",
            "type": "custom",
            "isFreeText": true
        })
    );
    assert_eq!(widget.get_value(), "Lake Tahoe");
}

#[tokio::test(start_paused = true)]
async fn test_outage_falls_back_to_known_cities() {
    let (widget, selected) =
        recording_widget(ScriptedSearch::unavailable(), AutocompleteOptions::default());

    widget.handle_input("york usa");
    widget.wait_idle().await;

    let predictions = widget.predictions();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].description, "New York, NY, USA");
    assert_eq!(widget.stats().count(SearchOutcome::FallbackServed), 1);

    // Fallback rows are committed like any other
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::Enter);
    assert_eq!(selected.lock().unwrap()[0].main_text, "New York");
}

#[tokio::test(start_paused = true)]
async fn test_out_of_order_responses_keep_latest() {
    let search = ScriptedSearch::with_delays(
        &DESTINATIONS,
        &[("new", Duration::from_millis(800))],
    );
    let (widget, _selected) = recording_widget(search.clone(), AutocompleteOptions::default());

    widget.handle_input("new");
    tokio::time::sleep(Duration::from_millis(300)).await;
    widget.handle_input("newa");
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(search.queries(), vec!["new".to_string(), "newa".to_string()]);
    let predictions = widget.predictions();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].main_text, "Newark");
}

#[tokio::test(start_paused = true)]
async fn test_mouse_selection_survives_blur() {
    let search = ScriptedSearch::new(&DESTINATIONS);
    let (widget, selected) = recording_widget(search, AutocompleteOptions::default());

    widget.handle_input("york");
    widget.wait_idle().await;

    widget.pointer_enter();
    widget.pointer_down(2);
    widget.blur(FocusTarget::Outside);
    tokio::time::sleep(Duration::from_millis(700)).await;
    // Held press keeps the dropdown open past the blur delay
    assert!(widget.is_open());

    widget.pointer_up(Some(2));
    widget.click(2);

    let selected = selected.lock().unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].description, "York, United Kingdom");
}

#[tokio::test(start_paused = true)]
async fn test_clear_then_retype_reopens_from_cache() {
    let search = ScriptedSearch::new(&DESTINATIONS);
    let (widget, _selected) = recording_widget(search.clone(), AutocompleteOptions::default());

    widget.handle_input("york");
    widget.wait_idle().await;
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::Enter);
    widget.clear();
    assert_eq!(widget.dropdown_state(), DropdownState::Closed);

    widget.handle_input("york");
    widget.wait_idle().await;
    assert!(widget.is_open());
    assert_eq!(search.queries().len(), 1);
    assert_eq!(widget.stats().count(SearchOutcome::CacheHit), 1);
}
