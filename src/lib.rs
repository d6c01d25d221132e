//! places_autocomplete library: a debounced, cached places autocomplete widget
//!
//! This library provides a headless autocomplete controller for a location
//! input. It debounces typing, caches results per query, talks to a places
//! autocomplete endpoint through a pluggable [`PlaceSearch`] backend, falls back
//! to a fixed list of well-known cities when the endpoint fails, and reports
//! the user's choice as a [`SelectedLocation`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use places_autocomplete::initialization::init_search_client;
//! use places_autocomplete::{AutocompleteOptions, InputElement, Key, PlacesAutocomplete};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = AutocompleteOptions {
//!     api_url: "http://localhost:3000".to_string(),
//!     ..Default::default()
//! };
//! let search = Arc::new(init_search_client(&options)?);
//!
//! let widget = PlacesAutocomplete::new(InputElement::new("destination"), options, search)
//!     .on_select(|location| println!("Selected {}", location.description));
//!
//! widget.handle_input("paris");
//! widget.wait_idle().await;
//! for row in widget.view().dropdown.unwrap_or_default() {
//!     println!("{}", row);
//! }
//! widget.key_down(Key::ArrowDown);
//! widget.key_down(Key::Enter);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure widgets are created and driven from within an async context.

mod cache;
pub mod config;
mod error_handling;
mod fallback;
pub mod initialization;
mod models;
mod search;
mod session;
mod view;
mod widget;

// Re-export public API
pub use cache::ResultCache;
pub use config::{AutocompleteOptions, LogFormat, LogLevel, Opt};
pub use error_handling::{
    InitializationError, SearchError, SearchOutcome, SearchStats, WidgetError,
};
pub use fallback::{fallback_suggestions, FALLBACK_CITIES};
pub use models::{PlaceType, Prediction, SelectedLocation};
pub use search::{parse_predictions, HttpPlaceSearch, PlaceSearch, SearchRequest};
pub use session::SessionToken;
pub use view::{
    free_text_hint, icon_for, option_id, render, Document, DropdownRow, InputElement,
    InputView, Node, WidgetView,
};
pub use widget::{
    Direction, DropdownState, EmptyNotice, FocusTarget, Key, PlacesAutocomplete, Point,
    PointerPhase, PointerTracker, Rect,
};
