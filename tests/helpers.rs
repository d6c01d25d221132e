// Shared test doubles for driving a widget without a places server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;

use places_autocomplete::{
    AutocompleteOptions, InputElement, PlaceSearch, PlaceType, PlacesAutocomplete, Prediction,
    SearchError, SearchRequest, SelectedLocation,
};

/// Search backend answering from a fixed list of labels.
///
/// Every request is recorded. Queries listed in `delays` answer after that
/// delay; everything else answers immediately.
pub struct ScriptedSearch {
    labels: Vec<String>,
    delays: HashMap<String, Duration>,
    fail: bool,
    requests: Mutex<Vec<SearchRequest>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl ScriptedSearch {
    pub fn new(labels: &[&str]) -> Arc<Self> {
        Arc::new(Self::build(labels, HashMap::new(), false))
    }

    pub fn with_delays(labels: &[&str], delays: &[(&str, Duration)]) -> Arc<Self> {
        let delays = delays
            .iter()
            .map(|(query, delay)| (query.to_string(), *delay))
            .collect();
        Arc::new(Self::build(labels, delays, false))
    }

    /// Backend whose every request fails with HTTP 503.
    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self::build(&[], HashMap::new(), true))
    }

    fn build(labels: &[&str], delays: HashMap<String, Duration>, fail: bool) -> Self {
        ScriptedSearch {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            delays,
            fail,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.query).collect()
    }
}

impl PlaceSearch for ScriptedSearch {
    fn autocomplete(
        &self,
        request: SearchRequest,
    ) -> BoxFuture<'static, Result<Vec<Prediction>, SearchError>> {
        let needle = request.query.to_lowercase();
        let predictions: Vec<Prediction> = self
            .labels
            .iter()
            .filter(|label| label.to_lowercase().contains(&needle))
            .map(|label| Prediction::from_label(label, PlaceType::City))
            .collect();
        let delay = self
            .delays
            .get(&request.query)
            .copied()
            .unwrap_or(Duration::ZERO);
        let fail = self.fail;
        self.requests.lock().unwrap().push(request);

        async move {
            tokio::time::sleep(delay).await;
            if fail {
                Err(SearchError::Status(503))
            } else {
                Ok(predictions)
            }
        }
        .boxed()
    }
}

/// Widget on a fresh `#destination` input that records every selection.
#[allow(dead_code)]
pub fn recording_widget(
    search: Arc<ScriptedSearch>,
    options: AutocompleteOptions,
) -> (PlacesAutocomplete, Arc<Mutex<Vec<SelectedLocation>>>) {
    let selected = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&selected);
    let widget = PlacesAutocomplete::new(InputElement::new("destination"), options, search)
        .on_select(move |location| sink.lock().unwrap().push(location.clone()));
    (widget, selected)
}

/// Types `text` one character at a time, `gap` apart.
#[allow(dead_code)]
pub async fn type_text(widget: &PlacesAutocomplete, text: &str, gap: Duration) {
    let mut typed = String::new();
    for c in text.chars() {
        typed.push(c);
        widget.handle_input(&typed);
        tokio::time::sleep(gap).await;
    }
}
