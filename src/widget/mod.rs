//! The places autocomplete widget.
//!
//! [`PlacesAutocomplete`] owns one input's search session: it debounces
//! keystrokes, serves repeated queries from its cache, calls the injected
//! [`PlaceSearch`] backend, falls back to offline suggestions on failure, and
//! turns keyboard or pointer choices into a single [`SelectedLocation`]
//! delivered to `on_select`.
//!
//! All state sits behind one mutex that is never held across an `.await`.
//! Timers and requests are Tokio tasks that are aborted and replaced rather
//! than stacked, and every task is cancelled when the widget is destroyed.
//!
//! The widget requires a Tokio runtime: typing, blurring and pointer release
//! all schedule tasks.

mod dropdown;
mod interaction;

pub use dropdown::{Direction, DropdownState, EmptyNotice};
pub use interaction::{Point, PointerPhase, PointerTracker, Rect};

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;
use tokio::task::AbortHandle;
use tokio_util::sync::CancellationToken;

use crate::cache::ResultCache;
use crate::config::AutocompleteOptions;
use crate::error_handling::{SearchError, SearchOutcome, SearchStats, WidgetError};
use crate::fallback::fallback_suggestions;
use crate::models::{Prediction, SelectedLocation};
use crate::search::{PlaceSearch, SearchRequest};
use crate::session::SessionToken;
use crate::view::{render, Document, InputElement, WidgetView};

/// Keys the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Tab,
}

/// Where focus went when the input blurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// An element inside the dropdown
    Dropdown,
    /// Anywhere else (or nowhere)
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Input,
    Dropdown,
    Outside,
}

type SelectCallback = Arc<dyn Fn(&SelectedLocation) + Send + Sync>;
type ClearCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Default)]
struct Callbacks {
    on_select: Option<SelectCallback>,
    on_clear: Option<ClearCallback>,
}

enum Notification {
    Selected(SelectedLocation),
    Cleared,
}

#[derive(Default)]
struct Tasks {
    debounce: Option<AbortHandle>,
    search: Option<AbortHandle>,
    blur: Option<AbortHandle>,
    release: Option<AbortHandle>,
}

impl Tasks {
    fn abort_all(&mut self) {
        for handle in [
            self.debounce.take(),
            self.search.take(),
            self.blur.take(),
            self.release.take(),
        ]
        .into_iter()
        .flatten()
        {
            handle.abort();
        }
    }
}

struct WidgetState {
    input: InputElement,
    original_placeholder: Option<String>,
    original_autocomplete: Option<String>,
    /// Text the user actually typed; the input shows a preview while a row is highlighted
    typed_text: String,
    dropdown: DropdownState,
    pointer: PointerTracker,
    focus: Focus,
    cache: ResultCache,
    session: SessionToken,
    last_query: String,
    /// Sequence number of the most recently dispatched search
    latest_seq: u64,
    debounce_epoch: u64,
    blur_epoch: u64,
    tasks: Tasks,
    callbacks: Callbacks,
    destroyed: bool,
}

impl WidgetState {
    fn restore_typed_text(&mut self) {
        if self.dropdown.selected_index().is_some() {
            self.input.value = self.typed_text.clone();
        }
    }
}

struct Shared {
    state: Mutex<WidgetState>,
    search: Arc<dyn PlaceSearch>,
    options: AutocompleteOptions,
    stats: SearchStats,
    shutdown: CancellationToken,
    idle: Notify,
}

/// Debounced, cached places autocomplete bound to one input.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use places_autocomplete::initialization::init_search_client;
/// use places_autocomplete::{AutocompleteOptions, InputElement, Key, PlacesAutocomplete};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = AutocompleteOptions::default();
/// let search = Arc::new(init_search_client(&options)?);
/// let widget = PlacesAutocomplete::new(InputElement::new("destination"), options, search)
///     .on_select(|location| println!("picked {}", location.description));
///
/// widget.handle_input("par");
/// widget.wait_idle().await;
/// widget.key_down(Key::ArrowDown);
/// widget.key_down(Key::Enter);
/// # Ok(())
/// # }
/// ```
pub struct PlacesAutocomplete {
    shared: Arc<Shared>,
}

impl PlacesAutocomplete {
    /// Wraps `input` with an autocomplete using `search` for live predictions.
    pub fn new(
        mut input: InputElement,
        options: AutocompleteOptions,
        search: Arc<dyn PlaceSearch>,
    ) -> Self {
        let original_placeholder = input.placeholder.clone();
        let original_autocomplete = input.autocomplete.clone();
        input.placeholder = Some(options.placeholder.clone());
        input.autocomplete = Some("off".to_string());

        let state = WidgetState {
            typed_text: input.value.clone(),
            input,
            original_placeholder,
            original_autocomplete,
            dropdown: DropdownState::Closed,
            pointer: PointerTracker::new(),
            focus: Focus::Input,
            cache: ResultCache::new(options.cache_ttl, options.cache_capacity),
            session: SessionToken::generate(),
            last_query: String::new(),
            latest_seq: 0,
            debounce_epoch: 0,
            blur_epoch: 0,
            tasks: Tasks::default(),
            callbacks: Callbacks::default(),
            destroyed: false,
        };

        PlacesAutocomplete {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                search,
                options,
                stats: SearchStats::new(),
                shutdown: CancellationToken::new(),
                idle: Notify::new(),
            }),
        }
    }

    /// Mounts a widget on the input selected by `#id` in `document`.
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the selector is malformed or does not name
    /// an unmounted input.
    pub fn attach(
        document: &mut Document,
        selector: &str,
        options: AutocompleteOptions,
        search: Arc<dyn PlaceSearch>,
    ) -> Result<Self, WidgetError> {
        let input = document.mount(selector)?;
        Ok(Self::new(input, options, search))
    }

    /// Destroys the widget and puts its input back where it was mounted.
    pub fn detach(self, document: &mut Document) -> Result<(), WidgetError> {
        document.unmount(self.destroy())
    }

    /// Sets the callback invoked once per commit.
    pub fn on_select<F>(self, callback: F) -> Self
    where
        F: Fn(&SelectedLocation) + Send + Sync + 'static,
    {
        self.shared.lock().callbacks.on_select = Some(Arc::new(callback));
        self
    }

    /// Sets the callback invoked by [`clear`](Self::clear).
    pub fn on_clear<F>(self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.shared.lock().callbacks.on_clear = Some(Arc::new(callback));
        self
    }

    /// Input changed: the user typed, pasted or deleted.
    pub fn handle_input(&self, text: &str) {
        self.shared.handle_input(text);
    }

    /// Runs a search for `query` immediately, skipping the debounce.
    pub fn search_now(&self, query: &str) {
        self.shared.search_now(query);
    }

    /// Handles a key press. Returns true when the widget consumed the key.
    pub fn key_down(&self, key: Key) -> bool {
        self.shared.key_down(key)
    }

    /// The input gained focus.
    pub fn focus(&self) {
        let mut state = self.shared.lock();
        state.focus = Focus::Input;
        state.blur_epoch += 1;
        if let Some(handle) = state.tasks.blur.take() {
            handle.abort();
        }
    }

    /// The input lost focus to `next`.
    pub fn blur(&self, next: FocusTarget) {
        self.shared.blur(next);
    }

    /// Pointer entered the dropdown.
    pub fn pointer_enter(&self) {
        let mut state = self.shared.lock();
        state.pointer.enter();
        if let Some(handle) = state.tasks.release.take() {
            handle.abort();
        }
    }

    /// Pointer left the dropdown.
    pub fn pointer_leave(&self) {
        let mut state = self.shared.lock();
        state.pointer.leave();
        self.shared.schedule_release(&mut state);
    }

    /// Pointer moved; `point` is compared with the dropdown bounds on blur.
    pub fn pointer_move(&self, point: Point) {
        self.shared.lock().pointer.move_to(point);
    }

    /// Reports where the dropdown is drawn (`None` when it is not on screen).
    pub fn set_dropdown_bounds(&self, bounds: Option<Rect>) {
        self.shared.lock().pointer.set_bounds(bounds);
    }

    /// Pointer pressed on row `index`.
    ///
    /// Returns true when the press landed on a row; the caller should then
    /// prevent the default action so the input keeps focus.
    pub fn pointer_down(&self, index: usize) -> bool {
        let mut state = self.shared.lock();
        if index >= state.dropdown.predictions().len() {
            return false;
        }
        state.pointer.press(index);
        if let Some(handle) = state.tasks.release.take() {
            handle.abort();
        }
        true
    }

    /// Pointer released over row `index` (`None` when not over a row).
    pub fn pointer_up(&self, index: Option<usize>) {
        self.shared.pointer_up(index);
    }

    /// Click on row `index`.
    pub fn click(&self, index: usize) {
        self.shared.click(index);
    }

    /// Commits `prediction` as the user's choice.
    pub fn select_prediction(&self, prediction: &Prediction) {
        let (callbacks, notification) = {
            let mut state = self.shared.lock();
            if state.destroyed {
                return;
            }
            let notification = self.shared.commit_prediction(&mut state, prediction);
            (state.callbacks.clone(), notification)
        };
        dispatch(&callbacks, notification);
    }

    /// Commits the typed text verbatim.
    ///
    /// Returns false (and does nothing) when the input is blank.
    pub fn select_free_text(&self) -> bool {
        let (callbacks, notification) = {
            let mut state = self.shared.lock();
            if state.destroyed {
                return false;
            }
            match self.shared.commit_free_text(&mut state) {
                Some(notification) => (state.callbacks.clone(), notification),
                None => return false,
            }
        };
        dispatch(&callbacks, notification);
        true
    }

    /// Resets the widget, refocuses the input and invokes `on_clear`.
    pub fn clear(&self) {
        let callbacks = {
            let mut state = self.shared.lock();
            if state.destroyed {
                return;
            }
            self.shared.cancel_search(&mut state);
            state.input.value.clear();
            state.typed_text.clear();
            state.last_query.clear();
            state.dropdown.close();
            state.pointer.reset();
            state.focus = Focus::Input;
            state.blur_epoch += 1;
            if let Some(handle) = state.tasks.blur.take() {
                handle.abort();
            }
            state.callbacks.clone()
        };
        self.shared.idle.notify_waiters();
        dispatch(&callbacks, Notification::Cleared);
    }

    /// Sets the input text without searching.
    pub fn set_value(&self, value: &str) {
        let mut state = self.shared.lock();
        state.dropdown.clear_selection();
        state.input.value = value.to_string();
        state.typed_text = value.to_string();
    }

    /// Current input text, including an arrow-key preview.
    pub fn get_value(&self) -> String {
        self.shared.lock().input.value.clone()
    }

    /// Cancels every timer and request and returns the input with its original
    /// attributes restored.
    pub fn destroy(self) -> InputElement {
        self.shared.shutdown.cancel();
        let input = {
            let mut state = self.shared.lock();
            state.destroyed = true;
            state.tasks.abort_all();
            state.dropdown.close();
            state.callbacks = Callbacks::default();
            let mut input = std::mem::take(&mut state.input);
            input.placeholder = state.original_placeholder.take();
            input.autocomplete = state.original_autocomplete.take();
            input
        };
        self.shared.idle.notify_waiters();
        input
    }

    /// Waits until no debounce timer or request is pending.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.shared.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if !self.is_searching() {
                return;
            }
            notified.await;
        }
    }

    /// True while a debounced search is scheduled or a request is in flight.
    pub fn is_searching(&self) -> bool {
        let state = self.shared.lock();
        state.tasks.debounce.is_some() || state.tasks.search.is_some()
    }

    /// True while the dropdown is shown.
    pub fn is_open(&self) -> bool {
        self.shared.lock().dropdown.is_open()
    }

    /// Snapshot of the dropdown state machine.
    pub fn dropdown_state(&self) -> DropdownState {
        self.shared.lock().dropdown.clone()
    }

    /// Predictions currently listed in the dropdown.
    pub fn predictions(&self) -> Vec<Prediction> {
        self.shared.lock().dropdown.predictions().to_vec()
    }

    /// Highlighted row; `None` means the typed text is active.
    pub fn selected_index(&self) -> Option<usize> {
        self.shared.lock().dropdown.selected_index()
    }

    /// Token sent with searches of the current session.
    pub fn session_token(&self) -> SessionToken {
        self.shared.lock().session.clone()
    }

    /// Last query handed to the dispatcher.
    pub fn last_query(&self) -> String {
        self.shared.lock().last_query.clone()
    }

    /// Phase of the pointer interaction with the dropdown.
    pub fn pointer_phase(&self) -> PointerPhase {
        self.shared.lock().pointer.phase()
    }

    /// Search outcome counters for this widget.
    pub fn stats(&self) -> &SearchStats {
        &self.shared.stats
    }

    /// Options the widget was built with.
    pub fn options(&self) -> &AutocompleteOptions {
        &self.shared.options
    }

    /// Current view projection.
    pub fn view(&self) -> WidgetView {
        let state = self.shared.lock();
        render(
            &state.input,
            &state.dropdown,
            self.shared.options.show_clear_button,
        )
    }
}

impl Drop for PlacesAutocomplete {
    fn drop(&mut self) {
        self.shared.shutdown.cancel();
    }
}

fn dispatch(callbacks: &Callbacks, notification: Notification) {
    match notification {
        Notification::Selected(location) => {
            if let Some(on_select) = &callbacks.on_select {
                on_select(&location);
            }
        }
        Notification::Cleared => {
            if let Some(on_clear) = &callbacks.on_clear {
                on_clear();
            }
        }
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, WidgetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn spawn_guarded<F>(&self, task: F) -> AbortHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {}
                _ = task => {}
            }
        })
        .abort_handle()
    }

    fn handle_input(self: &Arc<Self>, text: &str) {
        let mut state = self.lock();
        if state.destroyed {
            return;
        }
        state.focus = Focus::Input;
        state.dropdown.clear_selection();
        state.input.value = text.to_string();
        state.typed_text = text.to_string();

        let query = text.trim();
        if query.chars().count() < self.options.min_chars {
            self.cancel_search(&mut state);
            state.dropdown.close();
            state.last_query.clear();
            drop(state);
            self.idle.notify_waiters();
            return;
        }

        if query == state.last_query {
            return;
        }
        state.last_query = query.to_string();

        state.debounce_epoch += 1;
        let epoch = state.debounce_epoch;
        if let Some(handle) = state.tasks.debounce.take() {
            handle.abort();
        }

        let weak = Arc::downgrade(self);
        let delay = self.options.debounce_delay;
        let query = query.to_string();
        state.tasks.debounce = Some(self.spawn_guarded(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = weak.upgrade() {
                shared.fire_debounce(epoch, query);
            }
        }));
    }

    fn fire_debounce(self: &Arc<Self>, epoch: u64, query: String) {
        let mut state = self.lock();
        if state.destroyed || state.debounce_epoch != epoch {
            return;
        }
        state.tasks.debounce = None;
        self.run_search(&mut state, query);
    }

    fn search_now(self: &Arc<Self>, query: &str) {
        let mut state = self.lock();
        if state.destroyed {
            return;
        }
        state.debounce_epoch += 1;
        if let Some(handle) = state.tasks.debounce.take() {
            handle.abort();
        }
        let query = query.trim().to_string();
        state.last_query = query.clone();
        self.run_search(&mut state, query);
    }

    /// Dispatches a search: cache first, then the backend.
    fn run_search(self: &Arc<Self>, state: &mut WidgetState, query: String) {
        self.supersede_in_flight(state);
        state.latest_seq += 1;
        let seq = state.latest_seq;

        let cached = state
            .cache
            .get(&query, &self.options.types)
            .map(|predictions| predictions.to_vec());
        if let Some(predictions) = cached {
            self.stats.record(SearchOutcome::CacheHit);
            self.show(state, predictions);
            self.idle.notify_waiters();
            return;
        }

        let request = SearchRequest {
            query: query.clone(),
            session_token: state.session.as_str().to_string(),
            types: self.options.types.clone(),
            limit: self.options.max_results,
        };
        log::debug!("Dispatching search #{} for '{}'", seq, query);

        let response = self.search.autocomplete(request);
        let weak = Arc::downgrade(self);
        state.tasks.search = Some(self.spawn_guarded(async move {
            let result = response.await;
            if let Some(shared) = weak.upgrade() {
                shared.apply_result(seq, &query, result);
            }
        }));
    }

    fn apply_result(&self, seq: u64, query: &str, result: Result<Vec<Prediction>, SearchError>) {
        let mut state = self.lock();
        if state.destroyed || seq != state.latest_seq {
            log::debug!("Discarding stale response #{} for '{}'", seq, query);
            return;
        }
        state.tasks.search = None;

        match result {
            Ok(mut predictions) => {
                predictions.truncate(self.options.max_results);
                self.stats.record(SearchOutcome::NetworkSuccess);
                state
                    .cache
                    .put(query, &self.options.types, predictions.clone());
                self.show(&mut state, predictions);
            }
            Err(e) => {
                log::warn!(
                    "Places search for '{}' failed, showing fallback suggestions: {}",
                    query,
                    e
                );
                self.stats.record(SearchOutcome::NetworkFailure);
                if e.is_timeout() {
                    self.stats.record(SearchOutcome::NetworkTimeout);
                }
                self.stats.record(SearchOutcome::FallbackServed);
                let mut predictions = fallback_suggestions(query);
                predictions.truncate(self.options.max_results);
                self.show(&mut state, predictions);
            }
        }
        drop(state);
        self.idle.notify_waiters();
    }

    fn show(&self, state: &mut WidgetState, predictions: Vec<Prediction>) {
        state.restore_typed_text();
        if state.focus == Focus::Outside && !state.pointer.is_active() {
            log::debug!("Input lost focus before results arrived; keeping dropdown closed");
            state.dropdown.close();
            return;
        }
        let typed = state.typed_text.trim();
        let free_text_hint =
            (self.options.allow_free_text && !typed.is_empty()).then(|| typed.to_string());
        state.dropdown = DropdownState::show(predictions, EmptyNotice { free_text_hint });
    }

    /// Aborts the in-flight request, if any; its response can no longer apply.
    fn supersede_in_flight(&self, state: &mut WidgetState) {
        if let Some(handle) = state.tasks.search.take() {
            handle.abort();
            self.stats.record(SearchOutcome::StaleDiscarded);
        }
    }

    /// Cancels the pending debounce and supersedes any in-flight request.
    fn cancel_search(&self, state: &mut WidgetState) {
        state.debounce_epoch += 1;
        if let Some(handle) = state.tasks.debounce.take() {
            handle.abort();
        }
        self.supersede_in_flight(state);
        state.latest_seq += 1;
    }

    fn key_down(&self, key: Key) -> bool {
        let (callbacks, notification) = {
            let mut state = self.lock();
            if state.destroyed {
                return false;
            }
            let notification = match key {
                Key::ArrowDown | Key::ArrowUp => {
                    let direction = if key == Key::ArrowDown {
                        Direction::Down
                    } else {
                        Direction::Up
                    };
                    return match state.dropdown.move_selection(direction) {
                        Some(Some(index)) => {
                            state.input.value = state.dropdown.predictions()[index].description.clone();
                            true
                        }
                        Some(None) => {
                            state.input.value = state.typed_text.clone();
                            true
                        }
                        None => state.dropdown.is_open(),
                    };
                }
                Key::Enter => {
                    if let Some(prediction) = state.dropdown.selected_prediction().cloned() {
                        self.commit_prediction(&mut state, &prediction)
                    } else if self.options.allow_free_text {
                        match self.commit_free_text(&mut state) {
                            Some(notification) => notification,
                            None => return false,
                        }
                    } else {
                        return false;
                    }
                }
                Key::Escape | Key::Tab => {
                    if !state.dropdown.is_open() {
                        return false;
                    }
                    state.restore_typed_text();
                    state.dropdown.close();
                    // Tab still moves focus
                    return key == Key::Escape;
                }
            };
            (state.callbacks.clone(), notification)
        };
        dispatch(&callbacks, notification);
        true
    }

    fn commit_prediction(&self, state: &mut WidgetState, prediction: &Prediction) -> Notification {
        self.cancel_search(state);
        state.input.value = prediction.description.clone();
        state.typed_text = prediction.description.clone();
        state.last_query = prediction.description.trim().to_string();
        state.dropdown.close();
        state.session = state.session.regenerate();
        log::debug!("Selected '{}'", prediction.description);
        self.idle.notify_waiters();
        Notification::Selected(SelectedLocation::from(prediction))
    }

    fn commit_free_text(&self, state: &mut WidgetState) -> Option<Notification> {
        let text = state.typed_text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.cancel_search(state);
        state.input.value = text.clone();
        state.typed_text = text.clone();
        state.last_query = text.clone();
        state.dropdown.close();
        state.session = state.session.regenerate();
        log::debug!("Selected free text '{}'", text);
        self.idle.notify_waiters();
        Some(Notification::Selected(SelectedLocation::free_text(&text)))
    }

    fn blur(self: &Arc<Self>, next: FocusTarget) {
        let mut state = self.lock();
        if state.destroyed {
            return;
        }
        state.focus = match next {
            FocusTarget::Dropdown => Focus::Dropdown,
            FocusTarget::Outside => Focus::Outside,
        };

        if state.pointer.is_active() || next == FocusTarget::Dropdown {
            log::debug!("Blur during dropdown interaction; keeping dropdown open");
            return;
        }
        if !state.dropdown.is_open() {
            return;
        }

        state.blur_epoch += 1;
        let epoch = state.blur_epoch;
        if let Some(handle) = state.tasks.blur.take() {
            handle.abort();
        }
        let weak = Arc::downgrade(self);
        let delay = self.options.blur_close_delay;
        state.tasks.blur = Some(self.spawn_guarded(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = weak.upgrade() {
                shared.reconcile_blur(epoch);
            }
        }));
    }

    /// Delayed half of blur handling: close unless the pointer or focus came back.
    fn reconcile_blur(&self, epoch: u64) {
        let mut state = self.lock();
        if state.destroyed || state.blur_epoch != epoch {
            return;
        }
        state.tasks.blur = None;

        if state.pointer.is_active()
            || state.focus != Focus::Outside
            || state.pointer.is_over_dropdown()
        {
            log::debug!("Blur close cancelled: pointer or focus returned to the widget");
            return;
        }
        state.restore_typed_text();
        state.dropdown.close();
    }

    fn schedule_release(self: &Arc<Self>, state: &mut WidgetState) {
        let epoch = state.pointer.begin_release();
        if let Some(handle) = state.tasks.release.take() {
            handle.abort();
        }
        let weak = Arc::downgrade(self);
        let delay = self.options.pointer_release_delay;
        state.tasks.release = Some(self.spawn_guarded(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = weak.upgrade() {
                let mut state = shared.lock();
                if state.pointer.finish_release(epoch) {
                    state.tasks.release = None;
                }
            }
        }));
    }

    fn pointer_up(self: &Arc<Self>, index: Option<usize>) {
        let (callbacks, notification) = {
            let mut state = self.lock();
            if state.destroyed {
                return;
            }
            let committed = state.pointer.release(index);
            self.schedule_release(&mut state);
            let prediction = committed.and_then(|i| state.dropdown.predictions().get(i).cloned());
            match prediction {
                Some(prediction) => {
                    let notification = self.commit_prediction(&mut state, &prediction);
                    (state.callbacks.clone(), notification)
                }
                None => return,
            }
        };
        dispatch(&callbacks, notification);
    }

    fn click(self: &Arc<Self>, index: usize) {
        let (callbacks, notification) = {
            let mut state = self.lock();
            if state.destroyed {
                return;
            }
            let Some(prediction) = state.dropdown.predictions().get(index).cloned() else {
                return;
            };
            if state.pointer.click(index).is_none() {
                log::debug!("Click on row {} already committed by pointer release", index);
                return;
            }
            self.schedule_release(&mut state);
            let notification = self.commit_prediction(&mut state, &prediction);
            (state.callbacks.clone(), notification)
        };
        dispatch(&callbacks, notification);
    }
}
