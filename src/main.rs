//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `places_autocomplete` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! It types the query into a widget one character at a time, the way a user
//! would, prints the suggestions, and optionally commits one of them.

use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use clap::Parser;

use places_autocomplete::config::{API_URL_ENV, DEFAULT_API_URL};
use places_autocomplete::initialization::{init_logger_with, init_search_client};
use places_autocomplete::{
    AutocompleteOptions, InputElement, Key, Opt, PlacesAutocomplete, SearchOutcome,
    SelectedLocation,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut options = AutocompleteOptions::from(&opt);
    if opt.api_url.is_none() {
        options.api_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    }
    log::info!("Using places API at {}", options.api_url);

    let search = init_search_client(&options).context("Failed to create places client")?;

    let committed: Arc<Mutex<Option<SelectedLocation>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&committed);
    let widget = PlacesAutocomplete::new(InputElement::new("destination"), options, Arc::new(search))
        .on_select(move |location| {
            if let Ok(mut slot) = sink.lock() {
                *slot = Some(location.clone());
            }
        });

    let mut typed = String::new();
    for c in opt.query.chars() {
        typed.push(c);
        widget.handle_input(&typed);
    }
    widget.wait_idle().await;

    print_dropdown(&widget);

    if let Some(n) = opt.select {
        let available = widget.predictions().len();
        if n == 0 || n > available {
            bail!(
                "--select {} is out of range: {} suggestion{} shown",
                n,
                available,
                if available == 1 { "" } else { "s" }
            );
        }
        for _ in 0..n {
            widget.key_down(Key::ArrowDown);
        }
        widget.key_down(Key::Enter);
    } else if opt.free_text && !widget.select_free_text() {
        bail!("Nothing to commit: the query is blank");
    }

    let stats = widget.stats();
    log::info!(
        "Searches: {} network ({} failed), {} cache hits, {} fallback",
        stats.network_requests(),
        stats.count(SearchOutcome::NetworkFailure),
        stats.count(SearchOutcome::CacheHit),
        stats.count(SearchOutcome::FallbackServed)
    );

    let selected = committed.lock().ok().and_then(|slot| slot.clone());
    if let Some(location) = selected {
        let json =
            serde_json::to_string_pretty(&location).context("Failed to serialize selection")?;
        println!("{}", json);
    }

    widget.destroy();
    Ok(())
}

fn print_dropdown(widget: &PlacesAutocomplete) {
    match widget.view().dropdown {
        Some(rows) => {
            for row in rows {
                println!("{}", row);
            }
        }
        None => println!("(no suggestions)"),
    }
}
