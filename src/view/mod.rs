//! View projection.
//!
//! [`render`] turns widget state into a plain description of what should be on
//! screen. It holds no logic beyond formatting, so any front end (DOM, TUI,
//! snapshot test) can draw from it.

mod dom;

pub use dom::{Document, InputElement, Node};

use std::fmt;

use crate::config::NO_RESULTS_MESSAGE;
use crate::models::PlaceType;
use crate::widget::DropdownState;

/// Everything a front end needs to draw one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub input: InputView,
    pub clear_button_visible: bool,
    /// `None` while the dropdown is closed
    pub dropdown: Option<Vec<DropdownRow>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    pub placeholder: Option<String>,
    pub aria_expanded: bool,
    /// Id of the highlighted option, for screen readers
    pub aria_activedescendant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownRow {
    Item {
        index: usize,
        id: String,
        icon: &'static str,
        main_text: String,
        secondary_text: Option<String>,
        highlighted: bool,
    },
    NoResults {
        message: String,
    },
    FreeTextHint {
        message: String,
    },
}

impl fmt::Display for DropdownRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropdownRow::Item {
                index,
                icon,
                main_text,
                secondary_text,
                highlighted,
                ..
            } => {
                let marker = if *highlighted { '>' } else { ' ' };
                write!(f, "{} {}. {} {}", marker, index + 1, icon, main_text)?;
                if let Some(secondary) = secondary_text {
                    write!(f, " ({})", secondary)?;
                }
                Ok(())
            }
            DropdownRow::NoResults { message } | DropdownRow::FreeTextHint { message } => {
                write!(f, "  {}", message)
            }
        }
    }
}

/// Icon shown next to a prediction of this type.
pub fn icon_for(place_type: PlaceType) -> &'static str {
    match place_type {
        PlaceType::City => "🏙️",
        PlaceType::State => "🗺️",
        PlaceType::Country => "🌍",
        PlaceType::Place => "📍",
        PlaceType::Custom => "✏️",
    }
}

/// Hint offered when free text may be committed with Enter.
pub fn free_text_hint(text: &str) -> String {
    format!("Press Enter to use \"{}\"", text)
}

/// Id of the option element for row `index` of the widget on `input_id`.
pub fn option_id(input_id: &str, index: usize) -> String {
    format!("{}-option-{}", input_id, index)
}

/// Projects widget state onto a [`WidgetView`].
pub fn render(input: &InputElement, dropdown: &DropdownState, show_clear_button: bool) -> WidgetView {
    let rows = match dropdown {
        DropdownState::Closed => None,
        DropdownState::OpenWithResults {
            predictions,
            selected,
        } => Some(
            predictions
                .iter()
                .enumerate()
                .map(|(index, p)| DropdownRow::Item {
                    index,
                    id: option_id(&input.id, index),
                    icon: icon_for(p.place_type),
                    main_text: p.main_text.clone(),
                    secondary_text: p.secondary_text.clone(),
                    highlighted: *selected == Some(index),
                })
                .collect(),
        ),
        DropdownState::OpenEmpty(notice) => {
            let mut rows = vec![DropdownRow::NoResults {
                message: NO_RESULTS_MESSAGE.to_string(),
            }];
            if let Some(text) = &notice.free_text_hint {
                rows.push(DropdownRow::FreeTextHint {
                    message: free_text_hint(text),
                });
            }
            Some(rows)
        }
    };

    WidgetView {
        input: InputView {
            value: input.value.clone(),
            placeholder: input.placeholder.clone(),
            aria_expanded: dropdown.is_open(),
            aria_activedescendant: dropdown
                .selected_index()
                .map(|i| option_id(&input.id, i)),
        },
        clear_button_visible: show_clear_button && !input.value.is_empty(),
        dropdown: rows,
    }
}
