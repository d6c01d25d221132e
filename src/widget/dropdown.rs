//! Dropdown open/closed state and keyboard highlight.

use crate::models::Prediction;

/// Why an open dropdown has no rows to pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyNotice {
    /// Text the user can commit verbatim with Enter, when free text is allowed
    pub free_text_hint: Option<String>,
}

/// Dropdown state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    OpenWithResults {
        predictions: Vec<Prediction>,
        /// `None` means no row is highlighted and the typed text is shown
        selected: Option<usize>,
    },
    OpenEmpty(EmptyNotice),
}

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl DropdownState {
    /// Opens with `predictions`, or with `notice` when there are none.
    pub fn show(predictions: Vec<Prediction>, notice: EmptyNotice) -> Self {
        if predictions.is_empty() {
            DropdownState::OpenEmpty(notice)
        } else {
            DropdownState::OpenWithResults {
                predictions,
                selected: None,
            }
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DropdownState::Closed)
    }

    pub fn predictions(&self) -> &[Prediction] {
        match self {
            DropdownState::OpenWithResults { predictions, .. } => predictions,
            _ => &[],
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            DropdownState::OpenWithResults { selected, .. } => *selected,
            _ => None,
        }
    }

    pub fn selected_prediction(&self) -> Option<&Prediction> {
        match self {
            DropdownState::OpenWithResults {
                predictions,
                selected: Some(i),
            } => predictions.get(*i),
            _ => None,
        }
    }

    /// Moves the highlight one step, clamped to `[-1, len - 1]`.
    ///
    /// Returns the new highlight when it changed, `None` when the key had no
    /// effect (closed, empty, or already at a boundary).
    pub fn move_selection(&mut self, direction: Direction) -> Option<Option<usize>> {
        let DropdownState::OpenWithResults {
            predictions,
            selected,
        } = self
        else {
            return None;
        };

        let next = match (direction, *selected) {
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(i)) if i + 1 < predictions.len() => Some(i + 1),
            (Direction::Down, Some(i)) => Some(i),
            (Direction::Up, None) => None,
            (Direction::Up, Some(0)) => None,
            (Direction::Up, Some(i)) => Some(i - 1),
        };

        if next == *selected {
            return None;
        }
        *selected = next;
        Some(next)
    }

    /// Drops the highlight without closing.
    pub fn clear_selection(&mut self) {
        if let DropdownState::OpenWithResults { selected, .. } = self {
            *selected = None;
        }
    }

    pub fn close(&mut self) {
        *self = DropdownState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceType;

    fn open_with(n: usize) -> DropdownState {
        let predictions = (0..n)
            .map(|i| Prediction::from_label(&format!("City {}, Country", i), PlaceType::City))
            .collect();
        DropdownState::show(
            predictions,
            EmptyNotice {
                free_text_hint: None,
            },
        )
    }

    #[test]
    fn test_show_empty_opens_empty_state() {
        let state = DropdownState::show(
            Vec::new(),
            EmptyNotice {
                free_text_hint: Some("Lake Tahoe".into()),
            },
        );
        assert!(state.is_open());
        assert!(state.predictions().is_empty());
        assert!(matches!(state, DropdownState::OpenEmpty(_)));
    }

    #[test]
    fn test_up_from_none_stays_none() {
        let mut state = open_with(3);
        assert_eq!(state.move_selection(Direction::Up), None);
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn test_down_stops_at_last_index() {
        let mut state = open_with(3);
        assert_eq!(state.move_selection(Direction::Down), Some(Some(0)));
        assert_eq!(state.move_selection(Direction::Down), Some(Some(1)));
        assert_eq!(state.move_selection(Direction::Down), Some(Some(2)));
        assert_eq!(state.move_selection(Direction::Down), None);
        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn test_up_returns_to_none() {
        let mut state = open_with(2);
        state.move_selection(Direction::Down);
        assert_eq!(state.move_selection(Direction::Up), Some(None));
        assert!(state.selected_prediction().is_none());
    }

    #[test]
    fn test_arrows_ignored_when_closed_or_empty() {
        let mut closed = DropdownState::Closed;
        assert_eq!(closed.move_selection(Direction::Down), None);

        let mut empty = DropdownState::OpenEmpty(EmptyNotice {
            free_text_hint: None,
        });
        assert_eq!(empty.move_selection(Direction::Down), None);
    }

    #[test]
    fn test_close_drops_predictions() {
        let mut state = open_with(2);
        state.move_selection(Direction::Down);
        state.close();
        assert!(!state.is_open());
        assert!(state.predictions().is_empty());
        assert_eq!(state.selected_index(), None);
    }
}
