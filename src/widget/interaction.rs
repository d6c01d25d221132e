//! Pointer interaction with the dropdown.
//!
//! Browsers do not agree on the order of `blur`, `mousedown`, `mouseup` and
//! `click` when an option is clicked: focus usually leaves the input before the
//! click lands. [`PointerTracker`] is the single source of truth for whether a
//! pointer interaction is in flight, so a blur arriving mid-click does not close
//! the dropdown, and for whether the current press already committed, so the
//! redundant `mouseup`/`click` paths select at most once.
//!
//! ```text
//! Idle ──enter──▶ Hovering ──down──▶ Pressed ──up/click (same row)──▶ Committed
//!   ▲                                   │                                │
//!   │                                   └──up elsewhere / leave──▶ Cancelled
//!   └──────────── release cool-down (after up / leave) ◀─────────────────┘
//! ```

/// Pointer position in the same coordinate space as [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of the rendered dropdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Idle,
    Hovering,
    Pressed { item: usize },
    Committed { item: usize },
    Cancelled,
}

/// Tracks one pointer's interaction with the dropdown.
#[derive(Debug)]
pub struct PointerTracker {
    phase: PointerPhase,
    /// Bumped whenever a release cool-down starts or is interrupted
    release_epoch: u64,
    position: Option<Point>,
    bounds: Option<Rect>,
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker {
            phase: PointerPhase::Idle,
            release_epoch: 0,
            position: None,
            bounds: None,
        }
    }

    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    /// True from the first enter/press until the release cool-down finishes.
    pub fn is_active(&self) -> bool {
        self.phase != PointerPhase::Idle
    }

    /// Pointer entered the dropdown; interrupts a pending cool-down.
    pub fn enter(&mut self) {
        self.release_epoch += 1;
        if self.phase == PointerPhase::Idle {
            self.phase = PointerPhase::Hovering;
        }
    }

    /// Pointer pressed on row `item`; starts a new press.
    pub fn press(&mut self, item: usize) {
        self.release_epoch += 1;
        self.phase = PointerPhase::Pressed { item };
    }

    /// Pointer released over row `item` (or outside any row).
    ///
    /// Returns the row to commit when this release completes the press.
    pub fn release(&mut self, item: Option<usize>) -> Option<usize> {
        match self.phase {
            PointerPhase::Pressed { item: pressed } if item == Some(pressed) => {
                self.phase = PointerPhase::Committed { item: pressed };
                Some(pressed)
            }
            PointerPhase::Pressed { .. } => {
                self.phase = PointerPhase::Cancelled;
                None
            }
            _ => None,
        }
    }

    /// Click on row `item`.
    ///
    /// Commits unless this press already committed. A click with no tracked
    /// press (touch, assistive tech) commits directly.
    pub fn click(&mut self, item: usize) -> Option<usize> {
        match self.phase {
            PointerPhase::Committed { .. } => None,
            _ => {
                self.phase = PointerPhase::Committed { item };
                Some(item)
            }
        }
    }

    /// Pointer left the dropdown; an unfinished press is cancelled.
    pub fn leave(&mut self) {
        if let PointerPhase::Pressed { .. } = self.phase {
            self.phase = PointerPhase::Cancelled;
        }
    }

    /// Starts the release cool-down and returns its epoch.
    pub fn begin_release(&mut self) -> u64 {
        self.release_epoch += 1;
        self.release_epoch
    }

    /// Ends the cool-down started at `epoch`, unless the pointer re-engaged since.
    ///
    /// Returns true when the tracker went back to idle.
    pub fn finish_release(&mut self, epoch: u64) -> bool {
        if epoch != self.release_epoch || matches!(self.phase, PointerPhase::Pressed { .. }) {
            return false;
        }
        self.phase = PointerPhase::Idle;
        true
    }

    pub fn move_to(&mut self, point: Point) {
        self.position = Some(point);
    }

    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// True when the last known pointer position lies inside the dropdown.
    pub fn is_over_dropdown(&self) -> bool {
        match (self.position, self.bounds) {
            (Some(point), Some(rect)) => rect.contains(point),
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.release_epoch += 1;
        self.phase = PointerPhase::Idle;
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
