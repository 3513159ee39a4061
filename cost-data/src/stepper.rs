//! Visibility rules for the bar chart stepper.
//!
//! The stepper (back/next buttons plus one dot per page) only exists when
//! there is more than one page. Its controls only show while the pointer is
//! over the chart, and each button hides on the page where it would do
//! nothing.

use crate::pager::DisplayWindow;

/// What the stepper should draw for a given window, list length and hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperView {
    /// Total number of pages (one dot each).
    pub steps: usize,
    /// Index of the active page.
    pub active: usize,
    /// Whether the pointer is over the chart.
    pub hovered: bool,
    /// Whether the back control is drawn.
    pub show_back: bool,
    /// Whether the next control is drawn.
    pub show_next: bool,
}

impl StepperView {
    pub fn new(window: &DisplayWindow, len: usize, hovered: bool) -> Self {
        let steps = window.step_count(len);
        let controls = hovered && steps > 1;
        Self {
            steps,
            active: window.offset(),
            hovered,
            show_back: controls && !window.is_first(),
            show_next: controls && !window.is_last(len),
        }
    }

    /// Whether the stepper region exists at all.
    pub fn is_rendered(&self) -> bool {
        self.steps > 1
    }

    /// Number of position dots currently drawn.
    pub fn dot_count(&self) -> usize {
        if self.is_rendered() && self.hovered {
            self.steps
        } else {
            0
        }
    }
}
