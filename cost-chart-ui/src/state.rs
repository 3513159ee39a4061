//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cost_data::pager::DEFAULT_DISPLAY_AMOUNT;
use cost_data::resource::Resource;
use dioxus::prelude::*;

/// Upper bound for the user-selectable bar chart page size.
pub const MAX_DISPLAY_AMOUNT: usize = 20;

/// Shared application state for cost insight pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Resources for the current and previous period
    pub resources: Signal<Vec<Resource>>,
    /// Number of bars shown per chart page
    pub display_amount: Signal<usize>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            resources: Signal::new(Vec::new()),
            display_amount: Signal::new(DEFAULT_DISPLAY_AMOUNT),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
