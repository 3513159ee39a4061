//! Page size input for the bar chart.

use crate::state::{AppState, MAX_DISPLAY_AMOUNT};
use dioxus::prelude::*;

/// Number input bound to `AppState::display_amount`.
#[component]
pub fn DisplayAmountSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.display_amount)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(amount) = evt.value().parse::<usize>() {
            state
                .display_amount
                .set(amount.clamp(1, MAX_DISPLAY_AMOUNT));
        }
    };

    rsx! {
        label {
            style: "font-weight: bold; font-size: 13px;",
            "Bars per page: "
            input {
                r#type: "number",
                value: "{current}",
                min: "1",
                max: "{MAX_DISPLAY_AMOUNT}",
                style: "width: 56px;",
                onchange: on_change,
            }
        }
    }
}
