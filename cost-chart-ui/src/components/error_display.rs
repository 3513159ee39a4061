//! Inline error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default = "Error".to_string())]
    pub title: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FDECEA; color: #B71C1C; border-radius: 4px; border-left: 4px solid #E53935;",
            strong { "{props.title}: " }
            "{props.message}"
        }
    }
}
