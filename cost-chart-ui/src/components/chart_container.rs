//! Mount point for a D3-rendered chart or table.
//!
//! The inner div is cleared by `js_bridge::destroy_chart` when its owner unmounts.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    #[props(default = 300)]
    pub min_height: u32,
}

/// A sized div for D3 to render into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                "data-testid": "chart-mount",
                style: "width: 100%;",
            }
        }
    }
}
