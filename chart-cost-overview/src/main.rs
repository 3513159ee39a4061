//! Cost Overview
//!
//! Shows a paged bar chart comparing last month's and this month's cost for
//! every resource, most expensive first, followed by a filterable table of
//! the same resources.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/resources.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed into `AppState::resources`.
//! 4. `BarChart` and `ResourceTable` sort, page and filter in Rust and hand
//!    the visible rows to D3.js.

use cost_chart_ui::components::{
    BarChart, BarChartLegend, ChartHeader, DisplayAmountSelector, ErrorDisplay, LoadingSpinner,
    ResourceTable,
};
use cost_chart_ui::state::AppState;
use cost_data::format::format_currency;
use cost_data::resource::load_resources;
use cost_data::series::{BarChartData, TooltipItem, TooltipPayload};
use dioxus::prelude::*;

/// Per-resource costs for the previous and current month.
const RESOURCES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/resources.csv"));

const BAR_CHART_ID: &str = "cost-overview-bar-chart";
const TABLE_ID: &str = "cost-overview-table";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("cost-overview-root"))
        .launch(App);
}

fn bar_chart_data() -> BarChartData {
    BarChartData {
        previous_fill: "#B0BEC5".to_string(),
        current_fill: "#1976D2".to_string(),
        previous_name: "Last Month".to_string(),
        current_name: "This Month".to_string(),
    }
}

fn tooltip_item(payload: TooltipPayload) -> TooltipItem {
    TooltipItem {
        label: payload.name,
        value: format_currency(payload.value),
        fill: payload.fill,
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse embedded resources on mount
    use_effect(move || {
        match load_resources(RESOURCES_CSV) {
            Ok(resources) => {
                if resources.is_empty() {
                    log::warn!("No resources found in embedded fixture");
                }
                state.resources.set(resources);
            }
            Err(e) => {
                log::error!("Failed to load resources: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load resource costs: {}", e)));
            }
        }
        state.loading.set(false);
    });

    let resources = state.resources.read().clone();
    let display_amount = (state.display_amount)();

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: "Cost by Resource".to_string(),
                    subtitle: "This month vs. last month, most expensive first".to_string(),
                }
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    BarChartLegend { bar_chart_data: bar_chart_data() }
                    DisplayAmountSelector {}
                }
                BarChart {
                    id: BAR_CHART_ID.to_string(),
                    resources: resources.clone(),
                    display_amount: display_amount,
                    bar_chart_data: bar_chart_data(),
                    get_tooltip_item: tooltip_item,
                }

                div {
                    style: "margin-top: 24px; padding-top: 8px; border-top: 1px solid #E0E0E0;",
                    ChartHeader { title: "Resources".to_string() }
                    ResourceTable {
                        id: TABLE_ID.to_string(),
                        resources: resources,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_data::series::Series;

    #[test]
    fn test_embedded_fixture_parses() {
        let resources = load_resources(RESOURCES_CSV).unwrap();
        assert!(resources.len() > cost_data::pager::DEFAULT_DISPLAY_AMOUNT);
    }

    #[test]
    fn test_tooltip_item_formats_currency() {
        let item = tooltip_item(TooltipPayload {
            label: "api-gateway".to_string(),
            series: Series::Current,
            name: "This Month".to_string(),
            value: 14210.75,
            fill: "#1976D2".to_string(),
        });
        assert_eq!(item.label, "This Month");
        assert_eq!(item.value, "$14,211");
    }
}
