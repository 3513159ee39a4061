//! Legend naming the previous and current series.

use cost_data::series::{BarChartData, Series};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BarChartLegendProps {
    pub bar_chart_data: BarChartData,
}

#[component]
pub fn BarChartLegend(props: BarChartLegendProps) -> Element {
    let entries: Vec<(String, String)> = Series::ALL
        .iter()
        .map(|&series| {
            (
                props.bar_chart_data.fill(series).to_string(),
                props.bar_chart_data.name(series).to_string(),
            )
        })
        .collect();

    rsx! {
        div {
            "data-testid": "bar-chart-legend",
            style: "display: flex; gap: 16px; font-size: 12px; margin: 4px 0 8px 0;",
            for (fill, name) in entries {
                div {
                    key: "{name}",
                    style: "display: flex; align-items: center; gap: 4px;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; border-radius: 2px; background: {fill};",
                    }
                    "{name}"
                }
            }
        }
    }
}
