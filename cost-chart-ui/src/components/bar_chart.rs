//! Paged bar chart comparing previous and current cost per resource.
//!
//! Resources are sorted most expensive first and shown `display_amount` at a
//! time. The page offset and the hover flag are the only state this component
//! owns; everything else is recomputed from props on each render. The offset
//! survives prop changes, is written back onto the last page if the list
//! shrinks, and resets when the component is remounted, e.g. by giving it a
//! new `key`.

use crate::components::{BarChartStepper, ChartContainer};
use crate::js_bridge;
use cost_data::pager::{DisplayWindow, PageAction, DEFAULT_DISPLAY_AMOUNT};
use cost_data::resource::{sort_resources, Resource};
use cost_data::series::{bar_points, BarChartConfig, BarChartData, TooltipItem, TooltipPayload};
use cost_data::stepper::StepperView;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BarChartProps {
    /// The DOM id D3 renders the bars into
    pub id: String,
    #[props(default)]
    pub resources: Vec<Resource>,
    /// Bars per page
    #[props(default = DEFAULT_DISPLAY_AMOUNT)]
    pub display_amount: usize,
    pub bar_chart_data: BarChartData,
    /// Formats one plotted value for the tooltip
    pub get_tooltip_item: Callback<TooltipPayload, TooltipItem>,
    /// Size the chart to its container instead of a fixed width
    #[props(default = true)]
    pub responsive: bool,
}

#[component]
pub fn BarChart(props: BarChartProps) -> Element {
    let mut offset = use_signal(|| 0usize);
    let mut hovered = use_signal(|| false);

    let sorted = sort_resources(&props.resources);
    let len = sorted.len();
    let window = DisplayWindow::at(props.display_amount, offset(), len);
    let stepper = StepperView::new(&window, len, hovered());

    let formatter = props.get_tooltip_item;
    let points = bar_points(
        window.slice(&sorted),
        &props.bar_chart_data,
        &|payload: &TooltipPayload| formatter.call(payload.clone()),
    );
    let data_json = serde_json::to_string(&points).unwrap_or_default();
    let config_json = serde_json::to_string(&BarChartConfig {
        bars: props.bar_chart_data.clone(),
        responsive: props.responsive,
    })
    .unwrap_or_default();
    let id = props.id.clone();

    use_effect(use_reactive!(|(id, data_json, config_json)| {
        js_bridge::init_charts();
        js_bridge::render_bar_chart(&id, &data_json, &config_json);
    }));

    // Stored offset stays inside 0..step_count for the current list.
    let display_amount = props.display_amount;
    use_effect(use_reactive!(|(len, display_amount)| {
        let stored = *offset.peek();
        let clamped = DisplayWindow::at(display_amount, stored, len).offset();
        if clamped != stored {
            offset.set(clamped);
        }
    }));

    let cleanup_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&cleanup_id));

    // Rebuilt from the live signal on every click, so clicks handled before a
    // re-render each move a page.
    let mut step = move |action: PageAction| {
        let mut w = DisplayWindow::at(display_amount, *offset.peek(), len);
        if w.apply(action, len) {
            log::debug!("bar_chart: page {} of {}", w.offset() + 1, w.step_count(len));
            offset.set(w.offset());
        }
    };
    let on_next = move |_: ()| step(PageAction::Next);
    let on_back = move |_: ()| step(PageAction::Back);
    let on_jump = move |page: usize| step(PageAction::Jump(page));

    rsx! {
        div {
            "data-testid": "bar-chart-wrapper",
            style: "position: relative; width: 100%;",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            ChartContainer {
                id: props.id.clone(),
                min_height: 300,
            }

            if stepper.is_rendered() {
                BarChartStepper {
                    view: stepper,
                    on_back: on_back,
                    on_next: on_next,
                    on_jump: on_jump,
                }
            }
        }
    }
}
