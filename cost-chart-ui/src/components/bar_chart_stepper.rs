//! Back/next buttons and position dots for the paged bar chart.

use cost_data::stepper::StepperView;
use dioxus::prelude::*;

const BUTTON_STYLE: &str = "position: absolute; top: 40%; width: 32px; height: 32px; border-radius: 50%; border: 1px solid #BDBDBD; background: #FFF; cursor: pointer; box-shadow: 0 1px 3px rgba(0,0,0,0.2);";

#[derive(Props, Clone, PartialEq)]
pub struct BarChartStepperProps {
    pub view: StepperView,
    pub on_back: EventHandler<()>,
    pub on_next: EventHandler<()>,
    /// Called with the page index of a clicked dot
    pub on_jump: EventHandler<usize>,
}

/// Stepper overlay. Controls only appear while the chart is hovered.
#[component]
pub fn BarChartStepper(props: BarChartStepperProps) -> Element {
    let view = props.view;
    let on_back = props.on_back;
    let on_next = props.on_next;
    let on_jump = props.on_jump;

    rsx! {
        div {
            "data-testid": "bar-chart-stepper",
            style: "display: flex; justify-content: center; gap: 6px; min-height: 16px; margin-top: 8px;",

            if view.show_back {
                button {
                    "data-testid": "bar-chart-step-back",
                    "aria-label": "Previous page",
                    style: "{BUTTON_STYLE} left: 0;",
                    onclick: move |_| on_back.call(()),
                    "‹"
                }
            }

            for page in 0..view.dot_count() {
                span {
                    key: "{page}",
                    "data-testid": "bar-chart-step-dot-{page}",
                    style: dot_style(page == view.active),
                    onclick: move |_| on_jump.call(page),
                }
            }

            if view.show_next {
                button {
                    "data-testid": "bar-chart-step-next",
                    "aria-label": "Next page",
                    style: "{BUTTON_STYLE} right: 0;",
                    onclick: move |_| on_next.call(()),
                    "›"
                }
            }
        }
    }
}

fn dot_style(active: bool) -> String {
    let color = if active { "#1976D2" } else { "#BDBDBD" };
    format!(
        "display: inline-block; width: 8px; height: 8px; border-radius: 50%; cursor: pointer; background: {};",
        color
    )
}
