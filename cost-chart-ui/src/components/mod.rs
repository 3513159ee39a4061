//! Reusable Dioxus RSX components for cost insight pages.

mod bar_chart;
mod bar_chart_legend;
mod bar_chart_stepper;
mod chart_container;
mod chart_header;
mod display_amount_selector;
mod error_display;
mod loading_spinner;
mod resource_table;
mod table_filter;

pub use bar_chart::BarChart;
pub use bar_chart_legend::BarChartLegend;
pub use bar_chart_stepper::BarChartStepper;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use display_amount_selector::DisplayAmountSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use resource_table::ResourceTable;
pub use table_filter::TableFilter;
