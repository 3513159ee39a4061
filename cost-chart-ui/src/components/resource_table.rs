//! Filterable, sortable table of resources.
//!
//! Filtering and sorting run in Rust on every render; the D3 table only draws
//! the preformatted rows.

use crate::components::{ChartContainer, TableFilter};
use crate::js_bridge;
use cost_data::resource::Resource;
use cost_data::table::{
    apply_table, filter_options, filters_for, reconcile_filters, resource_columns, table_rows, Column, Filter,
    SortDirection, SortOrder,
};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ResourceTableProps {
    /// The DOM id D3 renders the table into
    pub id: String,
    #[props(default)]
    pub resources: Vec<Resource>,
    #[props(default = resource_columns())]
    pub columns: Vec<Column>,
    /// Initial sort; defaults to current cost, most expensive first
    #[props(default = SortOrder::new("current", SortDirection::Desc))]
    pub default_sort: SortOrder,
}

#[component]
pub fn ResourceTable(props: ResourceTableProps) -> Element {
    let initial_filters = filters_for(&props.columns);
    let mut filters = use_signal(move || initial_filters);
    let initial_sort = props.default_sort.clone();
    let mut sort = use_signal(move || initial_sort);

    let active_filters = filters();
    let order = sort();
    let visible = apply_table(&props.resources, &active_filters, Some(&order));
    let data_json = serde_json::to_string(&table_rows(&visible, &props.columns)).unwrap_or_default();
    let config_json = serde_json::json!({
        "columns": props.columns,
        "sort": { "field": order.field, "direction": order.direction.as_str() },
        "emptyMessage": "No resources match the selected filters",
    })
    .to_string();
    let id = props.id.clone();

    use_effect(use_reactive!(|(id, data_json, config_json)| {
        js_bridge::init_charts();
        js_bridge::render_data_table(&id, &data_json, &config_json);
    }));

    // Rebuild filters when the caller swaps the column set
    let columns = props.columns.clone();
    use_effect(use_reactive!(|(columns,)| {
        let current = filters.peek().clone();
        let reconciled = reconcile_filters(&current, &columns);
        if reconciled != current {
            filters.set(reconciled);
        }
    }));

    let cleanup_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&cleanup_id));

    let filter_controls: Vec<(String, Filter, Vec<String>)> = active_filters
        .iter()
        .map(|f| {
            let title = props
                .columns
                .iter()
                .find(|c| c.field == f.field)
                .map(|c| c.title.clone())
                .unwrap_or_else(|| f.field.clone());
            (title, f.clone(), filter_options(&props.resources, &f.field))
        })
        .collect();
    let sortable: Vec<Column> = props.columns.iter().filter(|c| c.sortable).cloned().collect();
    let count = visible.len();
    let total = props.resources.len();

    rsx! {
        div {
            "data-testid": "resource-table",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin: 8px 0;",
                for (title, filter, options) in filter_controls {
                    TableFilter {
                        key: "{filter.field}",
                        title: title,
                        filter: filter,
                        options: options,
                        on_change: move |changed: Filter| {
                            log::debug!("resource_table: filter {} -> {:?}", changed.field, changed.selected);
                            filters.with_mut(|all| {
                                if let Some(slot) = all.iter_mut().find(|f| f.field == changed.field) {
                                    *slot = changed;
                                }
                            });
                        },
                    }
                }
                label {
                    style: "font-size: 13px;",
                    "Sort by: "
                    select {
                        onchange: move |evt: Event<FormData>| {
                            let field = evt.value();
                            sort.with_mut(|s| s.field = field);
                        },
                        for col in sortable.iter() {
                            option {
                                key: "{col.field}",
                                value: "{col.field}",
                                selected: col.field == order.field,
                                "{col.title}"
                            }
                        }
                    }
                    select {
                        onchange: move |evt: Event<FormData>| {
                            if let Some(direction) = SortDirection::parse(&evt.value()) {
                                sort.with_mut(|s| s.direction = direction);
                            }
                        },
                        option { value: "desc", selected: order.direction == SortDirection::Desc, "Descending" }
                        option { value: "asc", selected: order.direction == SortDirection::Asc, "Ascending" }
                    }
                }
                span {
                    style: "font-size: 12px; color: #757575;",
                    "{count} of {total} resources"
                }
            }
            ChartContainer {
                id: props.id.clone(),
                min_height: 200,
            }
        }
    }
}
