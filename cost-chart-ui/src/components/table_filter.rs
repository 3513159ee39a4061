//! Filter controls for a single table column.

use cost_data::table::{Filter, FilterKind};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TableFilterProps {
    pub title: String,
    pub filter: Filter,
    /// Distinct values available in the column
    pub options: Vec<String>,
    pub on_change: EventHandler<Filter>,
}

/// A dropdown for `Select` filters, a checkbox group for `MultipleSelect`.
#[component]
pub fn TableFilter(props: TableFilterProps) -> Element {
    let filter = props.filter.clone();
    let on_change = props.on_change;
    let testid = format!("table-filter-{}", filter.field);

    match filter.kind {
        FilterKind::Select => {
            let selected = filter.selected.first().cloned().unwrap_or_default();
            rsx! {
                label {
                    "data-testid": "{testid}",
                    style: "font-size: 13px;",
                    "{props.title}: "
                    select {
                        onchange: move |evt: Event<FormData>| {
                            let mut next = filter.clone();
                            let value = evt.value();
                            next.selected = if value.is_empty() { Vec::new() } else { vec![value] };
                            on_change.call(next);
                        },
                        option { value: "", selected: selected.is_empty(), "All" }
                        for opt in props.options.iter() {
                            option {
                                key: "{opt}",
                                value: "{opt}",
                                selected: *opt == selected,
                                "{opt}"
                            }
                        }
                    }
                }
            }
        }
        FilterKind::MultipleSelect => rsx! {
            fieldset {
                "data-testid": "{testid}",
                style: "display: inline-flex; gap: 8px; border: 1px solid #E0E0E0; border-radius: 4px; font-size: 13px;",
                legend { "{props.title}" }
                for opt in props.options.iter().cloned() {
                    label {
                        key: "{opt}",
                        input {
                            r#type: "checkbox",
                            checked: filter.selected.contains(&opt),
                            onchange: {
                                let filter = filter.clone();
                                let opt = opt.clone();
                                move |evt: Event<FormData>| {
                                    let mut next = filter.clone();
                                    next.selected.retain(|s| *s != opt);
                                    if evt.checked() {
                                        next.selected.push(opt.clone());
                                    }
                                    on_change.call(next);
                                }
                            },
                        }
                        " {opt}"
                    }
                }
            }
        },
    }
}
