//! Column definitions, filter predicates and sorting for data tables.
//!
//! Rows are anything implementing [`TableRecord`]. Filtering and sorting run
//! here; the D3 table only draws the rows it is handed, already formatted.

use crate::format::{format_change, format_currency};
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A single table cell.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Text used for filter matching and option lists.
    pub fn as_filter_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
        }
    }

    fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            // numbers before text when a column mixes both
            (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// A row that can be looked up by field name.
pub trait TableRecord {
    fn cell(&self, field: &str) -> Option<CellValue>;
}

impl TableRecord for Resource {
    fn cell(&self, field: &str) -> Option<CellValue> {
        match field {
            "name" => Some(CellValue::Text(self.name.clone())),
            "category" => self.category.clone().map(CellValue::Text),
            "previous" => Some(CellValue::Number(self.previous)),
            "current" => Some(CellValue::Number(self.current)),
            "change" => Some(CellValue::Number(self.change())),
            "ratio" => self.change_ratio().map(CellValue::Number),
            _ => None,
        }
    }
}

/// How a column's cells are displayed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFormat {
    #[default]
    Text,
    Currency,
    Percent,
}

impl ColumnFormat {
    pub fn display(self, cell: Option<&CellValue>) -> String {
        match (self, cell) {
            (ColumnFormat::Percent, None) => format_change(None),
            (_, None) => String::new(),
            (ColumnFormat::Currency, Some(CellValue::Number(n))) => format_currency(*n),
            (ColumnFormat::Percent, Some(CellValue::Number(n))) => format_change(Some(*n)),
            (_, Some(cell)) => cell.as_filter_text(),
        }
    }
}

/// Filter widget kind for a column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Select,
    MultipleSelect,
}

/// A table column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Column {
    pub field: String,
    pub title: String,
    pub format: ColumnFormat,
    pub sortable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterKind>,
}

impl Column {
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
            format: ColumnFormat::Text,
            sortable: false,
            filter: None,
        }
    }

    pub fn format(mut self, format: ColumnFormat) -> Self {
        self.format = format;
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filter(mut self, kind: FilterKind) -> Self {
        self.filter = Some(kind);
        self
    }
}

/// The default column set for a resource table.
pub fn resource_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Resource").sortable(),
        Column::new("category", "Category")
            .sortable()
            .filter(FilterKind::MultipleSelect),
        Column::new("previous", "Previous")
            .format(ColumnFormat::Currency)
            .sortable(),
        Column::new("current", "Current")
            .format(ColumnFormat::Currency)
            .sortable(),
        Column::new("ratio", "Change")
            .format(ColumnFormat::Percent)
            .sortable(),
    ]
}

/// An active filter on one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub kind: FilterKind,
    pub selected: Vec<String>,
}

impl Filter {
    pub fn new(field: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            field: field.into(),
            kind,
            selected: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn matches<R: TableRecord + ?Sized>(&self, row: &R) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(cell) = row.cell(&self.field) else {
            return false;
        };
        let text = cell.as_filter_text();
        match self.kind {
            FilterKind::Select => self.selected.first() == Some(&text),
            FilterKind::MultipleSelect => self.selected.contains(&text),
        }
    }
}

/// Empty filters for every filterable column.
pub fn filters_for(columns: &[Column]) -> Vec<Filter> {
    columns
        .iter()
        .filter_map(|c| c.filter.map(|kind| Filter::new(c.field.clone(), kind)))
        .collect()
}

/// Filters for a (possibly changed) column set, keeping the selections of
/// columns that are still filterable with the same kind.
pub fn reconcile_filters(existing: &[Filter], columns: &[Column]) -> Vec<Filter> {
    filters_for(columns)
        .into_iter()
        .map(|fresh| {
            existing
                .iter()
                .find(|old| old.field == fresh.field && old.kind == fresh.kind)
                .cloned()
                .unwrap_or(fresh)
        })
        .collect()
}

/// Build a row predicate that passes when every active filter matches.
pub fn build_predicate<'a, R>(filters: &'a [Filter]) -> impl Fn(&R) -> bool + 'a
where
    R: TableRecord + ?Sized + 'a,
{
    move |row: &R| filters.iter().all(|f| f.matches(row))
}

/// Distinct, sorted text values of `field`, for populating filter options.
pub fn filter_options<R: TableRecord>(rows: &[R], field: &str) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.cell(field))
        .map(|c| c.as_filter_text())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Compare two rows. Missing cells sort last whatever the direction.
    pub fn compare<R: TableRecord + ?Sized>(&self, a: &R, b: &R) -> Ordering {
        match (a.cell(&self.field), b.cell(&self.field)) {
            (Some(x), Some(y)) => {
                let ord = x.compare(&y);
                match self.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Filter then (stably) sort the rows.
pub fn apply_table<'a, R: TableRecord>(
    rows: &'a [R],
    filters: &[Filter],
    sort: Option<&SortOrder>,
) -> Vec<&'a R> {
    let predicate = build_predicate::<R>(filters);
    let mut visible: Vec<&R> = rows.iter().filter(|r| predicate(*r)).collect();
    if let Some(order) = sort {
        visible.sort_by(|a, b| order.compare(*a, *b));
    }
    visible
}

/// Rows as JSON objects keyed by field, each cell formatted for its column.
pub fn table_rows<R: TableRecord>(rows: &[&R], columns: &[Column]) -> Vec<serde_json::Value> {
    rows.iter()
        .map(|row| {
            let cells: serde_json::Map<String, serde_json::Value> = columns
                .iter()
                .map(|col| {
                    let cell = row.cell(&col.field);
                    (
                        col.field.clone(),
                        serde_json::Value::String(col.format.display(cell.as_ref())),
                    )
                })
                .collect();
            serde_json::Value::Object(cells)
        })
        .collect()
}
