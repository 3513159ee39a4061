//! The `Resource` model, CSV loading, and the display sorter.
//!
//! # CSV Format
//!
//! Resources are loaded from a headered CSV: `name,previous,current,category`.
//! The `category` column is optional and may be left empty.
//!
//! ```text
//! name,previous,current,category
//! api-gateway,1200,1850.5,compute
//! logs-bucket,300,240,storage
//! ```

use serde::Serialize;
use std::cmp::Ordering;

/// A named cost-bearing entity with a prior-period and a current-period cost.
/// Serialize-only: loading goes through [`load_resources`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Resource {
    pub name: String,
    /// Cost over the previous period.
    pub previous: f64,
    /// Cost over the current period.
    pub current: f64,
    /// Optional grouping used by table filters (e.g. "compute", "storage").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Resource {
    pub fn new(name: impl Into<String>, previous: f64, current: f64) -> Self {
        Self {
            name: name.into(),
            previous,
            current,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Absolute change between periods (`current - previous`).
    pub fn change(&self) -> f64 {
        self.current - self.previous
    }

    /// Relative change between periods, or `None` when there is no previous cost.
    pub fn change_ratio(&self) -> Option<f64> {
        if self.previous == 0.0 {
            None
        } else {
            Some(self.change() / self.previous)
        }
    }
}

/// Display ordering: current cost descending, ties broken by previous cost ascending.
fn display_order(a: &Resource, b: &Resource) -> Ordering {
    b.current
        .total_cmp(&a.current)
        .then_with(|| a.previous.total_cmp(&b.previous))
}

/// Sort resources for display, most expensive first.
///
/// Returns a new vector and leaves the input untouched. The sort is stable, so
/// resources with identical costs keep their relative input order.
pub fn sort_resources(resources: &[Resource]) -> Vec<Resource> {
    let mut sorted = resources.to_vec();
    sorted.sort_by(display_order);
    sorted
}

/// Parse resources from a headered CSV string.
///
/// Rows with a blank name are skipped. Unparseable cost values are an error,
/// reported with the offending line number.
pub fn load_resources(csv_data: &str) -> anyhow::Result<Vec<Resource>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut resources = Vec::new();
    let mut skipped = 0u32;
    for (index, result) in rdr.records().enumerate() {
        let r = result?;
        // header is line 1
        let line = index + 2;
        let name = r.get(0).unwrap_or("").trim();
        if name.is_empty() {
            skipped += 1;
            continue;
        }
        let previous = parse_cost(r.get(1), "previous", line)?;
        let current = parse_cost(r.get(2), "current", line)?;
        let category = r
            .get(3)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        resources.push(Resource {
            name: name.to_string(),
            previous,
            current,
            category,
        });
    }
    log::info!(
        "loader: loaded {} resources ({} skipped)",
        resources.len(),
        skipped
    );
    Ok(resources)
}

fn parse_cost(field: Option<&str>, column: &str, line: usize) -> anyhow::Result<f64> {
    let raw = field.unwrap_or("").trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .map_err(|e| anyhow::anyhow!("Invalid {} cost {:?} on line {}: {}", column, raw, line, e))
}
