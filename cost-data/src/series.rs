//! Bar and tooltip primitives for the chart renderer.
//!
//! Each visible resource becomes one [`BarPoint`] with a previous and a
//! current bar. Tooltip text is produced here by a caller-supplied
//! [`TooltipFormatter`], so the renderer only draws what it is given.

use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// Fill colors and series names for the two bars of each resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarChartData {
    pub previous_fill: String,
    pub current_fill: String,
    pub previous_name: String,
    pub current_name: String,
}

impl BarChartData {
    pub fn fill(&self, series: Series) -> &str {
        match series {
            Series::Previous => &self.previous_fill,
            Series::Current => &self.current_fill,
        }
    }

    pub fn name(&self, series: Series) -> &str {
        match series {
            Series::Previous => &self.previous_name,
            Series::Current => &self.current_name,
        }
    }
}

/// Which period a bar represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    Previous,
    Current,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::Previous, Series::Current];

    pub fn value(self, resource: &Resource) -> f64 {
        match self {
            Series::Previous => resource.previous,
            Series::Current => resource.current,
        }
    }
}

/// One plotted value, as handed to a tooltip formatter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TooltipPayload {
    /// Resource name the bar belongs to.
    pub label: String,
    pub series: Series,
    /// Series display name from [`BarChartData`].
    pub name: String,
    pub value: f64,
    pub fill: String,
}

/// A formatted tooltip row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TooltipItem {
    pub label: String,
    pub value: String,
    pub fill: String,
}

/// Maps a plotted value to a tooltip row.
pub trait TooltipFormatter {
    fn tooltip_item(&self, payload: &TooltipPayload) -> TooltipItem;
}

impl<F> TooltipFormatter for F
where
    F: Fn(&TooltipPayload) -> TooltipItem,
{
    fn tooltip_item(&self, payload: &TooltipPayload) -> TooltipItem {
        self(payload)
    }
}

/// One resource's bars and tooltip rows, serialized for D3.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarPoint {
    pub label: String,
    pub previous: f64,
    pub current: f64,
    pub tooltip: Vec<TooltipItem>,
}

/// Renderer options passed alongside the bar points.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    #[serde(flatten)]
    pub bars: BarChartData,
    /// Size to the container width instead of a fixed width.
    pub responsive: bool,
}

/// Build the bar points for the visible resources.
pub fn bar_points<F>(visible: &[Resource], data: &BarChartData, formatter: &F) -> Vec<BarPoint>
where
    F: TooltipFormatter + ?Sized,
{
    visible
        .iter()
        .map(|resource| BarPoint {
            label: resource.name.clone(),
            previous: resource.previous,
            current: resource.current,
            tooltip: Series::ALL
                .iter()
                .map(|&series| {
                    formatter.tooltip_item(&TooltipPayload {
                        label: resource.name.clone(),
                        series,
                        name: data.name(series).to_string(),
                        value: series.value(resource),
                        fill: data.fill(series).to_string(),
                    })
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_data() -> BarChartData {
        BarChartData {
            previous_fill: "#ccc".to_string(),
            current_fill: "#06f".to_string(),
            previous_name: "Last Month".to_string(),
            current_name: "This Month".to_string(),
        }
    }

    #[test]
    fn test_bar_points_use_injected_formatter() {
        let visible = vec![Resource::new("db", 10.0, 20.0)];
        let formatter = |p: &TooltipPayload| TooltipItem {
            label: format!("{} / {}", p.label, p.name),
            value: format!("{:.1}", p.value),
            fill: p.fill.clone(),
        };
        let points = bar_points(&visible, &chart_data(), &formatter);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "db");
        assert_eq!(
            points[0].tooltip,
            vec![
                TooltipItem {
                    label: "db / Last Month".to_string(),
                    value: "10.0".to_string(),
                    fill: "#ccc".to_string(),
                },
                TooltipItem {
                    label: "db / This Month".to_string(),
                    value: "20.0".to_string(),
                    fill: "#06f".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_bar_points_empty() {
        let formatter = |p: &TooltipPayload| TooltipItem {
            label: p.label.clone(),
            value: String::new(),
            fill: p.fill.clone(),
        };
        assert!(bar_points(&[], &chart_data(), &formatter).is_empty());
    }

    #[test]
    fn test_config_serializes_flat_camel_case() {
        let config = BarChartConfig {
            bars: chart_data(),
            responsive: false,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["previousFill"], "#ccc");
        assert_eq!(json["currentName"], "This Month");
        assert_eq!(json["responsive"], false);
    }
}
