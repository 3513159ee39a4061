//! Data layer for the cost insight widgets.
//!
//! Everything here is pure and renderer-agnostic so it can be tested natively:
//! - `resource`: the `Resource` model, CSV loading and the display sorter
//! - `pager`: fixed-size paging over a sorted list
//! - `stepper`: hover/count visibility rules for the bar chart stepper
//! - `series`: bar and tooltip primitives handed to the chart renderer
//! - `table`: column definitions, filter predicates and sorting for tables
//! - `format`: currency and percentage formatting

pub mod format;
pub mod pager;
pub mod resource;
pub mod series;
pub mod stepper;
pub mod table;
