//! Shared Dioxus components and D3.js bridge for the cost insight widgets.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js bar chart and table via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (paged bar chart, stepper, table, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
