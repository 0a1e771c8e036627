//! Rendering of results as JSON or coloured terminal tables.

pub mod json;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_comparison, format_critical_values, format_effect};
