//! Output formatting for validation results.
//!
//! - [`terminal`] - aligned, coloured result rows

mod terminal;

pub use terminal::{format_field, ResultRow};
