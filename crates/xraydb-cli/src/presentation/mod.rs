//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: lookups belong in the handlers or in
//! core services.

pub mod summary;
pub mod tables;

pub use summary::{format_element_summary, format_line, format_transitions};
pub use tables::{format_optional, format_value, separator};
