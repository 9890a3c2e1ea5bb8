//! Utility modules for widgetkit.
//!
//! Helpers shared by the calendar core, the configuration layer and the
//! components.
//!
//! - [`datetime`] - Date parsing, formatting and calendar labels

pub mod datetime;
