//! widgetkit - reusable terminal UI widgets
//!
//! This library provides a small set of widgets for Ratatui applications:
//! a pagination strip, a date picker with a month calendar popup, an
//! accordion, a text input, a card, a modal dialog and a loading indicator
//! with skeleton placeholders. The page-window and
//! calendar-grid logic behind them is plain data and usable on its own.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`pagination`] - Page window computation with ellipsis markers
//! * [`calendar`] - Month grids, date bounds and day comparisons
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components and the widget gallery
//! * [`utils`] - Date formatting helpers

/// Month grid construction and date helpers for the date picker
pub mod calendar;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error type returned by the pagination and calendar functions
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Page window computation for the pagination widget
pub mod pagination;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

pub use error::{Result, WidgetError};
