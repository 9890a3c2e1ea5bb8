//! Core UI functionality for widgetkit.
//!
//! This module contains the building blocks every component shares: the
//! [`Component`] trait, the [`Action`] values components emit, and the
//! [`EventHandler`] that turns terminal input and timer ticks into events.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and the gallery's demo list
//! - [`component`] - Base component trait and rendering abstraction
//! - [`event_handler`] - Keyboard, resize and tick event processing
//!
//! # Architecture
//!
//! Components own their presentation state (current page, open calendar,
//! expanded accordion items). They translate key events into [`Action`]s,
//! apply actions in [`Component::update`], and call the pure pagination and
//! calendar functions with their current state on every render.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, Demo};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
