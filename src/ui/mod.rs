//! UI module for widgetkit
//!
//! This module holds the widget components, the gallery application that
//! hosts them, and the terminal event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
