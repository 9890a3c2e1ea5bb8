//! Reusable UI components

pub mod common;

pub mod accordion;
pub mod card;
pub mod date_picker;
pub mod input;
pub mod loading;
pub mod modal;
pub mod pagination;
pub mod status_bar;

// Component exports
pub use accordion::{render_item_lines, AccordionComponent, AccordionItem, AccordionState};
pub use card::{card_frame_title, CardComponent, CardPadding, CardVariant};
pub use date_picker::DatePickerComponent;
pub use input::InputComponent;
pub use loading::{loading_frame_title, LoadingComponent, LoadingSize, LoadingVariant, Skeleton};
pub use modal::{ModalComponent, ModalSize};
pub use pagination::{ControlKind, PaginationComponent, PaginationControl, PaginationSize};
pub use status_bar::StatusBar;
