//! Pagination strip component.
//!
//! Renders first/previous controls, the page markers computed by
//! [`crate::pagination`], and next/last controls on a single line. The
//! component only emits [`Action::PageChanged`]; the page actually moves when
//! that action comes back through [`Component::update`], so the owner can veto
//! or redirect page changes.

use crate::config::PaginationConfig;
use crate::constants::{ELLIPSIS, TITLE_PAGINATION};
use crate::pagination::{PageMarker, PageWindow, DEFAULT_SIBLING_COUNT};
use crate::ui::components::common::{create_titled_block, ACCENT, MUTED};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use serde::{Deserialize, Serialize};

/// Width of each pagination cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl PaginationSize {
    /// Columns used by a single control, borders excluded
    pub fn cell_width(self) -> usize {
        match self {
            PaginationSize::Sm => 3,
            PaginationSize::Md => 5,
            PaginationSize::Lg => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    First,
    Previous,
    Page(u32),
    Ellipsis,
    Next,
    Last,
}

/// One drawable entry of the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    pub kind: ControlKind,
    pub enabled: bool,
    pub active: bool,
}

impl PaginationControl {
    pub fn label(&self) -> String {
        match self.kind {
            ControlKind::First => "«".to_string(),
            ControlKind::Previous => "‹".to_string(),
            ControlKind::Page(page) => page.to_string(),
            ControlKind::Ellipsis => ELLIPSIS.to_string(),
            ControlKind::Next => "›".to_string(),
            ControlKind::Last => "»".to_string(),
        }
    }
}

pub struct PaginationComponent {
    pub current_page: u32,
    pub total_pages: u32,
    pub sibling_count: u32,
    pub show_first_last: bool,
    pub show_prev_next: bool,
    pub disabled: bool,
    pub size: PaginationSize,
}

impl Default for PaginationComponent {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PaginationComponent {
    pub fn new(total_pages: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages.max(1),
            sibling_count: DEFAULT_SIBLING_COUNT,
            show_first_last: true,
            show_prev_next: true,
            disabled: false,
            size: PaginationSize::default(),
        }
    }

    pub fn from_config(config: &PaginationConfig) -> Self {
        Self {
            sibling_count: config.sibling_count,
            show_first_last: config.show_first_last,
            show_prev_next: config.show_prev_next,
            size: config.size,
            ..Self::new(config.demo_pages)
        }
    }

    /// Markers for the current state; out-of-range values are clamped
    pub fn markers(&self) -> Vec<PageMarker> {
        PageWindow::clamped(self.current_page, self.total_pages, self.sibling_count).markers()
    }

    pub fn can_go_back(&self) -> bool {
        !self.disabled && self.current_page > 1
    }

    pub fn can_go_forward(&self) -> bool {
        !self.disabled && self.current_page < self.total_pages
    }

    /// Ask for `page`.
    ///
    /// Emits [`Action::PageChanged`] only for an in-range page that differs
    /// from the current one while the control is enabled.
    pub fn request_page(&self, page: u32) -> Action {
        if self.disabled || page == 0 || page > self.total_pages || page == self.current_page {
            return Action::None;
        }
        Action::PageChanged(page)
    }

    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.total_pages.max(1));
    }

    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.set_page(self.current_page);
    }

    /// Everything the strip draws, left to right
    pub fn controls(&self) -> Vec<PaginationControl> {
        let mut controls = Vec::new();
        let back = self.can_go_back();
        let forward = self.can_go_forward();

        if self.show_first_last {
            controls.push(PaginationControl {
                kind: ControlKind::First,
                enabled: back,
                active: false,
            });
        }
        if self.show_prev_next {
            controls.push(PaginationControl {
                kind: ControlKind::Previous,
                enabled: back,
                active: false,
            });
        }

        for marker in self.markers() {
            controls.push(match marker {
                PageMarker::Page(page) => PaginationControl {
                    kind: ControlKind::Page(page),
                    enabled: !self.disabled,
                    active: page == self.current_page,
                },
                PageMarker::Ellipsis => PaginationControl {
                    kind: ControlKind::Ellipsis,
                    enabled: false,
                    active: false,
                },
            });
        }

        if self.show_prev_next {
            controls.push(PaginationControl {
                kind: ControlKind::Next,
                enabled: forward,
                active: false,
            });
        }
        if self.show_first_last {
            controls.push(PaginationControl {
                kind: ControlKind::Last,
                enabled: forward,
                active: false,
            });
        }

        controls
    }

    fn control_span(&self, control: &PaginationControl) -> Span<'static> {
        let width = self.size.cell_width();
        let text = format!("{:^width$}", control.label());

        let style = if control.active {
            Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else if control.kind == ControlKind::Ellipsis {
            Style::default().fg(Color::Gray)
        } else if !control.enabled {
            Style::default().fg(MUTED)
        } else {
            Style::default().fg(Color::White)
        };

        Span::styled(text, style)
    }

    /// The strip as a single line
    pub fn line(&self) -> Line<'static> {
        let spans: Vec<Span<'static>> = self
            .controls()
            .iter()
            .map(|control| self.control_span(control))
            .collect();
        Line::from(spans)
    }
}

impl Component for PaginationComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.request_page(self.current_page.saturating_sub(1)),
            KeyCode::Right | KeyCode::Char('l') => self.request_page(self.current_page.saturating_add(1)),
            KeyCode::Home | KeyCode::Char('g') => self.request_page(1),
            KeyCode::End | KeyCode::Char('G') => self.request_page(self.total_pages),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::PageChanged(page) = action {
            log::debug!("Pagination moved from page {} to {}", self.current_page, page);
            self.set_page(page);
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!("{}- page {} of {} ", TITLE_PAGINATION, self.current_page, self.total_pages);
        let paragraph = Paragraph::new(self.line())
            .block(create_titled_block(title, Color::Cyan))
            .alignment(Alignment::Center);

        f.render_widget(paragraph, rect);
    }
}
