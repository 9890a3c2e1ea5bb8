//! Modal dialog component

use crate::ui::components::common::{create_instructions_paragraph, create_titled_block, shortcuts};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Share of the screen a modal covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl ModalSize {
    pub const ALL: [ModalSize; 5] = [ModalSize::Sm, ModalSize::Md, ModalSize::Lg, ModalSize::Xl, ModalSize::Full];

    pub fn name(self) -> &'static str {
        match self {
            ModalSize::Sm => "sm",
            ModalSize::Md => "md",
            ModalSize::Lg => "lg",
            ModalSize::Xl => "xl",
            ModalSize::Full => "full",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|size| *size == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// (width %, height %)
    pub fn percentages(self) -> (u16, u16) {
        match self {
            ModalSize::Sm => (40, 30),
            ModalSize::Md => (50, 40),
            ModalSize::Lg => (60, 50),
            ModalSize::Xl => (75, 65),
            ModalSize::Full => (96, 92),
        }
    }
}

pub struct ModalComponent {
    pub title: Option<String>,
    pub body: Vec<String>,
    pub size: ModalSize,
    pub show_close_button: bool,
    pub close_on_esc: bool,
    is_open: bool,
}

impl Default for ModalComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalComponent {
    pub fn new() -> Self {
        Self {
            title: None,
            body: Vec::new(),
            size: ModalSize::default(),
            show_close_button: true,
            close_on_esc: true,
            is_open: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) -> Action {
        if !self.is_open {
            return Action::None;
        }
        self.is_open = false;
        Action::ModalClosed
    }

    /// Area the modal occupies inside `rect`
    pub fn area(&self, rect: Rect) -> Rect {
        let (percent_x, percent_y) = self.size.percentages();
        LayoutManager::centered_rect(percent_x, percent_y, rect)
    }
}

impl Component for ModalComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_open {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc if self.close_on_esc => self.close(),
            KeyCode::Char('x') if self.show_close_button => self.close(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_open {
            return;
        }

        let area = self.area(rect);
        f.render_widget(Clear, area);

        let title = self.title.clone().map(|title| format!(" {} ", title)).unwrap_or_default();
        let block = create_titled_block(title, Color::Yellow);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let lines: Vec<Line> = self.body.iter().map(|line| Line::from(line.as_str())).collect();
        let body = Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        f.render_widget(body, chunks[0]);

        let mut instructions = Vec::new();
        if self.close_on_esc {
            instructions.push(shortcuts::ESC_CLOSE);
        }
        if self.show_close_button {
            if !instructions.is_empty() {
                instructions.push(shortcuts::SEPARATOR);
            }
            instructions.push(shortcuts::X_CLOSE);
        }
        f.render_widget(create_instructions_paragraph(&instructions), chunks[1]);
    }
}
