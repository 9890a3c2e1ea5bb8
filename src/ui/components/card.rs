//! Card component: a framed panel with optional header and footer sections.

use crate::constants::TITLE_CARD;
use crate::ui::components::common::MUTED;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

const SHADOW: Color = Color::Indexed(236);
const FILL: Color = Color::Indexed(237);

/// How the card is set apart from its surroundings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// Rounded border with a drop shadow
    #[default]
    Elevated,
    /// Plain border, no shadow
    Outlined,
    /// Filled background, no border
    Filled,
}

impl CardVariant {
    pub const ALL: [CardVariant; 3] = [CardVariant::Elevated, CardVariant::Outlined, CardVariant::Filled];

    pub fn name(self) -> &'static str {
        match self {
            CardVariant::Elevated => "elevated",
            CardVariant::Outlined => "outlined",
            CardVariant::Filled => "filled",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardPadding {
    pub const ALL: [CardPadding; 4] = [CardPadding::None, CardPadding::Sm, CardPadding::Md, CardPadding::Lg];

    pub fn name(self) -> &'static str {
        match self {
            CardPadding::None => "none",
            CardPadding::Sm => "sm",
            CardPadding::Md => "md",
            CardPadding::Lg => "lg",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Inner spacing in cells
    pub fn padding(self) -> Padding {
        match self {
            CardPadding::None => Padding::ZERO,
            CardPadding::Sm => Padding::horizontal(1),
            CardPadding::Md => Padding::symmetric(2, 1),
            CardPadding::Lg => Padding::symmetric(4, 1),
        }
    }
}

#[derive(Default)]
pub struct CardComponent {
    pub header: Option<String>,
    pub body: Vec<String>,
    pub footer: Option<String>,
    pub variant: CardVariant,
    pub padding: CardPadding,
}

impl CardComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
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

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_padding(mut self, padding: CardPadding) -> Self {
        self.padding = padding;
        self
    }

    fn block(&self) -> Block<'static> {
        let block = Block::default().padding(self.padding.padding());
        match self.variant {
            CardVariant::Elevated => block
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::White)),
            CardVariant::Outlined => block
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .style(Style::default().fg(Color::Gray)),
            CardVariant::Filled => block.style(Style::default().fg(Color::White).bg(FILL)),
        }
    }

    /// Area left for the card once the shadow of an elevated card is carved out
    pub fn card_area(&self, rect: Rect) -> Rect {
        if self.variant == CardVariant::Elevated && rect.width > 2 && rect.height > 2 {
            Rect {
                width: rect.width - 1,
                height: rect.height - 1,
                ..rect
            }
        } else {
            rect
        }
    }

    fn separator(width: u16) -> Paragraph<'static> {
        Paragraph::new("─".repeat(width as usize)).style(Style::default().fg(MUTED))
    }
}

impl Component for CardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('v') => self.variant = self.variant.next(),
            KeyCode::Char('p') => self.padding = self.padding.next(),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = self.card_area(rect);
        if area != rect {
            let shadow = Rect {
                x: rect.x + 1,
                y: rect.y + 1,
                ..area
            };
            f.render_widget(Block::default().style(Style::default().bg(SHADOW)), shadow);
        }
        f.render_widget(Clear, area);

        let block = self.block();
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut constraints = Vec::new();
        if self.header.is_some() {
            constraints.extend([Constraint::Length(1), Constraint::Length(1)]);
        }
        constraints.push(Constraint::Min(0));
        if self.footer.is_some() {
            constraints.extend([Constraint::Length(1), Constraint::Length(1)]);
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let mut index = 0;
        if let Some(header) = &self.header {
            let title = Paragraph::new(header.clone()).style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(title, chunks[0]);
            f.render_widget(Self::separator(inner.width), chunks[1]);
            index = 2;
        }

        let body: Vec<Line> = self.body.iter().map(|line| Line::from(line.as_str())).collect();
        f.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), chunks[index]);

        if let Some(footer) = &self.footer {
            f.render_widget(Self::separator(inner.width), chunks[index + 1]);
            let footer = Paragraph::new(footer.clone()).style(Style::default().fg(Color::Gray));
            f.render_widget(footer, chunks[index + 2]);
        }
    }
}

/// Titled frame for the card demo, naming the variant and padding
pub fn card_frame_title(component: &CardComponent) -> String {
    format!(
        "{}- {} / {} ",
        TITLE_CARD,
        component.variant.name(),
        component.padding.name()
    )
}
