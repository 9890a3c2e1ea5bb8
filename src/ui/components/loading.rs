//! Loading indicator component.
//!
//! Frames advance on every [`Component::on_tick`]; the indicator draws
//! nothing while `is_loading` is false. [`LoadingComponent::inline_line`]
//! gives the same indicator as a single line for embedding in other text,
//! and [`Skeleton`] draws placeholder blocks for content still on its way.

use crate::config::LoadingConfig;
use crate::constants::{LOADING_TEXT, PAGE_LOADING_TEXT, TITLE_LOADING};
use crate::ui::components::common::ACCENT;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const DOTS_FRAMES: &[&str] = &["·  ", "·· ", "···", " ··", "  ·", "   "];
const PULSE_FRAMES: &[&str] = &["·", "•", "●", "•"];
const BARS_FRAMES: &[&str] = &["▁▃▅▇", "▃▅▇▅", "▅▇▅▃", "▇▅▃▁", "▅▃▁▃", "▃▁▃▅"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingVariant {
    #[default]
    Spinner,
    Dots,
    Pulse,
    Bars,
}

impl LoadingVariant {
    pub const ALL: [LoadingVariant; 4] = [
        LoadingVariant::Spinner,
        LoadingVariant::Dots,
        LoadingVariant::Pulse,
        LoadingVariant::Bars,
    ];

    pub fn frames(self) -> &'static [&'static str] {
        match self {
            LoadingVariant::Spinner => SPINNER_FRAMES,
            LoadingVariant::Dots => DOTS_FRAMES,
            LoadingVariant::Pulse => PULSE_FRAMES,
            LoadingVariant::Bars => BARS_FRAMES,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LoadingVariant::Spinner => "spinner",
            LoadingVariant::Dots => "dots",
            LoadingVariant::Pulse => "pulse",
            LoadingVariant::Bars => "bars",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl LoadingSize {
    pub const ALL: [LoadingSize; 5] = [
        LoadingSize::Xs,
        LoadingSize::Sm,
        LoadingSize::Md,
        LoadingSize::Lg,
        LoadingSize::Xl,
    ];

    /// Blank lines above and below the indicator
    pub fn padding(self) -> u16 {
        match self {
            LoadingSize::Xs | LoadingSize::Sm => 0,
            LoadingSize::Md | LoadingSize::Lg => 1,
            LoadingSize::Xl => 2,
        }
    }

    pub fn text_style(self) -> Style {
        let style = Style::default().fg(Color::Gray);
        match self {
            LoadingSize::Xs => style.add_modifier(Modifier::DIM),
            LoadingSize::Sm | LoadingSize::Md => style,
            LoadingSize::Lg | LoadingSize::Xl => style.add_modifier(Modifier::BOLD),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LoadingSize::Xs => "xs",
            LoadingSize::Sm => "sm",
            LoadingSize::Md => "md",
            LoadingSize::Lg => "lg",
            LoadingSize::Xl => "xl",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

pub struct LoadingComponent {
    pub is_loading: bool,
    pub text: Option<String>,
    pub variant: LoadingVariant,
    pub size: LoadingSize,
    /// Clear the area before drawing, covering whatever was under it
    pub overlay: bool,
    /// Cover the whole frame instead of the given area
    pub full_screen: bool,
    frame: usize,
}

impl Default for LoadingComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingComponent {
    pub fn new() -> Self {
        Self {
            is_loading: true,
            text: Some(LOADING_TEXT.to_string()),
            variant: LoadingVariant::default(),
            size: LoadingSize::default(),
            overlay: false,
            full_screen: false,
            frame: 0,
        }
    }

    /// Full screen indicator for a page that is still loading
    pub fn page() -> Self {
        Self {
            text: Some(PAGE_LOADING_TEXT.to_string()),
            size: LoadingSize::Lg,
            full_screen: true,
            ..Self::new()
        }
    }

    pub fn from_config(config: &LoadingConfig) -> Self {
        Self {
            text: (!config.text.is_empty()).then(|| config.text.clone()),
            variant: config.variant,
            size: config.size,
            ..Self::new()
        }
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn current_frame(&self) -> &'static str {
        let frames = self.variant.frames();
        frames[self.frame % frames.len()]
    }

    pub fn set_loading(&mut self, loading: bool) -> Action {
        if self.is_loading == loading {
            return Action::None;
        }
        self.is_loading = loading;
        self.frame = 0;
        Action::LoadingToggled(loading)
    }

    pub fn set_full_screen(&mut self, full_screen: bool) -> Action {
        if self.full_screen == full_screen {
            return Action::None;
        }
        self.full_screen = full_screen;
        Action::LoadingFullScreen(full_screen)
    }

    pub fn cycle_variant(&mut self) {
        self.variant = self.variant.next();
        self.frame = 0;
    }

    pub fn cycle_size(&mut self) {
        self.size = self.size.next();
    }

    /// Indicator and optional text, padded for the current size
    pub fn lines(&self) -> Vec<Line<'static>> {
        if !self.is_loading {
            return Vec::new();
        }

        let padding = self.size.padding() as usize;
        let mut lines = vec![Line::default(); padding];
        lines.push(Line::from(Span::styled(
            self.current_frame(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        if let Some(text) = &self.text {
            lines.push(Line::from(Span::styled(text.clone(), self.size.text_style())));
        }
        lines.extend(std::iter::repeat(Line::default()).take(padding));
        lines
    }

    /// Indicator and text on one line; empty while stopped
    pub fn inline_line(&self) -> Line<'static> {
        if !self.is_loading {
            return Line::default();
        }

        let mut spans = vec![Span::styled(self.current_frame(), Style::default().fg(ACCENT))];
        if let Some(text) = &self.text {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(text.clone(), self.size.text_style()));
        }
        Line::from(spans)
    }
}

impl Component for LoadingComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(' ') => self.set_loading(!self.is_loading),
            KeyCode::Char('v') => {
                self.cycle_variant();
                Action::None
            }
            KeyCode::Char('s') => {
                self.cycle_size();
                Action::None
            }
            KeyCode::Char('f') => self.set_full_screen(!self.full_screen),
            _ => Action::None,
        }
    }

    fn on_tick(&mut self) {
        if self.is_loading {
            self.frame = (self.frame + 1) % self.variant.frames().len();
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_loading {
            return;
        }

        let rect = if self.full_screen { f.area() } else { rect };
        if self.overlay || self.full_screen {
            f.render_widget(Clear, rect);
        }

        let lines = self.lines();
        let height = (lines.len() as u16).min(rect.height);
        let area = Rect {
            y: rect.y + rect.height.saturating_sub(height) / 2,
            height,
            ..rect
        };
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

const SKELETON_FILL: [char; 2] = ['░', '▒'];

/// Placeholder blocks shown in place of content that has not loaded yet.
///
/// With `animate` set, ticks alternate the fill shade. A `circle` skeleton is
/// drawn with rounded ends.
pub struct Skeleton {
    /// Width in cells; `None` fills the area
    pub width: Option<u16>,
    pub height: u16,
    pub circle: bool,
    pub animate: bool,
    phase: usize,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

impl Skeleton {
    pub fn new() -> Self {
        Self {
            width: None,
            height: 1,
            circle: false,
            animate: true,
            phase: 0,
        }
    }

    pub fn with_size(mut self, width: Option<u16>, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_circle(mut self, circle: bool) -> Self {
        self.circle = circle;
        self
    }

    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn fill_char(&self) -> char {
        SKELETON_FILL[self.phase % SKELETON_FILL.len()]
    }

    /// Rows of the placeholder for an area `available` cells wide
    pub fn rows(&self, available: u16) -> Vec<String> {
        let width = self.width.unwrap_or(available).min(available) as usize;
        let fill = self.fill_char();
        let row = if self.circle && width >= 2 {
            format!("◖{}◗", fill.to_string().repeat(width - 2))
        } else {
            fill.to_string().repeat(width)
        };
        vec![row; self.height as usize]
    }
}

impl Component for Skeleton {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn on_tick(&mut self) {
        if self.animate {
            self.phase = (self.phase + 1) % SKELETON_FILL.len();
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let lines: Vec<Line> = self.rows(rect.width).into_iter().map(Line::from).collect();
        f.render_widget(Paragraph::new(lines).style(Style::default().fg(Color::DarkGray)), rect);
    }
}

/// Titled frame for the loading demo, naming the variant and size
pub fn loading_frame_title(component: &LoadingComponent) -> String {
    format!(
        "{}- {} / {} ",
        TITLE_LOADING,
        component.variant.name(),
        component.size.name()
    )
}
