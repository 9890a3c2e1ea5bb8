//! Status bar component

use crate::constants::STATUS_HINTS;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Status line: the last action if any, then the demo hint and global shortcuts
    pub fn line(demo_hint: &str, last_action: Option<&str>) -> Line<'static> {
        let mut spans = Vec::new();
        if let Some(action) = last_action {
            spans.push(Span::styled(format!("{} │ ", action), Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(format!("{} • ", demo_hint), Style::default().fg(Color::Gray)));
        spans.push(Span::styled(STATUS_HINTS, Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, demo_hint: &str, last_action: Option<&str>) {
        let status_bar = Paragraph::new(Self::line(demo_hint, last_action))
            .block(Block::default())
            .alignment(Alignment::Center);

        f.render_widget(status_bar, area);
    }
}
