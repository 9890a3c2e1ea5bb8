//! Styling helpers shared by the components.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Accent color for active and selected elements
pub const ACCENT: Color = Color::Blue;
/// Color for disabled elements
pub const MUTED: Color = Color::DarkGray;

/// Creates a rounded, titled block in the given theme color
pub fn create_titled_block<'a>(title: impl Into<Line<'a>>, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates a field block showing a value or a dimmed placeholder
pub fn create_field_paragraph<'a>(value: Option<String>, placeholder: &str, field_title: Option<&str>) -> Paragraph<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Gray));
    if let Some(title) = field_title {
        block = block
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::White));
    }

    let text = match value {
        Some(value) => Span::styled(value, Style::default().fg(Color::White)),
        None => Span::styled(placeholder.to_string(), Style::default().fg(MUTED)),
    };

    Paragraph::new(Line::from(text)).block(block)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across components
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const X_CLOSE: InstructionShortcut = ("x", Color::Red, " Close");
    pub const ENTER_SELECT: InstructionShortcut = ("Enter", Color::Green, " Select");
    pub const TODAY: InstructionShortcut = ("t", Color::Cyan, " Today");
}
