//! Single-line text input component.
//!
//! The field starts idle; Enter (or `i`) starts editing and the input then
//! owns the keyboard until Enter or Esc. The cursor is a character index, so
//! multi-byte text edits correctly.

use crate::constants::{CLEAR_MARKER, INPUT_PLACEHOLDER, PASSWORD_MASK};
use crate::ui::components::common::{create_field_paragraph, ACCENT, MUTED};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub struct InputComponent {
    pub label: Option<String>,
    pub placeholder: String,
    pub error: Option<String>,
    /// Offer Ctrl+U and the clear marker while there is text
    pub clearable: bool,
    pub disabled: bool,
    /// Mask the value unless visibility was toggled on
    pub password: bool,
    value: String,
    cursor: usize,
    show_password: bool,
    is_editing: bool,
}

impl Default for InputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl InputComponent {
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: INPUT_PLACEHOLDER.to_string(),
            error: None,
            clearable: false,
            disabled: false,
            password: false,
            value: String::new(),
            cursor: 0,
            show_password: false,
            is_editing: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and move the cursor to its end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// Returns `false` when the input is disabled
    pub fn start_editing(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.is_editing = true;
        true
    }

    pub fn stop_editing(&mut self) {
        self.is_editing = false;
    }

    /// The clear marker is offered for non-empty, enabled, unmasked inputs
    pub fn shows_clear_button(&self) -> bool {
        self.clearable && !self.value.is_empty() && !self.disabled && !self.password
    }

    /// Value as drawn: masked in password mode unless made visible
    pub fn display_text(&self) -> String {
        if self.password && !self.show_password {
            PASSWORD_MASK.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        if self.password {
            self.show_password = !self.show_password;
        }
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(index, _)| index)
            .unwrap_or(self.value.len())
    }

    fn changed(&self) -> Action {
        Action::InputChanged(self.value.clone())
    }

    pub fn insert_char(&mut self, c: char) -> Action {
        if self.disabled {
            return Action::None;
        }
        let index = self.byte_index();
        self.value.insert(index, c);
        self.cursor += 1;
        self.changed()
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> Action {
        if self.disabled || self.cursor == 0 {
            return Action::None;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.value.remove(index);
        self.changed()
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> Action {
        if self.disabled || self.cursor >= self.value.chars().count() {
            return Action::None;
        }
        let index = self.byte_index();
        self.value.remove(index);
        self.changed()
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Empty the field. Only clearable, enabled inputs with text react.
    pub fn clear(&mut self) -> Action {
        if !self.clearable || self.disabled || self.value.is_empty() {
            return Action::None;
        }
        self.value.clear();
        self.cursor = 0;
        Action::InputCleared
    }

    fn handle_editing_keys(&mut self, key: KeyEvent) -> Action {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.stop_editing();
                Action::InputEditing(false)
            }
            KeyCode::Char('u') if control => self.clear(),
            KeyCode::Char('r') if control => {
                self.toggle_password_visibility();
                Action::None
            }
            KeyCode::Char(c) if !control => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                Action::None
            }
            KeyCode::Right => {
                self.move_right();
                Action::None
            }
            KeyCode::Home => {
                self.move_home();
                Action::None
            }
            KeyCode::End => {
                self.move_end();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn field_style(&self) -> Option<Style> {
        if self.disabled {
            Some(Style::default().fg(MUTED))
        } else if self.error.is_some() {
            Some(Style::default().fg(Color::Red))
        } else if self.is_editing {
            Some(Style::default().fg(ACCENT))
        } else {
            None
        }
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_editing {
            return self.handle_editing_keys(key);
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('i') => {
                if self.start_editing() {
                    Action::InputEditing(true)
                } else {
                    Action::None
                }
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_password_visibility();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(rect);
        let field_area = chunks[0];

        let text = (!self.value.is_empty()).then(|| self.display_text());
        let mut field = create_field_paragraph(text, &self.placeholder, self.label.as_deref());
        if let Some(style) = self.field_style() {
            field = field.style(style);
        }
        f.render_widget(field, field_area);

        if self.shows_clear_button() && field_area.width > 4 {
            let marker_area = Rect {
                x: field_area.right() - 3,
                y: field_area.y + 1,
                width: 1,
                height: 1,
            };
            let marker = Paragraph::new(CLEAR_MARKER).style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
            f.render_widget(marker, marker_area);
        }

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(error.clone()).style(Style::default().fg(Color::Red)),
                chunks[1],
            );
        }

        if self.is_editing && field_area.width > 2 && field_area.height > 2 {
            let column = (self.cursor as u16).min(field_area.width - 3);
            f.set_cursor_position(Position::new(field_area.x + 1 + column, field_area.y + 1));
        }
    }
}
