//! Accordion component.
//!
//! Expansion state lives in [`AccordionState`], owned by the accordion and
//! handed to [`render_item_lines`] for each item. Items never look the state
//! up on their own.

use crate::constants::TITLE_ACCORDION;
use crate::ui::components::common::{create_titled_block, MUTED};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub disabled: bool,
}

impl AccordionItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Expanded item ids, keyed by item id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: BTreeSet<String>,
    multiple: bool,
}

impl AccordionState {
    /// `multiple` allows several items open at once
    pub fn new(multiple: bool) -> Self {
        Self {
            expanded: BTreeSet::new(),
            multiple,
        }
    }

    /// Start with `ids` expanded. In single mode only the last id is kept.
    pub fn with_expanded<I, S>(multiple: bool, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::new(multiple);
        for id in ids {
            if !multiple {
                state.expanded.clear();
            }
            state.expanded.insert(id.into());
        }
        state
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Collapse `id` if open, otherwise open it. Returns the new state of `id`.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            return false;
        }
        if !self.multiple {
            self.expanded.clear();
        }
        self.expanded.insert(id.to_string());
        true
    }

    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

/// Lines for one item given its expansion and focus state
pub fn render_item_lines(item: &AccordionItem, expanded: bool, focused: bool) -> Vec<Line<'static>> {
    let arrow = if expanded { "▼" } else { "▶" };

    let mut header_style = if item.disabled {
        Style::default().fg(MUTED)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    if focused {
        header_style = header_style.fg(Color::Yellow);
    }

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{} ", arrow), header_style),
        Span::styled(item.title.clone(), header_style),
    ])];

    if expanded {
        lines.extend(
            item.content
                .lines()
                .map(|text| Line::from(Span::styled(format!("   {}", text), Style::default().fg(Color::Gray)))),
        );
    }

    lines
}

pub struct AccordionComponent {
    pub items: Vec<AccordionItem>,
    pub state: AccordionState,
    focused: usize,
}

impl AccordionComponent {
    pub fn new(items: Vec<AccordionItem>, state: AccordionState) -> Self {
        Self {
            items,
            state,
            focused: 0,
        }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) {
        if !self.items.is_empty() {
            self.focused = (self.focused + 1).min(self.items.len() - 1);
        }
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    /// Toggle the item with `id`. Disabled and unknown items are left alone.
    pub fn toggle_item(&mut self, id: &str) -> Action {
        match self.items.iter().find(|item| item.id == id) {
            Some(item) if !item.disabled => {
                let expanded = self.state.toggle(id);
                Action::AccordionToggled {
                    id: id.to_string(),
                    expanded,
                }
            }
            _ => Action::None,
        }
    }

    pub fn toggle_focused(&mut self) -> Action {
        match self.items.get(self.focused) {
            Some(item) => {
                let id = item.id.clone();
                self.toggle_item(&id)
            }
            None => Action::None,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.items
            .iter()
            .enumerate()
            .flat_map(|(index, item)| render_item_lines(item, self.state.is_expanded(&item.id), index == self.focused))
            .collect()
    }
}

impl Component for AccordionComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.focus_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus_previous();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_focused(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .block(create_titled_block(TITLE_ACCORDION, Color::Cyan))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, rect);
    }
}
