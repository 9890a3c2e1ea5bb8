//! Date picker component.
//!
//! A field showing the selected date (or a placeholder) that opens a month
//! calendar popup. The popup grid comes from [`CalendarGrid::build`], called
//! with the component's current view month, bounds, selection and today's date
//! on every render; the component itself only keeps plain values.

use crate::calendar::{CalendarGrid, DateBounds, DateConstraints, GridCell, MonthView, DAYS_PER_WEEK};
use crate::config::DatePickerConfig;
use crate::constants::DATE_PICKER_PLACEHOLDER;
use crate::ui::components::common::{
    create_field_paragraph, create_instructions_paragraph, create_titled_block, shortcuts, ACCENT, MUTED,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::{self, DEFAULT_DATE_FORMAT, WEEKDAY_LABELS};
use chrono::{Datelike, Duration, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Columns used by one day cell
const CELL_WIDTH: u16 = 4;
/// Popup size: 7 cells plus borders, header, weekday row, 6 weeks and footer
const POPUP_WIDTH: u16 = CELL_WIDTH * DAYS_PER_WEEK as u16 + 2;
const POPUP_HEIGHT: u16 = 2 + 1 + 1 + 6 + 1;

pub struct DatePickerComponent {
    pub value: Option<NaiveDate>,
    pub bounds: DateBounds,
    pub placeholder: String,
    pub date_format: String,
    pub label: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
    is_open: bool,
    view: MonthView,
    cursor: NaiveDate,
    /// Pinned date for today; `None` follows the local clock
    fixed_today: Option<NaiveDate>,
}

impl Default for DatePickerComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePickerComponent {
    /// Picker that reads today's date from the local clock each time it needs it
    pub fn new() -> Self {
        Self::build(datetime::today(), None)
    }

    /// Picker with a fixed notion of today
    pub fn with_today(today: NaiveDate) -> Self {
        Self::build(today, Some(today))
    }

    fn build(today: NaiveDate, fixed_today: Option<NaiveDate>) -> Self {
        Self {
            value: None,
            bounds: DateBounds::default(),
            placeholder: DATE_PICKER_PLACEHOLDER.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            label: None,
            error: None,
            disabled: false,
            is_open: false,
            view: MonthView::containing(today),
            cursor: today,
            fixed_today,
        }
    }

    pub fn from_config(config: &DatePickerConfig) -> Self {
        let mut picker = Self::new();
        picker.placeholder = config.placeholder.clone();
        picker.date_format = config.date_format.clone();
        picker.bounds = DateBounds::new(config.min_date, config.max_date);
        picker
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(datetime::today)
    }

    /// Whether today follows the local clock rather than a pinned date
    pub fn follows_clock(&self) -> bool {
        self.fixed_today.is_none()
    }

    /// Text shown in the closed field
    pub fn display_text(&self) -> Option<String> {
        self.value.map(|date| datetime::format_with(date, &self.date_format))
    }

    /// Grid for the month currently on screen
    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::build(self.view, &DateConstraints::new(self.bounds, self.value), self.today())
    }

    /// Open the popup on the selected date, or today when nothing is selected.
    ///
    /// Returns `false` when the picker is disabled.
    pub fn open(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.cursor = self.value.unwrap_or_else(|| self.today());
        self.view = MonthView::containing(self.cursor);
        self.is_open = true;
        true
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) -> Action {
        if self.is_open {
            self.close();
            Action::DatePickerToggled(false)
        } else if self.open() {
            Action::DatePickerToggled(true)
        } else {
            Action::None
        }
    }

    /// Pick `date`. Dates outside the bounds are ignored.
    pub fn select(&mut self, date: NaiveDate) -> Action {
        if self.bounds.is_disabled(date) {
            log::debug!("Ignoring selection of disabled date {}", date);
            return Action::None;
        }

        self.value = Some(date);
        self.cursor = date;
        self.view = MonthView::containing(date);
        self.is_open = false;
        Action::DateSelected(date)
    }

    pub fn select_today(&mut self) -> Action {
        let today = self.today();
        self.view = MonthView::containing(today);
        self.select(today)
    }

    pub fn select_cursor(&mut self) -> Action {
        self.select(self.cursor)
    }

    /// Move the cursor by `days`; the view follows the cursor across months
    pub fn move_cursor(&mut self, days: i64) {
        if let Some(date) = self.cursor.checked_add_signed(Duration::days(days)) {
            self.cursor = date;
            self.view = MonthView::containing(date);
        }
    }

    pub fn prev_month(&mut self) {
        self.show_month(self.view.prev_month());
    }

    pub fn next_month(&mut self) {
        self.show_month(self.view.next_month());
    }

    pub fn prev_year(&mut self) {
        self.show_month(self.view.prev_year());
    }

    pub fn next_year(&mut self) {
        self.show_month(self.view.next_year());
    }

    /// Switch months, keeping the cursor on the same day number where it exists
    fn show_month(&mut self, view: MonthView) {
        let day = self.cursor.day().min(view.days_in_month());
        self.cursor = view.first_day().with_day(day).unwrap_or(view.first_day());
        self.view = view;
    }

    fn handle_open_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.close();
                Action::DatePickerToggled(false)
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select_cursor(),
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_cursor(-1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_cursor(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-(DAYS_PER_WEEK as i64));
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(DAYS_PER_WEEK as i64);
                Action::None
            }
            KeyCode::Char('[') => {
                self.prev_month();
                Action::None
            }
            KeyCode::Char(']') => {
                self.next_month();
                Action::None
            }
            KeyCode::Char('{') => {
                self.prev_year();
                Action::None
            }
            KeyCode::Char('}') => {
                self.next_year();
                Action::None
            }
            KeyCode::Char('t') => self.select_today(),
            _ => Action::None,
        }
    }

    fn header_line(&self) -> Line<'static> {
        let title = datetime::month_title(self.view.year(), self.view.month());
        Line::from(vec![
            Span::styled("« ‹ ", Style::default().fg(Color::Gray)),
            Span::styled(title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(" › »", Style::default().fg(Color::Gray)),
        ])
    }

    fn weekday_line() -> Line<'static> {
        let spans: Vec<Span<'static>> = WEEKDAY_LABELS
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let color = match index {
                    0 => Color::Red,
                    6 => Color::Blue,
                    _ => Color::Gray,
                };
                Span::styled(format!("{:^4}", label), Style::default().fg(color))
            })
            .collect();
        Line::from(spans)
    }

    fn cell_span(&self, cell: &GridCell) -> Span<'static> {
        let Some(day) = cell.day() else {
            return Span::raw(" ".repeat(CELL_WIDTH as usize));
        };

        let mut style = Style::default().fg(Color::White);
        if day.is_sunday() {
            style = style.fg(Color::Red);
        } else if day.is_saturday() {
            style = style.fg(Color::Blue);
        }
        if day.is_today && !day.is_selected {
            style = style.fg(ACCENT).add_modifier(Modifier::UNDERLINED);
        }
        if day.is_selected {
            style = style.fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD);
        }
        if day.is_disabled {
            style = Style::default().fg(MUTED).add_modifier(Modifier::DIM);
        }
        if day.date == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Span::styled(format!("{:^4}", day.day()), style)
    }

    /// Header, weekday row, one line per week
    pub fn calendar_lines(&self) -> Vec<Line<'static>> {
        let grid = self.grid();
        let mut lines = vec![self.header_line(), Self::weekday_line()];
        lines.extend(
            grid.weeks()
                .map(|week| Line::from(week.iter().map(|cell| self.cell_span(cell)).collect::<Vec<_>>())),
        );
        lines
    }

    fn render_popup(&self, f: &mut Frame, anchor: Rect, bounds: Rect) {
        let area = LayoutManager::below(anchor, POPUP_WIDTH, POPUP_HEIGHT, bounds);
        f.render_widget(Clear, area);

        let block = create_titled_block(" Calendar ", Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        f.render_widget(Paragraph::new(self.calendar_lines()).alignment(Alignment::Center), chunks[0]);

        let footer = create_instructions_paragraph(&[
            shortcuts::TODAY,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_SELECT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CLOSE,
        ]);
        f.render_widget(footer, chunks[1]);
    }
}

impl Component for DatePickerComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_open {
            return self.handle_open_keys(key);
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(rect);

        let mut field = create_field_paragraph(self.display_text(), &self.placeholder, self.label.as_deref());
        if self.disabled {
            field = field.style(Style::default().fg(MUTED));
        } else if self.error.is_some() {
            field = field.style(Style::default().fg(Color::Red));
        }
        f.render_widget(field, chunks[0]);

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(error.clone()).style(Style::default().fg(Color::Red)),
                chunks[1],
            );
        }

        if self.is_open {
            self.render_popup(f, chunks[0], rect);
        }
    }
}
