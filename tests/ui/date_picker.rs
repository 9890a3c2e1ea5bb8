use super::{char_key, key, render_lines, screen_contains};
use chrono::NaiveDate;
use crossterm::event::KeyCode;
use widgetkit::calendar::{is_today, DateBounds, MonthView};
use widgetkit::ui::components::DatePickerComponent;
use widgetkit::ui::core::{Action, Component};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn picker() -> DatePickerComponent {
    DatePickerComponent::with_today(date(2024, 2, 14))
}

#[test]
fn test_open_starts_on_today_without_value() {
    let mut picker = picker();

    assert_eq!(picker.handle_key_events(key(KeyCode::Enter)), Action::DatePickerToggled(true));
    assert!(picker.is_open());
    assert_eq!(picker.cursor(), date(2024, 2, 14));
    assert_eq!(picker.view(), MonthView::new(2024, 2).unwrap());
}

#[test]
fn test_open_starts_on_selected_value() {
    let mut picker = picker();
    picker.value = Some(date(2023, 11, 3));

    picker.open();
    assert_eq!(picker.view(), MonthView::new(2023, 11).unwrap());
    assert_eq!(picker.cursor(), date(2023, 11, 3));
}

#[test]
fn test_disabled_picker_stays_closed() {
    let mut picker = picker();
    picker.disabled = true;

    assert_eq!(picker.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(!picker.is_open());
}

#[test]
fn test_select_with_cursor_keys() {
    let mut picker = picker();
    picker.open();

    picker.handle_key_events(key(KeyCode::Right));
    picker.handle_key_events(key(KeyCode::Down));
    assert_eq!(picker.cursor(), date(2024, 2, 22));

    assert_eq!(
        picker.handle_key_events(key(KeyCode::Enter)),
        Action::DateSelected(date(2024, 2, 22))
    );
    assert_eq!(picker.value, Some(date(2024, 2, 22)));
    assert!(!picker.is_open());
    assert_eq!(picker.display_text().as_deref(), Some("2024-02-22"));
}

#[test]
fn test_cursor_crosses_into_next_month() {
    let mut picker = DatePickerComponent::with_today(date(2024, 2, 28));
    picker.open();

    picker.handle_key_events(key(KeyCode::Down));
    assert_eq!(picker.cursor(), date(2024, 3, 6));
    assert_eq!(picker.view(), MonthView::new(2024, 3).unwrap());
}

#[test]
fn test_month_and_year_navigation() {
    let mut picker = DatePickerComponent::with_today(date(2024, 1, 31));
    picker.open();

    picker.handle_key_events(char_key(']'));
    assert_eq!(picker.view(), MonthView::new(2024, 2).unwrap());
    assert_eq!(picker.cursor(), date(2024, 2, 29));

    picker.handle_key_events(char_key('}'));
    assert_eq!(picker.view(), MonthView::new(2025, 2).unwrap());
    assert_eq!(picker.cursor(), date(2025, 2, 28));

    picker.handle_key_events(char_key('['));
    picker.handle_key_events(char_key('['));
    assert_eq!(picker.view(), MonthView::new(2024, 12).unwrap());
}

#[test]
fn test_disabled_dates_cannot_be_selected() {
    let mut picker = picker();
    picker.bounds = DateBounds::new(Some(date(2024, 2, 14)), Some(date(2024, 2, 20)));
    picker.open();

    picker.handle_key_events(key(KeyCode::Left));
    assert_eq!(picker.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(picker.is_open());
    assert_eq!(picker.value, None);

    assert_eq!(picker.select(date(2024, 2, 20)), Action::DateSelected(date(2024, 2, 20)));
}

#[test]
fn test_today_shortcut_and_escape() {
    let mut picker = picker();
    picker.open();
    picker.next_month();

    assert_eq!(picker.handle_key_events(char_key('t')), Action::DateSelected(date(2024, 2, 14)));

    picker.open();
    assert_eq!(picker.handle_key_events(key(KeyCode::Esc)), Action::DatePickerToggled(false));
    assert!(!picker.is_open());
    assert_eq!(picker.value, Some(date(2024, 2, 14)));
}

#[test]
fn test_grid_marks_selection_and_today() {
    let mut picker = picker();
    picker.value = Some(date(2024, 2, 1));

    let grid = picker.grid();
    assert_eq!(grid.padding(), 4);
    assert!(grid.find(date(2024, 2, 1)).unwrap().is_selected);
    assert!(grid.find(date(2024, 2, 14)).unwrap().is_today);
}

#[test]
fn test_render_closed_shows_placeholder() {
    let mut picker = picker();
    let lines = render_lines(&mut picker, 40, 16);
    assert!(screen_contains(&lines, "Pick a date"));
}

#[test]
fn test_render_open_shows_calendar() {
    let mut picker = picker();
    picker.open();

    let lines = render_lines(&mut picker, 40, 16);
    assert!(screen_contains(&lines, "2024 February"));
    assert!(screen_contains(&lines, "Su"));
    assert!(screen_contains(&lines, "29"));
}

#[test]
fn test_render_custom_format() {
    let mut picker = picker();
    picker.date_format = "%d/%m/%Y".to_string();
    picker.select(date(2024, 2, 9));

    let lines = render_lines(&mut picker, 40, 16);
    assert!(screen_contains(&lines, "09/02/2024"));
}

#[test]
fn test_clock_picker_opens_on_current_day() {
    let mut picker = DatePickerComponent::new();
    assert!(picker.follows_clock());

    picker.open();
    assert!(is_today(Some(picker.cursor())));

    let grid = picker.grid();
    let marked: Vec<NaiveDate> = grid.days().filter(|day| day.is_today).map(|day| day.date).collect();
    assert_eq!(marked.len(), 1);
    assert!(is_today(Some(marked[0])));
}

#[test]
fn test_pinned_today_ignores_the_clock() {
    let mut picker = picker();
    assert!(!picker.follows_clock());

    picker.open();
    picker.close();
    picker.open();
    assert_eq!(picker.today(), date(2024, 2, 14));
    assert_eq!(picker.cursor(), date(2024, 2, 14));
}
