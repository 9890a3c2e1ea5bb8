use super::{char_key, key, render_lines, screen_contains};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use widgetkit::config::Config;
use widgetkit::logger::Logger;
use widgetkit::ui::core::{Action, Demo, EventType};
use widgetkit::ui::AppComponent;

fn app() -> AppComponent {
    AppComponent::new(&Config::default(), Logger::new())
}

fn press(app: &mut AppComponent, event: KeyEvent) -> Action {
    app.handle_event(EventType::Key(event))
}

#[test]
fn test_starts_on_configured_demo() {
    let mut config = Config::default();
    config.ui.default_demo = "loading".to_string();

    let app = AppComponent::new(&config, Logger::new());
    assert_eq!(app.active_demo(), Demo::Loading);
}

#[test]
fn test_tab_cycles_demos() {
    let mut app = app();

    press(&mut app, key(KeyCode::Tab));
    assert_eq!(app.active_demo(), Demo::DatePicker);
    press(&mut app, key(KeyCode::BackTab));
    press(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.active_demo(), Demo::Loading);
    assert_eq!(app.last_action(), Some("Loading demo"));
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, char_key('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    press(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_page_change_reaches_pagination() {
    let mut app = app();

    assert_eq!(press(&mut app, key(KeyCode::Right)), Action::PageChanged(2));
    assert_eq!(app.pagination().current_page, 2);
    assert_eq!(app.last_action(), Some("Page 2 selected"));
}

#[test]
fn test_modal_captures_keys_until_closed() {
    let mut app = app();

    press(&mut app, char_key('m'));
    assert!(app.modal().is_open());

    press(&mut app, key(KeyCode::Tab));
    press(&mut app, char_key('q'));
    assert_eq!(app.active_demo(), Demo::Pagination);
    assert!(!app.should_quit());

    assert_eq!(press(&mut app, key(KeyCode::Esc)), Action::ModalClosed);
    assert!(!app.modal().is_open());
    assert_eq!(app.last_action(), Some("Modal closed"));
}

#[test]
fn test_open_calendar_captures_keys() {
    let mut app = app();
    press(&mut app, key(KeyCode::Tab));
    press(&mut app, key(KeyCode::Enter));
    assert!(app.date_picker().is_open());

    // Tab and q belong to the calendar while it is open
    press(&mut app, key(KeyCode::Tab));
    press(&mut app, char_key('q'));
    assert_eq!(app.active_demo(), Demo::DatePicker);
    assert!(!app.should_quit());

    let today = app.date_picker().today();
    assert_eq!(press(&mut app, key(KeyCode::Enter)), Action::DateSelected(today));
    assert!(!app.date_picker().is_open());
}

#[test]
fn test_accordion_toggle_is_recorded() {
    let mut app = app();
    press(&mut app, key(KeyCode::Tab));
    press(&mut app, key(KeyCode::Tab));
    assert_eq!(app.active_demo(), Demo::Accordion);

    press(&mut app, key(KeyCode::Down));
    press(&mut app, key(KeyCode::Enter));
    assert_eq!(app.last_action(), Some("Item 'keys' expanded"));
    assert!(app.accordion().state.is_expanded("keys"));
}

#[test]
fn test_editing_input_captures_keys() {
    let mut config = Config::default();
    config.ui.default_demo = "input".to_string();
    let mut app = AppComponent::new(&config, Logger::new());

    press(&mut app, key(KeyCode::Enter));
    assert!(app.input().is_editing());

    // q and Tab are text while editing
    press(&mut app, char_key('q'));
    press(&mut app, key(KeyCode::Tab));
    assert!(!app.should_quit());
    assert_eq!(app.active_demo(), Demo::Input);
    assert_eq!(app.input().value(), "q");
    assert_eq!(app.last_action(), Some("Input changed (1 chars)"));

    press(&mut app, key(KeyCode::Enter));
    assert!(!app.input().is_editing());
    assert_eq!(app.input().error, None);
}

#[test]
fn test_leaving_input_empty_shows_error() {
    let mut config = Config::default();
    config.ui.default_demo = "input".to_string();
    let mut app = AppComponent::new(&config, Logger::new());

    press(&mut app, key(KeyCode::Enter));
    press(&mut app, key(KeyCode::Esc));
    assert_eq!(app.input().error.as_deref(), Some("Name is required"));

    press(&mut app, key(KeyCode::Enter));
    press(&mut app, char_key('A'));
    assert_eq!(app.input().error, None);
}

#[test]
fn test_password_mode_key_masks_input() {
    let mut config = Config::default();
    config.ui.default_demo = "input".to_string();
    let mut app = AppComponent::new(&config, Logger::new());

    press(&mut app, char_key('p'));
    assert!(app.input().password);

    let lines = render_lines(&mut app, 100, 24);
    assert!(screen_contains(&lines, "Mode: password"));
}

#[test]
fn test_card_demo_renders_sections() {
    let mut config = Config::default();
    config.ui.default_demo = "card".to_string();
    let mut app = AppComponent::new(&config, Logger::new());

    press(&mut app, char_key('v'));
    let lines = render_lines(&mut app, 120, 30);
    assert!(screen_contains(&lines, "Card - outlined / md"));
    assert!(screen_contains(&lines, "Release notes"));
    assert!(screen_contains(&lines, "Updated today"));
}

#[test]
fn test_full_screen_loading_hides_gallery() {
    let mut config = Config::default();
    config.ui.default_demo = "loading".to_string();
    let mut app = AppComponent::new(&config, Logger::new());

    assert_eq!(press(&mut app, char_key('f')), Action::LoadingFullScreen(true));
    let lines = render_lines(&mut app, 100, 24);
    assert!(screen_contains(&lines, "Loading..."));
    assert!(!screen_contains(&lines, "q: quit"));

    press(&mut app, char_key('f'));
    let lines = render_lines(&mut app, 180, 24);
    assert!(screen_contains(&lines, "q: quit"));
    assert!(screen_contains(&lines, "Inline:"));
}

#[test]
fn test_ticks_drive_loading_animation() {
    let mut app = app();
    let before = app.loading().frame_index();
    app.handle_event(EventType::Tick);
    assert_ne!(app.loading().frame_index(), before);
}

#[test]
fn test_logs_modal_shows_logger_lines() {
    let logger = Logger::new();
    logger.log("hello from the log".to_string());
    let mut app = AppComponent::new(&Config::default(), logger);

    press(&mut app, char_key('L'));
    assert!(app.modal().is_open());
    assert!(app.modal().body.iter().any(|line| line.contains("hello from the log")));
}

#[test]
fn test_render_gallery() {
    let mut app = app();
    let lines = render_lines(&mut app, 120, 30);

    assert!(screen_contains(&lines, "Pagination"));
    assert!(screen_contains(&lines, "Date picker"));
    assert!(screen_contains(&lines, "page 1 of 20"));
    assert!(screen_contains(&lines, "q: quit"));
}
