use super::{char_key, key, render_lines, screen_contains};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use widgetkit::ui::components::InputComponent;
use widgetkit::ui::core::{Action, Component};

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn editing_input() -> InputComponent {
    let mut input = InputComponent::new().with_label("Name").with_clearable(true);
    assert_eq!(input.handle_key_events(key(KeyCode::Enter)), Action::InputEditing(true));
    input
}

#[test]
fn test_typing_inserts_at_cursor() {
    let mut input = editing_input();

    assert_eq!(input.handle_key_events(char_key('a')), Action::InputChanged("a".to_string()));
    input.handle_key_events(char_key('c'));
    input.handle_key_events(key(KeyCode::Left));
    input.handle_key_events(char_key('b'));

    assert_eq!(input.value(), "abc");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_editing_handles_multibyte_text() {
    let mut input = editing_input();
    input.set_value("héllo");

    input.handle_key_events(key(KeyCode::Home));
    input.handle_key_events(key(KeyCode::Right));
    assert_eq!(input.handle_key_events(key(KeyCode::Delete)), Action::InputChanged("hllo".to_string()));

    input.handle_key_events(key(KeyCode::End));
    input.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(input.value(), "hll");
    assert_eq!(input.cursor(), 3);
}

#[test]
fn test_backspace_at_start_does_nothing() {
    let mut input = editing_input();
    input.set_value("x");
    input.handle_key_events(key(KeyCode::Home));

    assert_eq!(input.handle_key_events(key(KeyCode::Backspace)), Action::None);
    assert_eq!(input.value(), "x");
}

#[test]
fn test_clear_only_when_clearable() {
    let mut input = editing_input();
    input.set_value("draft");

    assert_eq!(input.handle_key_events(ctrl('u')), Action::InputCleared);
    assert_eq!(input.value(), "");
    assert_eq!(input.cursor(), 0);
    assert_eq!(input.handle_key_events(ctrl('u')), Action::None);

    let mut plain = InputComponent::new();
    plain.set_value("kept");
    assert_eq!(plain.clear(), Action::None);
    assert_eq!(plain.value(), "kept");
}

#[test]
fn test_enter_and_esc_stop_editing() {
    let mut input = editing_input();
    assert_eq!(input.handle_key_events(key(KeyCode::Esc)), Action::InputEditing(false));
    assert!(!input.is_editing());

    // Idle inputs ignore text keys
    assert_eq!(input.handle_key_events(char_key('z')), Action::None);
    assert_eq!(input.value(), "");
}

#[test]
fn test_disabled_input_never_edits() {
    let mut input = InputComponent::new();
    input.disabled = true;

    assert_eq!(input.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(!input.is_editing());
    assert_eq!(input.insert_char('a'), Action::None);
}

#[test]
fn test_password_is_masked_until_revealed() {
    let mut input = InputComponent::new().with_password(true).with_clearable(true);
    input.set_value("s3cret");

    assert_eq!(input.display_text(), "••••••");
    assert!(!input.shows_clear_button());

    input.handle_key_events(ctrl('r'));
    assert!(input.is_password_visible());
    assert_eq!(input.display_text(), "s3cret");
}

#[test]
fn test_clear_marker_needs_text() {
    let mut input = InputComponent::new().with_clearable(true);
    assert!(!input.shows_clear_button());

    input.set_value("a");
    assert!(input.shows_clear_button());

    input.disabled = true;
    assert!(!input.shows_clear_button());
}

#[test]
fn test_render_value_marker_and_error() {
    let mut input = InputComponent::new().with_label("Name").with_clearable(true);
    let lines = render_lines(&mut input, 30, 4);
    assert!(screen_contains(&lines, "Name"));
    assert!(screen_contains(&lines, "Type here"));

    input.set_value("Ada");
    input.error = Some("Name is taken".to_string());
    let lines = render_lines(&mut input, 30, 4);
    assert!(screen_contains(&lines, "Ada"));
    assert!(screen_contains(&lines, "×"));
    assert!(screen_contains(&lines, "Name is taken"));
}
