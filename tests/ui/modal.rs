use super::{char_key, key, render_lines, screen_contains};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use widgetkit::ui::components::{ModalComponent, ModalSize};
use widgetkit::ui::core::{Action, Component};

fn modal() -> ModalComponent {
    let mut modal = ModalComponent::new().with_title("Hello").with_body(["Body text"]);
    modal.open();
    modal
}

#[test]
fn test_escape_closes() {
    let mut modal = modal();
    assert_eq!(modal.handle_key_events(key(KeyCode::Esc)), Action::ModalClosed);
    assert!(!modal.is_open());
    assert_eq!(modal.handle_key_events(key(KeyCode::Esc)), Action::None);
}

#[test]
fn test_escape_ignored_when_disabled() {
    let mut modal = modal();
    modal.close_on_esc = false;

    assert_eq!(modal.handle_key_events(key(KeyCode::Esc)), Action::None);
    assert!(modal.is_open());
    assert_eq!(modal.handle_key_events(char_key('x')), Action::ModalClosed);
}

#[test]
fn test_close_button_can_be_hidden() {
    let mut modal = modal();
    modal.show_close_button = false;

    assert_eq!(modal.handle_key_events(char_key('x')), Action::None);
    assert!(modal.is_open());
}

#[test]
fn test_sizes_grow() {
    let screen = Rect::new(0, 0, 100, 50);
    let areas: Vec<u32> = ModalSize::ALL
        .iter()
        .map(|size| {
            let area = ModalComponent::new().with_size(*size).area(screen);
            area.width as u32 * area.height as u32
        })
        .collect();

    assert!(areas.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ModalSize::Full.next(), ModalSize::Sm);
}

#[test]
fn test_render_open_and_closed() {
    let mut modal = modal();
    let lines = render_lines(&mut modal, 60, 20);
    assert!(screen_contains(&lines, "Hello"));
    assert!(screen_contains(&lines, "Body text"));

    modal.close();
    let lines = render_lines(&mut modal, 60, 20);
    assert!(!screen_contains(&lines, "Body text"));
}
