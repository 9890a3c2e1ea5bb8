use super::{char_key, key, render_lines, screen_contains};
use crossterm::event::KeyCode;
use widgetkit::config::PaginationConfig;
use widgetkit::ui::components::{ControlKind, PaginationComponent, PaginationSize};
use widgetkit::ui::core::{Action, Component};

#[test]
fn test_keys_request_pages_without_moving() {
    let mut pagination = PaginationComponent::new(10);

    assert_eq!(pagination.handle_key_events(key(KeyCode::Right)), Action::PageChanged(2));
    assert_eq!(pagination.current_page, 1);
    assert_eq!(pagination.handle_key_events(key(KeyCode::Left)), Action::None);
    assert_eq!(pagination.handle_key_events(key(KeyCode::End)), Action::PageChanged(10));
    assert_eq!(pagination.handle_key_events(char_key('g')), Action::None);
}

#[test]
fn test_update_applies_page_change() {
    let mut pagination = PaginationComponent::new(10);

    let action = pagination.handle_key_events(key(KeyCode::End));
    pagination.update(action);
    assert_eq!(pagination.current_page, 10);
    assert!(!pagination.can_go_forward());
    assert_eq!(pagination.handle_key_events(key(KeyCode::Right)), Action::None);
}

#[test]
fn test_disabled_pagination_ignores_requests() {
    let mut pagination = PaginationComponent::new(10);
    pagination.disabled = true;

    assert_eq!(pagination.request_page(3), Action::None);
    assert!(pagination.controls().iter().all(|control| !control.enabled));
}

#[test]
fn test_controls_follow_props() {
    let mut pagination = PaginationComponent::new(10);
    let controls = pagination.controls();
    assert_eq!(controls.first().map(|c| c.kind), Some(ControlKind::First));
    assert_eq!(controls.last().map(|c| c.kind), Some(ControlKind::Last));
    assert!(controls
        .iter()
        .any(|c| c.kind == ControlKind::Page(1) && c.active));
    assert!(controls.iter().any(|c| c.kind == ControlKind::Ellipsis));

    pagination.show_first_last = false;
    pagination.show_prev_next = false;
    let controls = pagination.controls();
    assert_eq!(controls.first().map(|c| c.kind), Some(ControlKind::Page(1)));
    assert_eq!(controls.last().map(|c| c.kind), Some(ControlKind::Page(10)));
}

#[test]
fn test_from_config() {
    let config = PaginationConfig {
        sibling_count: 1,
        show_first_last: false,
        size: PaginationSize::Sm,
        demo_pages: 42,
        ..PaginationConfig::default()
    };
    let pagination = PaginationComponent::from_config(&config);

    assert_eq!(pagination.total_pages, 42);
    assert_eq!(pagination.sibling_count, 1);
    assert!(!pagination.show_first_last);
    assert_eq!(pagination.size, PaginationSize::Sm);
}

#[test]
fn test_render_shows_pages_and_ellipsis() {
    let mut pagination = PaginationComponent::new(20);
    pagination.set_page(10);

    let lines = render_lines(&mut pagination, 100, 3);
    assert!(screen_contains(&lines, "page 10 of 20"));
    assert!(screen_contains(&lines, "…"));
    assert!(screen_contains(&lines, "10"));
    assert!(screen_contains(&lines, "20"));
}
