use super::{key, render_lines, screen_contains};
use crossterm::event::KeyCode;
use widgetkit::ui::components::{render_item_lines, AccordionComponent, AccordionItem, AccordionState};
use widgetkit::ui::core::{Action, Component};

fn items() -> Vec<AccordionItem> {
    vec![
        AccordionItem::new("a", "First", "Alpha body"),
        AccordionItem::new("b", "Second", "Beta body"),
        AccordionItem::new("c", "Locked", "Hidden").disabled(),
    ]
}

#[test]
fn test_single_mode_keeps_one_item_open() {
    let mut state = AccordionState::new(false);

    assert!(state.toggle("a"));
    assert!(state.toggle("b"));
    assert!(!state.is_expanded("a"));
    assert!(state.is_expanded("b"));
    assert!(!state.toggle("b"));
    assert_eq!(state.expanded_ids().count(), 0);
}

#[test]
fn test_multiple_mode_keeps_items_open() {
    let mut state = AccordionState::with_expanded(true, ["a"]);

    state.toggle("b");
    assert_eq!(state.expanded_ids().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_single_mode_initial_expansion_keeps_last() {
    let state = AccordionState::with_expanded(false, ["a", "b"]);
    assert_eq!(state.expanded_ids().collect::<Vec<_>>(), vec!["b"]);
}

#[test]
fn test_keys_focus_and_toggle() {
    let mut accordion = AccordionComponent::new(items(), AccordionState::new(false));

    assert_eq!(
        accordion.handle_key_events(key(KeyCode::Enter)),
        Action::AccordionToggled {
            id: "a".to_string(),
            expanded: true
        }
    );

    accordion.handle_key_events(key(KeyCode::Down));
    assert_eq!(accordion.focused(), 1);
    assert_eq!(
        accordion.handle_key_events(key(KeyCode::Char(' '))),
        Action::AccordionToggled {
            id: "b".to_string(),
            expanded: true
        }
    );
    assert!(!accordion.state.is_expanded("a"));
}

#[test]
fn test_disabled_and_unknown_items_do_not_toggle() {
    let mut accordion = AccordionComponent::new(items(), AccordionState::new(true));

    accordion.handle_key_events(key(KeyCode::Down));
    accordion.handle_key_events(key(KeyCode::Down));
    accordion.handle_key_events(key(KeyCode::Down));
    assert_eq!(accordion.focused(), 2);
    assert_eq!(accordion.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(accordion.toggle_item("missing"), Action::None);
    assert_eq!(accordion.state.expanded_ids().count(), 0);
}

#[test]
fn test_item_lines_depend_on_flags() {
    let item = AccordionItem::new("a", "First", "line one\nline two");

    assert_eq!(render_item_lines(&item, false, false).len(), 1);
    let expanded = render_item_lines(&item, true, false);
    assert_eq!(expanded.len(), 3);
    assert!(expanded[0].to_string().starts_with('▼'));
}

#[test]
fn test_render_shows_expanded_content_only() {
    let mut accordion = AccordionComponent::new(items(), AccordionState::with_expanded(false, ["b"]));

    let lines = render_lines(&mut accordion, 40, 10);
    assert!(screen_contains(&lines, "▶ First"));
    assert!(screen_contains(&lines, "▼ Second"));
    assert!(screen_contains(&lines, "Beta body"));
    assert!(!screen_contains(&lines, "Alpha body"));
}
