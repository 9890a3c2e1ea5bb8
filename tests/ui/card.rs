use super::{char_key, render_lines, screen_contains};
use ratatui::layout::Rect;
use widgetkit::ui::components::{card_frame_title, CardComponent, CardPadding, CardVariant};
use widgetkit::ui::core::Component;

fn card() -> CardComponent {
    CardComponent::new()
        .with_header("Header")
        .with_body(["Body text"])
        .with_footer("Footer")
}

#[test]
fn test_sections_render_in_order() {
    let mut card = card();
    let lines = render_lines(&mut card, 30, 12);

    let row = |needle: &str| lines.iter().position(|line| line.contains(needle)).unwrap();
    assert!(row("Header") < row("Body text"));
    assert!(row("Body text") < row("Footer"));
    assert!(screen_contains(&lines, "───"));
}

#[test]
fn test_elevated_card_leaves_room_for_shadow() {
    let rect = Rect::new(0, 0, 20, 8);

    assert_eq!(card().card_area(rect), Rect::new(0, 0, 19, 7));
    assert_eq!(card().with_variant(CardVariant::Outlined).card_area(rect), rect);
}

#[test]
fn test_filled_card_has_no_border() {
    let mut card = card().with_variant(CardVariant::Filled).with_padding(CardPadding::None);
    let lines = render_lines(&mut card, 20, 6);

    assert!(lines[0].starts_with("Header"));
    assert!(!screen_contains(&lines, "╭"));
    assert!(!screen_contains(&lines, "┌"));
}

#[test]
fn test_keys_cycle_variant_and_padding() {
    let mut card = card();

    card.handle_key_events(char_key('v'));
    assert_eq!(card.variant, CardVariant::Outlined);
    card.handle_key_events(char_key('p'));
    assert_eq!(card.padding, CardPadding::Lg);
    card.handle_key_events(char_key('p'));
    assert_eq!(card.padding, CardPadding::None);

    assert_eq!(card_frame_title(&card), " Card - outlined / none ");
}
