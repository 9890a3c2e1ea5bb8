use super::{char_key, render_lines, screen_contains};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use widgetkit::config::LoadingConfig;
use widgetkit::ui::components::{LoadingComponent, LoadingSize, LoadingVariant, Skeleton};
use widgetkit::ui::core::{Action, Component};

#[test]
fn test_ticks_cycle_frames() {
    let mut loading = LoadingComponent::new();
    let frames = LoadingVariant::Spinner.frames();

    assert_eq!(loading.current_frame(), frames[0]);
    loading.on_tick();
    assert_eq!(loading.current_frame(), frames[1]);

    for _ in 1..frames.len() {
        loading.on_tick();
    }
    assert_eq!(loading.current_frame(), frames[0]);
}

#[test]
fn test_stopped_indicator_does_not_advance() {
    let mut loading = LoadingComponent::new();

    assert_eq!(loading.handle_key_events(char_key(' ')), Action::LoadingToggled(false));
    loading.on_tick();
    assert_eq!(loading.frame_index(), 0);
    assert!(loading.lines().is_empty());
}

#[test]
fn test_variant_and_size_keys() {
    let mut loading = LoadingComponent::new();

    loading.handle_key_events(char_key('v'));
    assert_eq!(loading.variant, LoadingVariant::Dots);
    loading.handle_key_events(char_key('s'));
    assert_eq!(loading.size, LoadingSize::Lg);

    for _ in 0..3 {
        loading.handle_key_events(char_key('v'));
    }
    assert_eq!(loading.variant, LoadingVariant::Spinner);
}

#[test]
fn test_from_config_without_text() {
    let config = LoadingConfig {
        variant: LoadingVariant::Bars,
        size: LoadingSize::Xs,
        text: String::new(),
    };
    let loading = LoadingComponent::from_config(&config);

    assert_eq!(loading.text, None);
    assert_eq!(loading.lines().len(), 1);
}

#[test]
fn test_render_only_while_loading() {
    let mut loading = LoadingComponent::new();
    let lines = render_lines(&mut loading, 30, 7);
    assert!(screen_contains(&lines, "Loading..."));

    loading.set_loading(false);
    let lines = render_lines(&mut loading, 30, 7);
    assert!(lines.iter().all(|line| line.trim().is_empty()));
}

#[test]
fn test_inline_line_follows_loading_state() {
    let mut loading = LoadingComponent::new();
    let line = loading.inline_line().to_string();
    assert!(line.starts_with(LoadingVariant::Spinner.frames()[0]));
    assert!(line.ends_with("Loading..."));

    loading.set_loading(false);
    assert!(loading.inline_line().spans.is_empty());
}

#[test]
fn test_full_screen_covers_the_whole_frame() {
    let mut loading = LoadingComponent::page();
    assert!(loading.full_screen);

    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal
        .draw(|f| loading.render(f, Rect::new(0, 0, 10, 2)))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let screen: Vec<String> = (0..12)
        .map(|y| (0..40).map(|x| buffer[(x, y)].symbol()).collect())
        .collect();
    assert!(screen_contains(&screen, "Loading page..."));

    assert_eq!(loading.handle_key_events(char_key('f')), Action::LoadingFullScreen(false));
    assert_eq!(loading.set_full_screen(false), Action::None);
}

#[test]
fn test_skeleton_pulses_on_ticks() {
    let mut skeleton = Skeleton::new().with_size(Some(6), 2);
    assert_eq!(skeleton.rows(20), vec!["░░░░░░".to_string(); 2]);

    skeleton.on_tick();
    assert_eq!(skeleton.fill_char(), '▒');

    let mut still = Skeleton::new().with_animation(false);
    still.on_tick();
    assert_eq!(still.fill_char(), '░');
}

#[test]
fn test_circle_skeleton_has_round_ends() {
    let skeleton = Skeleton::new().with_size(Some(5), 1).with_circle(true);
    assert_eq!(skeleton.rows(3), vec!["◖░◗".to_string()]);

    let mut skeleton = skeleton;
    let lines = render_lines(&mut skeleton, 10, 1);
    assert!(lines[0].starts_with("◖░░░◗"));
}
