//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the tab bar, the demo area and the status bar
    #[must_use]
    pub fn gallery_layout(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Place a fixed-size rectangle directly below `anchor`, kept inside `bounds`
    #[must_use]
    pub fn below(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
        let width = width.min(bounds.width);
        let top = anchor.bottom().min(bounds.bottom());
        let height = height.min(bounds.bottom().saturating_sub(top));
        let max_x = bounds.right().saturating_sub(width);
        Rect {
            x: anchor.x.clamp(bounds.x, max_x.max(bounds.x)),
            y: top,
            width,
            height,
        }
    }
}
