//! Page window calculation for pagination strips.
//!
//! Given the current page, the page count and how many neighbours to show on
//! each side of the current page, [`compute_window`] returns the markers a
//! pagination control should draw: concrete page numbers and at most two
//! ellipsis placeholders standing in for hidden runs of pages.

use crate::error::{Result, WidgetError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of neighbours shown on each side of the current page by default
pub const DEFAULT_SIBLING_COUNT: u32 = 2;

/// A single entry in a pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMarker {
    /// A concrete, clickable page number (1-based)
    Page(u32),
    /// Two or more omitted pages
    Ellipsis,
}

impl PageMarker {
    /// The page number, if this marker is a page
    pub fn page(self) -> Option<u32> {
        match self {
            PageMarker::Page(page) => Some(page),
            PageMarker::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(page) => write!(f, "{page}"),
            PageMarker::Ellipsis => f.write_str("..."),
        }
    }
}

/// Validated inputs of a page window computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    current_page: u32,
    total_pages: u32,
    sibling_count: u32,
}

impl PageWindow {
    /// Validate the inputs.
    ///
    /// Fails with [`WidgetError::InvalidArgument`] when `total_pages` or
    /// `sibling_count` is zero, or when `current_page` is outside
    /// `1..=total_pages`. Callers that want clamping should use
    /// [`PageWindow::clamped`].
    pub fn new(current_page: u32, total_pages: u32, sibling_count: u32) -> Result<Self> {
        if total_pages == 0 {
            return Err(WidgetError::invalid("total_pages must be at least 1"));
        }
        if sibling_count == 0 {
            return Err(WidgetError::invalid("sibling_count must be at least 1"));
        }
        if current_page == 0 || current_page > total_pages {
            return Err(WidgetError::invalid(format!(
                "current_page {current_page} is outside 1..={total_pages}"
            )));
        }

        Ok(Self {
            current_page,
            total_pages,
            sibling_count,
        })
    }

    /// Build a window after clamping every input to its valid range.
    pub fn clamped(current_page: u32, total_pages: u32, sibling_count: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
            sibling_count: sibling_count.max(1),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn sibling_count(&self) -> u32 {
        self.sibling_count
    }

    /// Page numbers drawn around the current page, first and last included
    fn total_numbers(&self) -> u32 {
        self.sibling_count.saturating_mul(2).saturating_add(3)
    }

    /// Display budget: the page numbers plus room for two ellipses
    fn total_blocks(&self) -> u32 {
        self.total_numbers().saturating_add(2)
    }

    /// Produce the ordered markers for this window.
    pub fn markers(&self) -> Vec<PageMarker> {
        let total = self.total_pages;

        if total <= self.total_blocks() {
            return (1..=total).map(PageMarker::Page).collect();
        }

        let left_sibling = self.current_page.saturating_sub(self.sibling_count).max(1);
        let right_sibling = self.current_page.saturating_add(self.sibling_count).min(total);

        // An ellipsis always hides at least two pages
        let show_left_dots = left_sibling > 3;
        let show_right_dots = right_sibling < total - 2;

        // Edge windows keep a fixed width anchored at the boundary
        let edge_count = self.total_numbers();

        match (show_left_dots, show_right_dots) {
            (false, true) => (1..=edge_count)
                .map(PageMarker::Page)
                .chain([PageMarker::Ellipsis, PageMarker::Page(total)])
                .collect(),
            (true, false) => [PageMarker::Page(1), PageMarker::Ellipsis]
                .into_iter()
                .chain((total - edge_count + 1..=total).map(PageMarker::Page))
                .collect(),
            (true, true) => [PageMarker::Page(1), PageMarker::Ellipsis]
                .into_iter()
                .chain((left_sibling..=right_sibling).map(PageMarker::Page))
                .chain([PageMarker::Ellipsis, PageMarker::Page(total)])
                .collect(),
            // Unreachable once total exceeds the display budget
            (false, false) => (1..=total).map(PageMarker::Page).collect(),
        }
    }
}

/// Compute the pagination markers for `current_page` out of `total_pages`.
///
/// ```
/// use widgetkit::pagination::{compute_window, PageMarker::*};
///
/// let markers = compute_window(1, 10, 2).unwrap();
/// assert_eq!(markers, vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]);
/// ```
pub fn compute_window(current_page: u32, total_pages: u32, sibling_count: u32) -> Result<Vec<PageMarker>> {
    Ok(PageWindow::new(current_page, total_pages, sibling_count)?.markers())
}
