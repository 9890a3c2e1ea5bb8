//! Calendar grid construction and date predicates for the date picker.
//!
//! Months are 1-based throughout (1 = January), matching `chrono`. Weeks start
//! on Sunday: a grid begins with one padding cell per weekday before the 1st of
//! the month, followed by one cell per day. Trailing padding is never added.

use crate::error::{Result, WidgetError};
use crate::utils::datetime;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Number of columns in a calendar grid
pub const DAYS_PER_WEEK: usize = 7;

/// A displayed month.
///
/// Always refers to a month chrono can represent, so every accessor is
/// infallible once the value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    /// Create a view of `month` (1-based) in `year`.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(WidgetError::invalid(format!("month {month} is outside 1..=12")));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| WidgetError::invalid(format!("year {year} is out of range")))
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::containing(datetime::today())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last day of the month: day zero of the following month.
    pub fn last_day(&self) -> NaiveDate {
        self.shift_months(1)
            .and_then(|next| next.first.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Weekday index of the 1st, counted from Sunday (0..=6)
    pub fn leading_padding(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Move by `delta` months using month-index arithmetic.
    ///
    /// Returns `None` when the target month is outside chrono's range.
    pub fn shift_months(&self, delta: i32) -> Option<Self> {
        let index = i64::from(self.year()) * 12 + i64::from(self.month0()) + i64::from(delta);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Previous month; stays put at the lower edge of the supported range
    pub fn prev_month(&self) -> Self {
        self.shift_months(-1).unwrap_or(*self)
    }

    pub fn next_month(&self) -> Self {
        self.shift_months(1).unwrap_or(*self)
    }

    pub fn prev_year(&self) -> Self {
        self.shift_months(-12).unwrap_or(*self)
    }

    pub fn next_year(&self) -> Self {
        self.shift_months(12).unwrap_or(*self)
    }

    fn month0(&self) -> u32 {
        self.first.month0()
    }
}

/// Start of `date` (00:00:00.000)
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// End of `date` (23:59:59.999)
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

/// Inclusive, day-granular selection bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Bounds from instants; the time of day is dropped into fresh values.
    pub fn from_datetimes(min: Option<NaiveDateTime>, max: Option<NaiveDateTime>) -> Self {
        Self {
            min: min.map(|dt| dt.date()),
            max: max.map(|dt| dt.date()),
        }
    }

    /// Whether an instant falls before the start of `min` or after the end of `max`
    pub fn is_disabled_at(&self, instant: NaiveDateTime) -> bool {
        if let Some(min) = self.min {
            if instant < start_of_day(min) {
                return true;
            }
        }
        if let Some(max) = self.max {
            if instant > end_of_day(max) {
                return true;
            }
        }
        false
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.is_disabled_at(start_of_day(date))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        !self.is_disabled(date)
    }

    /// Pull `date` inside the bounds
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        let date = self.min.map_or(date, |min| date.max(min));
        self.max.map_or(date, |max| date.min(max))
    }
}

/// Whether `date` falls outside the inclusive `[min, max]` day range.
pub fn is_date_disabled(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    DateBounds::new(min, max).is_disabled(date)
}

/// Same calendar day. A missing side is never the same day as anything.
pub fn is_same_day<A: Datelike, B: Datelike>(a: Option<A>, b: Option<B>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.year() == b.year() && a.month() == b.month() && a.day() == b.day(),
        _ => false,
    }
}

/// Whether `date` is today's local date
pub fn is_today<A: Datelike>(date: Option<A>) -> bool {
    is_same_day(date, Some(datetime::today()))
}

/// Dates of the month with leading `None` padding.
///
/// ```
/// use widgetkit::calendar::build_grid;
///
/// // February 2024 starts on a Thursday and has 29 days
/// let cells = build_grid(2024, 2).unwrap();
/// assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 4);
/// assert_eq!(cells.len(), 4 + 29);
/// ```
pub fn build_grid(year: i32, month: u32) -> Result<Vec<Option<NaiveDate>>> {
    let view = MonthView::new(year, month)?;
    Ok(month_cells(view).collect())
}

fn month_cells(view: MonthView) -> impl Iterator<Item = Option<NaiveDate>> {
    let padding = view.leading_padding() as usize;
    let days = view.first_day().iter_days().take(view.days_in_month() as usize);
    std::iter::repeat(None).take(padding).chain(days.map(Some))
}

/// Selection state the grid is annotated with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateConstraints {
    pub bounds: DateBounds,
    pub selected: Option<NaiveDate>,
}

impl DateConstraints {
    pub fn new(bounds: DateBounds, selected: Option<NaiveDate>) -> Self {
        Self { bounds, selected }
    }
}

/// A day in the grid together with its display flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
    /// 0 = Sunday ..= 6 = Saturday
    pub day_of_week: u32,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_sunday(&self) -> bool {
        self.day_of_week == 0
    }

    pub fn is_saturday(&self) -> bool {
        self.day_of_week == 6
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Empty cell before the 1st of the month
    Padding,
    Day(DayCell),
}

impl GridCell {
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Day(cell) => Some(cell),
            GridCell::Padding => None,
        }
    }
}

/// Annotated month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    view: MonthView,
    cells: Vec<GridCell>,
}

impl CalendarGrid {
    /// Build the grid for `view`, flagging cells against `constraints` and `today`.
    pub fn build(view: MonthView, constraints: &DateConstraints, today: NaiveDate) -> Self {
        let cells = month_cells(view)
            .map(|cell| match cell {
                None => GridCell::Padding,
                Some(date) => GridCell::Day(DayCell {
                    date,
                    is_today: date == today,
                    is_selected: is_same_day(Some(date), constraints.selected),
                    is_disabled: constraints.bounds.is_disabled(date),
                    day_of_week: date.weekday().num_days_from_sunday(),
                }),
            })
            .collect();

        Self { view, cells }
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Rows of up to seven cells; the last row may be short
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len().div_ceil(DAYS_PER_WEEK)
    }

    pub fn padding(&self) -> usize {
        self.cells.iter().take_while(|cell| matches!(cell, GridCell::Padding)).count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(GridCell::day)
    }

    pub fn find(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == date)
    }

    /// Row and column of `date` within the grid
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        if !self.view.contains(date) {
            return None;
        }
        let index = self.padding() + date.day0() as usize;
        Some((index / DAYS_PER_WEEK, index % DAYS_PER_WEEK))
    }
}
