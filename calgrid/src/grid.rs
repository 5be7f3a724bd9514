//! Month grid generation for calendar rendering.
//!
//! ## Usage
//!
//! Build a [`MonthGrid`] for the picker's display month and render its 42
//! cells as six rows of seven.
use tracing::trace;

use crate::date::{CalendarDate, YearMonth};

/// Number of columns in the grid, one per weekday.
pub const GRID_COLUMNS: usize = 7;
/// Number of rows in the grid.
pub const GRID_ROWS: usize = 6;
/// Total number of cells; the grid never adapts to month length.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// A single cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// The calendar day this cell shows.
    pub date: CalendarDate,
    /// True when the day belongs to the grid's target month rather than the
    /// leading or trailing days of an adjacent month.
    pub in_current_month: bool,
}

/// A fixed 6x7 grid of consecutive calendar days covering one month.
///
/// The grid starts on the Sunday on or before the 1st of the target month
/// and always holds exactly [`GRID_CELLS`] entries, so short months carry
/// trailing days of the next month and long months may omit a seventh week.
/// The fixed size mirrors the component this engine was extracted from and
/// is part of its observable contract.
///
/// ## Examples
///
/// ```
/// use calgrid::date::{Weekday, YearMonth};
/// use calgrid::grid::MonthGrid;
///
/// let month = YearMonth::new(2024, 3).unwrap();
/// let grid = MonthGrid::build(month);
/// assert_eq!(grid.cells().len(), 42);
/// assert_eq!(grid.cells()[0].date.weekday(), Weekday::Sunday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Builds the grid for the given display month.
    pub fn build(month: YearMonth) -> Self {
        let first = month.first_day();
        let start = first.offset_days(-(first.weekday().index_from_sunday() as i64));
        let cells: Vec<GridCell> = (0..GRID_CELLS as i64)
            .map(|offset| {
                let date = start.offset_days(offset);
                GridCell {
                    date,
                    in_current_month: month.contains(date),
                }
            })
            .collect();
        trace!(
            year = month.year(),
            month = month.month(),
            "built month grid"
        );
        Self { month, cells }
    }

    /// Returns the target month of this grid.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Returns all 42 cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Returns the six week rows of seven cells each.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks_exact(GRID_COLUMNS)
    }
}
