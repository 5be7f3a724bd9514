//! Calendar grid engine for date picker components.
//!
//! The crate holds the non-visual half of a date picker: month grid
//! generation, date bounds, date formatting, and the selection state a UI
//! shell mutates. Rendering, styling, and animation stay in the shell; every
//! operation here is synchronous and completes in the call that invokes it.
//!
//! # Usage
//!
//! Create a [`DatePickerState`], build a [`MonthGrid`] for its display
//! month, and feed selections back through the state.
//!
//! # Example
//!
//! ```
//! use calgrid::{
//!     bounds::DateBounds,
//!     date::CalendarDate,
//!     format::{FormatPattern, format_date},
//!     state::DatePickerState,
//! };
//!
//! let start = CalendarDate::new(2024, 3, 5).unwrap();
//! let mut state = DatePickerState::new(Some(start));
//!
//! let grid = state.grid();
//! assert_eq!(grid.cells().len(), 42);
//!
//! let bounds = DateBounds::at_least(CalendarDate::new(2024, 1, 1).unwrap());
//! assert!(state.select_date(CalendarDate::new(2024, 3, 20).unwrap(), &bounds));
//!
//! let label = format_date(state.selected_date().unwrap(), FormatPattern::YyyyMmDd, None);
//! assert_eq!(label, "2024-03-20");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod bounds;
pub mod date;
pub mod format;
pub mod grid;
pub mod state;

pub use bounds::{DateBounds, SelectableDates};
pub use date::{CalendarDate, Weekday, YearMonth};
pub use format::FormatPattern;
pub use grid::{GridCell, MonthGrid};
pub use state::{DatePickerArgs, DatePickerState};
