//! Date selection constraints.
//!
//! ## Usage
//!
//! Use [`DateBounds`] to restrict selection to an inclusive date window, or
//! implement [`SelectableDates`] for custom policies.
use crate::date::CalendarDate;

/// Controls which dates can be selected.
pub trait SelectableDates {
    /// Returns true when the date can be selected.
    fn is_selectable_date(&self, date: CalendarDate) -> bool;
}

/// An inclusive minimum/maximum date window.
///
/// A missing bound leaves that side open; the default is unbounded. Both
/// bounds are inclusive, so the bound dates themselves are selectable.
///
/// ## Examples
///
/// ```
/// use calgrid::bounds::DateBounds;
/// use calgrid::date::CalendarDate;
///
/// let min = CalendarDate::new(2024, 3, 1).unwrap();
/// let max = CalendarDate::new(2024, 3, 31).unwrap();
/// let bounds = DateBounds::between(min, max);
/// assert!(bounds.contains(min));
/// assert!(bounds.contains(max));
/// assert!(!bounds.contains(CalendarDate::new(2024, 4, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
}

impl DateBounds {
    /// Creates bounds from optional minimum and maximum dates.
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    /// Creates bounds closed on both sides.
    pub fn between(min: CalendarDate, max: CalendarDate) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Creates bounds with only a minimum date.
    pub fn at_least(min: CalendarDate) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Creates bounds with only a maximum date.
    pub fn at_most(max: CalendarDate) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Returns the minimum bound, if any.
    pub fn min(&self) -> Option<CalendarDate> {
        self.min
    }

    /// Returns the maximum bound, if any.
    pub fn max(&self) -> Option<CalendarDate> {
        self.max
    }

    /// Returns true when the date lies inside the window, bounds included.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }
}

impl SelectableDates for DateBounds {
    fn is_selectable_date(&self, date: CalendarDate) -> bool {
        self.contains(date)
    }
}
