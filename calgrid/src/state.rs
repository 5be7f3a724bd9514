//! Selection and display state for a date picker shell.
//!
//! ## Usage
//!
//! Create a [`DatePickerState`] (usually through [`DatePickerArgs`]), mutate
//! it from the shell's navigation and selection handlers, and rebuild the
//! grid from [`DatePickerState::grid`] after each transition. The engine
//! performs no scheduling of its own; re-rendering is the shell's job.
use derive_setters::Setters;
use tracing::{debug, trace};

use crate::{
    bounds::{DateBounds, SelectableDates},
    date::{CalendarDate, YearMonth},
    format::{FormatPattern, format_date},
    grid::MonthGrid,
};

/// Holds the currently selected date and the month the calendar displays.
///
/// The two fields move independently: month navigation never touches the
/// selection, and selecting a date only re-anchors the display month when
/// the date lies outside it.
///
/// ## Examples
///
/// ```
/// use calgrid::bounds::DateBounds;
/// use calgrid::date::CalendarDate;
/// use calgrid::state::DatePickerState;
///
/// let start = CalendarDate::new(2024, 3, 5).unwrap();
/// let mut state = DatePickerState::new(Some(start));
/// state.navigate_month(-2);
/// assert_eq!(state.display_month().month(), 1);
/// assert_eq!(state.selected_date(), Some(start));
///
/// let picked = CalendarDate::new(2024, 6, 1).unwrap();
/// assert!(state.select_date(picked, &DateBounds::default()));
/// assert_eq!(state.display_month().month(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    selected_date: Option<CalendarDate>,
    display_month: YearMonth,
}

impl DatePickerState {
    /// Creates a state from an initial selection.
    ///
    /// With no initial date the selection defaults to today; the display
    /// month starts on the month containing the initial selection.
    pub fn new(initial_date: Option<CalendarDate>) -> Self {
        let selected = initial_date.unwrap_or_else(CalendarDate::today);
        Self {
            selected_date: Some(selected),
            display_month: selected.year_month(),
        }
    }

    /// Creates a state with no selection, displaying the given month.
    pub fn unselected(display_month: YearMonth) -> Self {
        Self {
            selected_date: None,
            display_month,
        }
    }

    /// Creates a state from host configuration.
    ///
    /// An initial date the bounds reject is discarded, and the display month
    /// then anchors on today's month.
    pub fn from_args(args: &DatePickerArgs) -> Self {
        let selected = args
            .initial_date
            .filter(|date| args.bounds.is_selectable_date(*date));
        let display_month = args
            .initial_display_month
            .or_else(|| selected.map(|date| date.year_month()))
            .unwrap_or_else(|| CalendarDate::today().year_month());
        Self {
            selected_date: selected,
            display_month,
        }
    }

    /// Returns the selected date, if any.
    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected_date
    }

    /// Returns the month the calendar currently displays.
    pub fn display_month(&self) -> YearMonth {
        self.display_month
    }

    /// Builds the grid for the current display month.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.display_month)
    }

    /// Moves the display month by `delta` months, negative for backwards.
    ///
    /// The selection is untouched.
    pub fn navigate_month(&mut self, delta: i32) {
        self.display_month = self.display_month.add_months(delta);
        trace!(
            year = self.display_month.year(),
            month = self.display_month.month(),
            "navigated display month"
        );
    }

    /// Selects a date if the policy allows it.
    ///
    /// A rejected date leaves the state untouched and returns `false`; the
    /// rejection is silent, so shells that need feedback should check the
    /// policy before calling. An accepted date outside the display month
    /// re-anchors the display month onto its month.
    pub fn select_date(&mut self, date: CalendarDate, policy: &dyn SelectableDates) -> bool {
        if !policy.is_selectable_date(date) {
            debug!(
                year = date.year(),
                month = date.month(),
                day = date.day(),
                "selection rejected by policy"
            );
            return false;
        }
        self.selected_date = Some(date);
        if !self.display_month.contains(date) {
            self.display_month = date.year_month();
        }
        true
    }

    /// Jumps the display month to today and selects today.
    ///
    /// This intentionally couples navigation with selection: the returned
    /// date doubles as the completion signal, and shells close the picker on
    /// it. Callers that only want to navigate should use
    /// [`DatePickerState::navigate_month`] instead.
    pub fn go_to_today(&mut self) -> CalendarDate {
        let today = CalendarDate::today();
        self.selected_date = Some(today);
        self.display_month = today.year_month();
        today
    }

    /// Resets the selection to the caller-supplied default, typically today.
    ///
    /// The display month stays where it is.
    pub fn clear(&mut self, default: CalendarDate) {
        self.selected_date = Some(default);
    }

    /// Returns the headline text for the current selection.
    pub fn headline(&self) -> String {
        match self.selected_date {
            Some(date) => format_date(date, FormatPattern::Custom, None),
            None => "No date selected".to_string(),
        }
    }
}

impl Default for DatePickerState {
    fn default() -> Self {
        DatePickerState::new(None)
    }
}

/// Host-facing configuration for a date picker shell.
///
/// Carries what the surrounding UI supplies: the initial date, the bounds
/// dates must satisfy, and the format the shell renders selections with.
#[derive(Debug, Clone, Setters)]
pub struct DatePickerArgs {
    /// Initial selected date; today when absent.
    #[setters(strip_option)]
    pub initial_date: Option<CalendarDate>,
    /// Initial display month; derived from the initial date when absent.
    #[setters(strip_option)]
    pub initial_display_month: Option<YearMonth>,
    /// Min/max window selections must fall into.
    pub bounds: DateBounds,
    /// Layout used to render the selected date.
    pub pattern: FormatPattern,
    /// Pattern string consulted when `pattern` is the custom variant.
    #[setters(strip_option, into)]
    pub custom_pattern: Option<String>,
}

impl Default for DatePickerArgs {
    fn default() -> Self {
        Self {
            initial_date: None,
            initial_display_month: None,
            bounds: DateBounds::default(),
            pattern: FormatPattern::default(),
            custom_pattern: None,
        }
    }
}

impl DatePickerArgs {
    /// Renders a date with this configuration's format.
    pub fn format(&self, date: CalendarDate) -> String {
        format_date(date, self.pattern, self.custom_pattern.as_deref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_navigate_month_rolls_back_years() {
        let mut state = DatePickerState::new(Some(date(2024, 1, 15)));
        state.navigate_month(-1);
        assert_eq!(state.display_month(), YearMonth::new(2023, 12).unwrap());
        assert_eq!(state.selected_date(), Some(date(2024, 1, 15)));
        state.navigate_month(2);
        assert_eq!(state.display_month(), YearMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn test_select_date_outside_bounds_is_a_noop() {
        let bounds = DateBounds::between(date(2024, 3, 1), date(2024, 3, 31));
        let mut state = DatePickerState::new(Some(date(2024, 3, 5)));
        let before = state.clone();

        assert!(!state.select_date(date(2024, 4, 1), &bounds));
        assert_eq!(state, before);
        // Idempotent: a second rejected call changes nothing either.
        assert!(!state.select_date(date(2024, 4, 1), &bounds));
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_date_at_bounds_is_allowed() {
        let min = date(2024, 3, 1);
        let max = date(2024, 3, 31);
        let bounds = DateBounds::between(min, max);
        let mut state = DatePickerState::new(Some(date(2024, 3, 5)));
        assert!(state.select_date(min, &bounds));
        assert_eq!(state.selected_date(), Some(min));
        assert!(state.select_date(max, &bounds));
        assert_eq!(state.selected_date(), Some(max));
    }

    #[test]
    fn test_select_date_reanchors_display_month_only_when_needed() {
        let bounds = DateBounds::default();
        let mut state = DatePickerState::new(Some(date(2024, 3, 5)));

        assert!(state.select_date(date(2024, 3, 20), &bounds));
        assert_eq!(state.display_month(), YearMonth::new(2024, 3).unwrap());

        assert!(state.select_date(date(2023, 11, 2), &bounds));
        assert_eq!(state.display_month(), YearMonth::new(2023, 11).unwrap());
    }

    #[test]
    fn test_go_to_today_sets_selection_and_display() {
        let mut state = DatePickerState::new(Some(date(1999, 6, 15)));
        state.navigate_month(-7);
        let returned = state.go_to_today();
        let today = CalendarDate::today();
        assert_eq!(returned, today);
        assert_eq!(state.selected_date(), Some(today));
        assert_eq!(state.display_month(), today.year_month());
    }

    #[test]
    fn test_clear_keeps_display_month() {
        let mut state = DatePickerState::new(Some(date(2024, 3, 5)));
        state.navigate_month(3);
        let display_before = state.display_month();
        state.clear(date(2024, 1, 1));
        assert_eq!(state.selected_date(), Some(date(2024, 1, 1)));
        assert_eq!(state.display_month(), display_before);
    }

    #[test]
    fn test_from_args_discards_out_of_bounds_initial_date() {
        let args = DatePickerArgs::default()
            .initial_date(date(2020, 1, 1))
            .bounds(DateBounds::at_least(date(2024, 1, 1)));
        let state = DatePickerState::from_args(&args);
        assert_eq!(state.selected_date(), None);
        assert_eq!(state.display_month(), CalendarDate::today().year_month());
    }

    #[test]
    fn test_from_args_prefers_explicit_display_month() {
        let args = DatePickerArgs::default()
            .initial_date(date(2024, 3, 5))
            .initial_display_month(YearMonth::new(2024, 7).unwrap());
        let state = DatePickerState::from_args(&args);
        assert_eq!(state.selected_date(), Some(date(2024, 3, 5)));
        assert_eq!(state.display_month(), YearMonth::new(2024, 7).unwrap());
    }

    #[test]
    fn test_headline() {
        let state = DatePickerState::new(Some(date(2024, 3, 5)));
        assert_eq!(state.headline(), "Mar 5, 2024");
        let empty = DatePickerState::unselected(YearMonth::new(2024, 3).unwrap());
        assert_eq!(empty.headline(), "No date selected");
    }

    #[test]
    fn test_args_format_uses_custom_pattern() {
        let args = DatePickerArgs::default()
            .pattern(FormatPattern::Custom)
            .custom_pattern("D/M/YY");
        assert_eq!(args.format(date(2024, 3, 5)), "5/3/24");
    }
}
