//! Terminal demo for the calendar grid engine.
//!
//! Plays the role of the UI shell: renders the month grid as text, runs a
//! few navigation and selection transitions, and prints the formatted
//! results.
use calgrid::{
    bounds::DateBounds,
    date::{CalendarDate, Weekday},
    format::{FormatPattern, format_date, month_year_label},
    state::{DatePickerArgs, DatePickerState},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = DatePickerArgs::default()
        .bounds(DateBounds::at_most(CalendarDate::today()))
        .pattern(FormatPattern::DdMmmYyyy);
    let mut state = DatePickerState::from_args(&args);

    println!("{}", month_year_label(state.display_month()));
    print_grid(&state);

    state.navigate_month(-1);
    info!("navigated to previous month");
    println!("\n{}", month_year_label(state.display_month()));
    print_grid(&state);

    if let Some(first) = state.display_month().to_date(1) {
        if state.select_date(first, &args.bounds) {
            println!("\nselected: {}", args.format(first));
        } else {
            println!("\n{} is not selectable", args.format(first));
        }
    }

    let today = state.go_to_today();
    println!("back to today: {}", format_date(today, FormatPattern::YyyyMmDd, None));
    println!("headline: {}", state.headline());
}

fn print_grid(state: &DatePickerState) {
    let header: Vec<&str> = (0..7)
        .map(|i| Weekday::from_sunday_index(i).short_label())
        .collect();
    println!("{}", header.join(" "));

    for week in state.grid().weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                if cell.in_current_month {
                    format!("{:>3}", cell.date.day())
                } else {
                    format!("{:>3}", ".")
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }
}
