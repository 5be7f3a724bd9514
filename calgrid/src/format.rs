//! Date formatting for picker headlines, labels, and host-defined layouts.
//!
//! ## Usage
//!
//! Pick one of the fixed [`FormatPattern`] layouts, or use
//! [`FormatPattern::Custom`] with a token pattern such as `"D/M/YY"`.
use std::str::FromStr;

use thiserror::Error;

use crate::date::{CalendarDate, YearMonth};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Tokens recognized in custom patterns, longest first so `YYYY` is never
/// consumed as two `YY` tokens and `MM`/`DD` win over `M`/`D`.
const CUSTOM_TOKENS: [&str; 6] = ["YYYY", "YY", "MM", "M", "DD", "D"];

/// Textual layouts supported by [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatPattern {
    /// `DD/MM/YYYY`, e.g. `05/03/2024`.
    DdMmYyyy,
    /// `MM/DD/YYYY`, e.g. `03/05/2024`.
    MmDdYyyy,
    /// `YYYY-MM-DD`, e.g. `2024-03-05`.
    #[default]
    YyyyMmDd,
    /// `DD MMM YYYY`, e.g. `05 Mar 2024`.
    DdMmmYyyy,
    /// `MMM DD, YYYY`, e.g. `Mar 05, 2024`.
    MmmDdYyyy,
    /// Token substitution over a host-supplied pattern string.
    Custom,
}

/// Error returned when a pattern specifier string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format pattern specifier: {specifier:?}")]
pub struct ParsePatternError {
    specifier: String,
}

impl FromStr for FormatPattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DD/MM/YYYY" => Ok(FormatPattern::DdMmYyyy),
            "MM/DD/YYYY" => Ok(FormatPattern::MmDdYyyy),
            "YYYY-MM-DD" => Ok(FormatPattern::YyyyMmDd),
            "DD MMM YYYY" => Ok(FormatPattern::DdMmmYyyy),
            "MMM DD, YYYY" => Ok(FormatPattern::MmmDdYyyy),
            "custom" => Ok(FormatPattern::Custom),
            _ => Err(ParsePatternError {
                specifier: s.to_string(),
            }),
        }
    }
}

/// Renders a date in the requested layout.
///
/// Day and month fields are zero-padded to two digits; the year is an
/// unpadded decimal. `custom_pattern` is consulted only for
/// [`FormatPattern::Custom`]; when it is absent the date falls back to the
/// default headline rendering (`Mar 5, 2024`) rather than failing.
///
/// ## Examples
///
/// ```
/// use calgrid::date::CalendarDate;
/// use calgrid::format::{FormatPattern, format_date};
///
/// let date = CalendarDate::new(2024, 3, 5).unwrap();
/// assert_eq!(format_date(date, FormatPattern::YyyyMmDd, None), "2024-03-05");
/// assert_eq!(
///     format_date(date, FormatPattern::Custom, Some("D/M/YY")),
///     "5/3/24"
/// );
/// ```
pub fn format_date(date: CalendarDate, pattern: FormatPattern, custom_pattern: Option<&str>) -> String {
    let year = date.year();
    let month = date.month();
    let day = date.day();
    match pattern {
        FormatPattern::DdMmYyyy => format!("{day:02}/{month:02}/{year}"),
        FormatPattern::MmDdYyyy => format!("{month:02}/{day:02}/{year}"),
        FormatPattern::YyyyMmDd => format!("{year}-{month:02}-{day:02}"),
        FormatPattern::DdMmmYyyy => format!("{day:02} {} {year}", month_abbrev(month)),
        FormatPattern::MmmDdYyyy => format!("{} {day:02}, {year}", month_abbrev(month)),
        FormatPattern::Custom => match custom_pattern {
            Some(custom) => apply_custom_pattern(date, custom),
            None => fallback_format(date),
        },
    }
}

/// Renders a selected date the way the picker headline shows it.
pub fn fallback_format(date: CalendarDate) -> String {
    format!(
        "{} {}, {}",
        month_abbrev(date.month()),
        date.day(),
        date.year()
    )
}

/// Returns the full English month name for a month number (1-12).
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[(month as usize - 1).min(11)]
}

/// Returns the English three-letter month abbreviation for a month number
/// (1-12).
pub fn month_abbrev(month: u8) -> &'static str {
    MONTH_ABBREVS[(month as usize - 1).min(11)]
}

/// Renders the month navigation label, e.g. `March 2024`.
pub fn month_year_label(month: YearMonth) -> String {
    format!("{} {}", month_name(month.month()), month.year())
}

fn apply_custom_pattern(date: CalendarDate, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    'scan: while !rest.is_empty() {
        for token in CUSTOM_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(&substitute_token(date, token));
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }
    out
}

fn substitute_token(date: CalendarDate, token: &str) -> String {
    match token {
        "YYYY" => format!("{:04}", date.year()),
        "YY" => format!("{:02}", date.year().rem_euclid(100)),
        "MM" => format!("{:02}", date.month()),
        "M" => format!("{}", date.month()),
        "DD" => format!("{:02}", date.day()),
        _ => format!("{}", date.day()),
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
    fn test_fixed_patterns() {
        let d = date(2024, 3, 5);
        assert_eq!(format_date(d, FormatPattern::YyyyMmDd, None), "2024-03-05");
        assert_eq!(format_date(d, FormatPattern::DdMmYyyy, None), "05/03/2024");
        assert_eq!(format_date(d, FormatPattern::MmDdYyyy, None), "03/05/2024");
        assert_eq!(format_date(d, FormatPattern::DdMmmYyyy, None), "05 Mar 2024");
        assert_eq!(
            format_date(d, FormatPattern::MmmDdYyyy, None),
            "Mar 05, 2024"
        );
    }

    #[test]
    fn test_custom_pattern_tokens() {
        let d = date(2024, 3, 5);
        assert_eq!(format_date(d, FormatPattern::Custom, Some("D/M/YY")), "5/3/24");
        assert_eq!(
            format_date(d, FormatPattern::Custom, Some("YYYY-MM-DD")),
            "2024-03-05"
        );
        assert_eq!(
            format_date(d, FormatPattern::Custom, Some("DD.MM.YYYY")),
            "05.03.2024"
        );
    }

    #[test]
    fn test_custom_pattern_passes_literals_through() {
        let d = date(2024, 12, 25);
        assert_eq!(
            format_date(d, FormatPattern::Custom, Some("day D of month M")),
            "day 25 of month 12"
        );
        assert_eq!(format_date(d, FormatPattern::Custom, Some("")), "");
        assert_eq!(
            format_date(d, FormatPattern::Custom, Some("no tokens here?")),
            "no tokens here?"
        );
    }

    #[test]
    fn test_custom_pattern_longest_token_wins() {
        let d = date(2024, 3, 5);
        // YYYY must not be consumed as YY + YY, nor MM as M + M.
        assert_eq!(format_date(d, FormatPattern::Custom, Some("YYYY")), "2024");
        assert_eq!(format_date(d, FormatPattern::Custom, Some("YYYYYY")), "202424");
        assert_eq!(format_date(d, FormatPattern::Custom, Some("MMM")), "033");
    }

    #[test]
    fn test_missing_custom_pattern_falls_back() {
        let d = date(2024, 3, 5);
        assert_eq!(format_date(d, FormatPattern::Custom, None), "Mar 5, 2024");
    }

    #[test]
    fn test_pattern_specifier_parsing() {
        assert_eq!(
            "YYYY-MM-DD".parse::<FormatPattern>(),
            Ok(FormatPattern::YyyyMmDd)
        );
        assert_eq!(
            "MMM DD, YYYY".parse::<FormatPattern>(),
            Ok(FormatPattern::MmmDdYyyy)
        );
        assert_eq!("custom".parse::<FormatPattern>(), Ok(FormatPattern::Custom));
        assert!("YYYY/MM".parse::<FormatPattern>().is_err());
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_abbrev(9), "Sep");
        let ym = crate::date::YearMonth::new(2024, 3).unwrap();
        assert_eq!(month_year_label(ym), "March 2024");
    }
}
