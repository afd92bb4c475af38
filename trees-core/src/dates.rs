//! Date utility functions

use chrono::{Datelike, NaiveDate};

/// Date format used by `<input type="date">` values: "YYYY-MM-DD"
pub const PICKER_FORMAT: &str = "%Y-%m-%d";

/// Display text for a record whose timestamp could not be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// English ordinal suffix for a day of the month (1st, 2nd, 3rd, 11th, ...).
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Format a date for the chart axis, e.g. "3rd Jan 24".
///
/// Month names come from chrono's fixed English table, so the output does not
/// depend on the browser locale.
pub fn format_display(date: &NaiveDate) -> String {
    let day = date.day();
    format!("{}{} {}", day, ordinal_suffix(day), date.format("%b %y"))
}

/// Format a date as a picker value, "YYYY-MM-DD".
pub fn format_picker(date: &NaiveDate) -> String {
    date.format(PICKER_FORMAT).to_string()
}

/// Parse a picker value. Cleared or garbled inputs yield `None`.
pub fn parse_picker(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, PICKER_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffix() {
        let expected = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in expected {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn test_format_display() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(format_display(&date), "3rd Jan 24");

        let date = NaiveDate::from_ymd_opt(2009, 12, 12).unwrap();
        assert_eq!(format_display(&date), "12th Dec 09");
    }

    #[test]
    fn test_picker_round_trip() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let formatted = format_picker(&date);
        assert_eq!(formatted, "2023-06-15");
        assert_eq!(parse_picker(&formatted), Some(date));
    }

    #[test]
    fn test_parse_picker_rejects_garbage() {
        assert_eq!(parse_picker(""), None);
        assert_eq!(parse_picker("   "), None);
        assert_eq!(parse_picker("15/06/2023"), None);
        assert_eq!(parse_picker("2023-02-30"), None);
    }
}
