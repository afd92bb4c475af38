//! Day-granularity range filters.
//!
//! Filters never fail: a record without a usable date simply does not match.

use crate::record::TreeRecord;
use chrono::NaiveDate;

/// Records on or after `boundary`, in their original order.
pub fn filter_by_start(records: &[TreeRecord], boundary: NaiveDate) -> Vec<TreeRecord> {
    records
        .iter()
        .filter(|r| r.day().is_some_and(|day| day >= boundary))
        .cloned()
        .collect()
}

/// Records on or before `boundary`, in their original order.
pub fn filter_by_end(records: &[TreeRecord], boundary: NaiveDate) -> Vec<TreeRecord> {
    records
        .iter()
        .filter(|r| r.day().is_some_and(|day| day <= boundary))
        .cloned()
        .collect()
}

/// Records within `[start, end]`. An inverted window is empty.
pub fn filter_range(records: &[TreeRecord], start: NaiveDate, end: NaiveDate) -> Vec<TreeRecord> {
    filter_by_end(&filter_by_start(records, start), end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(day: Option<NaiveDate>, hour: u32, value: f64) -> TreeRecord {
        TreeRecord {
            id: Value::Null,
            created_at: day.map(|d| d.and_hms_opt(hour, 0, 0).unwrap()),
            value,
            extra: Map::new(),
        }
    }

    fn sample() -> Vec<TreeRecord> {
        vec![
            record(Some(date(2024, 1, 1)), 9, 1.0),
            record(Some(date(2024, 1, 3)), 0, 5.0),
            record(Some(date(2024, 1, 3)), 23, 6.0),
            record(Some(date(2024, 1, 5)), 12, 10.0),
            record(Some(date(2024, 1, 8)), 7, 2.0),
            record(None, 0, 99.0),
        ]
    }

    fn values(records: &[TreeRecord]) -> Vec<f64> {
        records.iter().map(|r| r.value).collect()
    }

    #[test]
    fn test_filter_by_start_example() {
        let records = vec![
            record(Some(date(2024, 1, 3)), 0, 5.0),
            record(Some(date(2024, 1, 5)), 0, 10.0),
        ];
        let kept = filter_by_start(&records, date(2024, 1, 4));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].display_date(), "5th Jan 24");
        assert_eq!(kept[0].value, 10.0);
    }

    #[test]
    fn test_filter_by_start_is_inclusive_and_ignores_time() {
        let kept = filter_by_start(&sample(), date(2024, 1, 3));
        assert_eq!(values(&kept), vec![5.0, 6.0, 10.0, 2.0]);
    }

    #[test]
    fn test_filter_by_end_is_inclusive_and_ignores_time() {
        let kept = filter_by_end(&sample(), date(2024, 1, 3));
        assert_eq!(values(&kept), vec![1.0, 5.0, 6.0]);
    }

    #[test]
    fn test_undated_records_never_match() {
        let early = date(1900, 1, 1);
        let late = date(2999, 1, 1);
        assert!(!values(&filter_by_start(&sample(), early)).contains(&99.0));
        assert!(!values(&filter_by_end(&sample(), late)).contains(&99.0));
    }

    #[test]
    fn test_filters_are_idempotent() {
        let d = date(2024, 1, 4);
        let once = filter_by_start(&sample(), d);
        assert_eq!(filter_by_start(&once, d), once);

        let once = filter_by_end(&sample(), d);
        assert_eq!(filter_by_end(&once, d), once);
    }

    #[test]
    fn test_composed_filters_stay_inside_window() {
        let (start, end) = (date(2024, 1, 2), date(2024, 1, 6));
        let kept = filter_by_end(&filter_by_start(&sample(), start), end);
        assert_eq!(values(&kept), vec![5.0, 6.0, 10.0]);
        assert!(kept
            .iter()
            .all(|r| r.day().is_some_and(|d| d >= start && d <= end)));
        assert_eq!(filter_range(&sample(), start, end), kept);
    }

    #[test]
    fn test_inverted_window_is_empty() {
        assert!(filter_range(&sample(), date(2024, 1, 6), date(2024, 1, 2)).is_empty());
    }

    #[test]
    fn test_result_preserves_relative_order() {
        let input = vec![
            record(Some(date(2024, 1, 5)), 0, 3.0),
            record(Some(date(2024, 1, 1)), 0, 1.0),
            record(Some(date(2024, 1, 9)), 0, 4.0),
        ];
        let kept = filter_by_start(&input, date(2024, 1, 2));
        assert_eq!(values(&kept), vec![3.0, 4.0]);
    }
}
