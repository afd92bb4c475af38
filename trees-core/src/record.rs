//! Tree records as served by the trees endpoint and as held by the app.

use crate::dates;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Offset-carrying ISO layouts RFC 3339 does not cover: basic (`+0000`) and
/// hour-only (`+02`) offsets, and minute precision. `%#z` takes all three.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Naive ISO timestamp layouts accepted after the offset layouts.
/// `%.f` makes the fractional seconds optional.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// One element of the trees payload, exactly as received.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTree {
    #[serde(default)]
    pub id: Value,
    /// Usually an ISO timestamp string; anything else is kept and judged later.
    #[serde(rename = "createdAt", default)]
    pub created_at: Value,
    pub value: f64,
    /// Fields this app does not use, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A tree-planting record with a single canonical timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRecord {
    pub id: Value,
    /// UTC timestamp, or `None` when the source value could not be parsed.
    pub created_at: Option<NaiveDateTime>,
    pub value: f64,
    pub extra: Map<String, Value>,
}

impl TreeRecord {
    /// Calendar day of the record, used for every range comparison.
    pub fn day(&self) -> Option<NaiveDate> {
        self.created_at.map(|ts| ts.date())
    }

    /// Axis label for the record, e.g. "3rd Jan 24".
    pub fn display_date(&self) -> String {
        match self.day() {
            Some(day) => dates::format_display(&day),
            None => dates::INVALID_DATE.to_string(),
        }
    }
}

impl From<RawTree> for TreeRecord {
    fn from(raw: RawTree) -> Self {
        TreeRecord {
            id: raw.id,
            created_at: parse_created_at(&raw.created_at),
            value: raw.value,
            extra: raw.extra,
        }
    }
}

/// Interpret a `createdAt` value: strings are parsed as ISO timestamps,
/// integers as epoch milliseconds. Everything else is undated.
pub fn parse_created_at(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

/// Parse an ISO-like timestamp, normalising any offset to UTC.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    let with_offset = match s.strip_suffix(|c| c == 'Z' || c == 'z') {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Some(dt.naive_utc());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, dates::PICKER_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
