//! Chart series projection.
//!
//! The D3 line chart is keyed by the display date on the X axis and the
//! record's `value` on the Y axis. Both the points and the chart config are
//! serialised to JSON for the JS bridge.

use crate::record::TreeRecord;
use serde::Serialize;

/// One point on the line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub value: f64,
}

impl From<&TreeRecord> for ChartPoint {
    fn from(record: &TreeRecord) -> Self {
        ChartPoint {
            date: record.display_date(),
            value: record.value,
        }
    }
}

/// Presentation settings handed to `renderLineChart`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartConfig {
    pub x_axis_label: String,
    /// Legend and tooltip name of the plotted series.
    pub series_name: String,
    pub color: String,
    pub height: u32,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        LineChartConfig {
            x_axis_label: "Date".to_string(),
            series_name: "value".to_string(),
            color: "#8884d8".to_string(),
            height: 800,
        }
    }
}

/// Project records into chart points, keeping their order.
pub fn chart_points(records: &[TreeRecord]) -> Vec<ChartPoint> {
    records.iter().map(ChartPoint::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_from_body;
    use serde_json::json;

    #[test]
    fn test_chart_points_from_loaded_payload() {
        let body = json!([
            { "createdAt": "2024-01-05", "value": 10 },
            { "createdAt": "2024-01-03", "value": 5 }
        ])
        .to_string();
        let loaded = load_from_body(&body).unwrap();

        let points = chart_points(&loaded.records);
        assert_eq!(
            serde_json::to_value(&points).unwrap(),
            json!([
                { "date": "3rd Jan 24", "value": 5.0 },
                { "date": "5th Jan 24", "value": 10.0 }
            ])
        );
    }

    #[test]
    fn test_config_serialises_camel_case() {
        let value = serde_json::to_value(LineChartConfig::default()).unwrap();
        assert_eq!(value["xAxisLabel"], json!("Date"));
        assert_eq!(value["seriesName"], json!("value"));
        assert_eq!(value["color"], json!("#8884d8"));
        assert_eq!(value["height"], json!(800));
    }
}
