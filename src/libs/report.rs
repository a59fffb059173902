//! Workshift report schema and its display projection.
//!
//! The backend answers a report request with a JSON document of rows and
//! totals. [`ReportResponse::from_value`] validates that document at the
//! boundary; a document that does not fit the schema is *malformed* and is
//! never rendered. [`TableRow`] and [`TotalsView`] are the already-formatted
//! values handed to a render target.

use crate::libs::formatter::ZERO_HHMM;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Placeholder for an absent time cell.
pub const MISSING_CELL: &str = "-";

/// Requested report interval. Both bounds are opaque date strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// True when both bounds were provided.
    pub fn is_complete(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }
}

/// One attendance line as produced by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub date: String,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub delay: Option<String>,
    #[serde(default)]
    pub extra: Option<String>,
    #[serde(default)]
    pub adjusted: bool,
}

/// Aggregates over every row of the requested range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    #[serde(default)]
    pub total_duration: Option<String>,
    #[serde(default)]
    pub total_delay: Option<String>,
    #[serde(default)]
    pub total_extra: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub rows: Vec<ReportRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub totals: ReportTotals,
}

/// Reasons a response body is rejected by the schema.
#[derive(Error, Debug)]
pub enum MalformedReport {
    /// `rows` is missing or is not an array.
    #[error("`rows` is not an array")]
    RowsNotArray,
    /// `rows` is an array but an element or the totals do not fit.
    #[error("schema mismatch: {0}")]
    Schema(#[from] serde_json::Error),
}

impl ReportResponse {
    pub fn from_value(value: Value) -> Result<Self, MalformedReport> {
        if !value.get("rows").is_some_and(Value::is_array) {
            return Err(MalformedReport::RowsNotArray);
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Visual state of the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub style: BadgeStyle,
}

impl Badge {
    pub fn for_adjusted(adjusted: bool) -> Self {
        if adjusted {
            Self {
                label: "Ajustado",
                style: BadgeStyle::Warning,
            }
        } else {
            Self {
                label: "OK",
                style: BadgeStyle::Success,
            }
        }
    }
}

/// A report row with every cell ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub delay: String,
    pub extra: String,
    pub badge: Badge,
}

impl TableRow {
    /// The six text cells in column order; the badge is the seventh column.
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.date,
            &self.start_time,
            &self.end_time,
            &self.duration,
            &self.delay,
            &self.extra,
        ]
    }
}

impl From<&ReportRow> for TableRow {
    fn from(row: &ReportRow) -> Self {
        Self {
            date: row.date.clone(),
            start_time: row.start_time.clone(),
            end_time: or_placeholder(&row.end_time, MISSING_CELL),
            duration: or_placeholder(&row.duration, MISSING_CELL),
            delay: or_placeholder(&row.delay, MISSING_CELL),
            extra: or_placeholder(&row.extra, MISSING_CELL),
            badge: Badge::for_adjusted(row.adjusted),
        }
    }
}

/// The three total displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsView {
    pub duration: String,
    pub delay: String,
    pub extra: String,
}

impl TotalsView {
    pub fn zeroed() -> Self {
        Self {
            duration: ZERO_HHMM.to_string(),
            delay: ZERO_HHMM.to_string(),
            extra: ZERO_HHMM.to_string(),
        }
    }
}

impl From<&ReportTotals> for TotalsView {
    fn from(totals: &ReportTotals) -> Self {
        Self {
            duration: or_placeholder(&totals.total_duration, ZERO_HHMM),
            delay: or_placeholder(&totals.total_delay, ZERO_HHMM),
            extra: or_placeholder(&totals.total_extra, ZERO_HHMM),
        }
    }
}

// Empty strings count as missing.
fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_must_be_an_array() {
        for body in [json!({"rows": {}}), json!({"rows": null}), json!({"totals": {}}), json!([])] {
            assert!(matches!(ReportResponse::from_value(body), Err(MalformedReport::RowsNotArray)));
        }
    }

    #[test]
    fn test_row_without_date_is_a_schema_error() {
        let body = json!({"rows": [{"start_time": "08:00"}]});
        assert!(matches!(ReportResponse::from_value(body), Err(MalformedReport::Schema(_))));
    }

    #[test]
    fn test_malformed_report_is_an_error() {
        let err = ReportResponse::from_value(json!({"rows": {}})).unwrap_err();
        assert_eq!(err.to_string(), "`rows` is not an array");

        let err = ReportResponse::from_value(json!({"rows": [{"start_time": "08:00"}]})).unwrap_err();
        assert!(err.to_string().starts_with("schema mismatch: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_totals_may_be_missing_or_null() {
        let missing = ReportResponse::from_value(json!({"rows": []})).unwrap();
        let null = ReportResponse::from_value(json!({"rows": [], "totals": null})).unwrap();
        assert_eq!(missing.totals, ReportTotals::default());
        assert_eq!(null.totals, ReportTotals::default());
    }

    #[test]
    fn test_empty_end_time_renders_placeholder() {
        let row = ReportRow {
            date: "2024-01-02".to_string(),
            start_time: "08:00".to_string(),
            end_time: Some(String::new()),
            duration: None,
            delay: None,
            extra: None,
            adjusted: false,
        };
        let view = TableRow::from(&row);
        assert_eq!(view.end_time, "-");
        assert_eq!(view.duration, "-");
    }

    #[test]
    fn test_incomplete_range() {
        assert!(!DateRange::new("", "2024-01-31").is_complete());
        assert!(!DateRange::new("2024-01-01", "").is_complete());
        assert!(DateRange::new("2024-01-01", "2024-01-31").is_complete());
    }
}
