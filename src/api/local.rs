//! Offline report source built from exported shift records.
//!
//! The file holds a JSON array of [`Shift`] records. Shifts are selected by
//! the calendar date they started on, both bounds inclusive, ordered by start
//! time and totalled exactly the way the attendance backend does it.

use super::{ReportApi, ReportError};
use crate::libs::report::DateRange;
use crate::libs::workshift::{build_report, Shift, STANDARD_SHIFT_MINUTES};
use chrono::NaiveDate;
use serde_json::Value;
use std::path::{Path, PathBuf};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct LocalShifts {
    path: PathBuf,
    standard_minutes: i64,
}

impl LocalShifts {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            standard_minutes: STANDARD_SHIFT_MINUTES,
        }
    }

    pub fn with_standard_minutes(mut self, minutes: i64) -> Self {
        self.standard_minutes = minutes;
        self
    }

    fn read_shifts(&self) -> Result<Vec<Shift>, ReportError> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn parse_bound(value: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ReportError::InvalidDate(value.to_string()))
}

/// Keeps shifts that started within `[start, end]` and orders them by start time.
pub fn select_shifts(mut shifts: Vec<Shift>, start: NaiveDate, end: NaiveDate) -> Vec<Shift> {
    shifts.retain(|shift| {
        let date = shift.start_time.date();
        date >= start && date <= end
    });
    shifts.sort_by_key(|shift| shift.start_time);
    shifts
}

impl ReportApi for LocalShifts {
    async fn fetch_report(&self, range: &DateRange) -> Result<Value, ReportError> {
        let start = parse_bound(&range.start)?;
        let end = parse_bound(&range.end)?;

        let shifts = self.read_shifts()?;
        tracing::debug!(path = %self.path.display(), total = shifts.len(), "loaded shift records");

        let selected = select_shifts(shifts, start, end);
        let report = build_report(&selected, self.standard_minutes);
        Ok(serde_json::to_value(report)?)
    }
}
