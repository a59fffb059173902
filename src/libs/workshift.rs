//! Workshift metrics: how long a shift lasted and how it compares to the
//! standard shift.
//!
//! A shift is measured from its start to its *effective* end, which is the
//! manually adjusted end time when one was recorded and the clock-out time
//! otherwise. An open shift (no end at all) has no metrics.
//!
//! ```rust
//! use shiftrep::libs::workshift::{ShiftMetrics, STANDARD_SHIFT_MINUTES};
//!
//! let metrics = ShiftMetrics::from_duration(Some(450), STANDARD_SHIFT_MINUTES);
//! assert_eq!(metrics.delay_minutes, Some(30));
//! assert_eq!(metrics.extra_minutes, Some(0));
//! ```

use crate::libs::formatter::{minutes_to_hhmm, ZERO_HHMM};
use crate::libs::report::{ReportResponse, ReportRow, ReportTotals};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Length of a regular shift: 8 hours.
pub const STANDARD_SHIFT_MINUTES: i64 = 8 * 60;

/// A recorded workshift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    #[serde(default)]
    pub employee: Option<String>,
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    /// End time set by an administrator for a shift that was never closed
    /// or was closed incorrectly.
    #[serde(default)]
    pub adjusted_end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub adjustment_reason: Option<String>,
}

impl Shift {
    pub fn effective_end_time(&self) -> Option<NaiveDateTime> {
        self.adjusted_end_time.or(self.end_time)
    }

    pub fn was_adjusted(&self) -> bool {
        self.adjusted_end_time.is_some()
    }

    /// Whole minutes between start and effective end.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.effective_end_time().map(|end| (end - self.start_time).num_minutes())
    }
}

/// Duration, delay and extra time of one shift, in minutes.
///
/// All three are `None` for an open shift. Delay and extra are never both
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftMetrics {
    pub duration_minutes: Option<i64>,
    pub delay_minutes: Option<i64>,
    pub extra_minutes: Option<i64>,
}

impl ShiftMetrics {
    pub fn from_duration(duration_minutes: Option<i64>, standard_minutes: i64) -> Self {
        let Some(duration) = duration_minutes else {
            return Self {
                duration_minutes: None,
                delay_minutes: None,
                extra_minutes: None,
            };
        };

        let diff = duration - standard_minutes;
        Self {
            duration_minutes: Some(duration),
            delay_minutes: Some(if diff < 0 { diff.abs() } else { 0 }),
            extra_minutes: Some(if diff > 0 { diff } else { 0 }),
        }
    }

    pub fn for_shift(shift: &Shift, standard_minutes: i64) -> Self {
        Self::from_duration(shift.duration_minutes(), standard_minutes)
    }
}

/// Delay is displayed as a negative amount; zero stays "00:00".
fn delay_hhmm(minutes: i64) -> String {
    if minutes == 0 {
        ZERO_HHMM.to_string()
    } else {
        minutes_to_hhmm(-minutes)
    }
}

fn extra_hhmm(minutes: i64) -> String {
    if minutes == 0 {
        ZERO_HHMM.to_string()
    } else {
        minutes_to_hhmm(minutes)
    }
}

/// Builds the report line for a shift.
pub fn build_row(shift: &Shift, standard_minutes: i64) -> ReportRow {
    let metrics = ShiftMetrics::for_shift(shift, standard_minutes);
    ReportRow {
        date: shift.start_time.format("%Y-%m-%d").to_string(),
        start_time: shift.start_time.format("%H:%M").to_string(),
        end_time: shift.effective_end_time().map(|end| end.format("%H:%M").to_string()),
        duration: metrics.duration_minutes.map(minutes_to_hhmm),
        delay: metrics.delay_minutes.map(delay_hhmm),
        extra: metrics.extra_minutes.map(extra_hhmm),
        adjusted: shift.was_adjusted(),
    }
}

/// Sums the metrics of every closed shift.
pub fn totalize(metrics: &[ShiftMetrics]) -> ReportTotals {
    let (duration, delay, extra) = metrics.iter().fold((0, 0, 0), |(duration, delay, extra), m| {
        (
            duration + m.duration_minutes.unwrap_or(0),
            delay + m.delay_minutes.unwrap_or(0),
            extra + m.extra_minutes.unwrap_or(0),
        )
    });

    ReportTotals {
        total_duration: Some(minutes_to_hhmm(duration)),
        total_delay: Some(delay_hhmm(delay)),
        total_extra: Some(extra_hhmm(extra)),
    }
}

/// Builds rows and totals for shifts already filtered and ordered.
pub fn build_report(shifts: &[Shift], standard_minutes: i64) -> ReportResponse {
    let rows = shifts.iter().map(|shift| build_row(shift, standard_minutes)).collect();
    let metrics = shifts
        .iter()
        .map(|shift| ShiftMetrics::for_shift(shift, standard_minutes))
        .collect::<Vec<_>>();

    ReportResponse {
        rows,
        totals: totalize(&metrics),
    }
}
