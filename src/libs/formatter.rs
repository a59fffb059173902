//! Time formatting utilities for report display.
//!
//! Every duration the report shows (row duration, delay, extra time and the
//! three totals) uses the same "HH:MM" pattern produced here.
//!
//! ## Format Specifications
//!
//! - Hours are zero-padded to at least 2 digits and never wrap at 24
//! - Minutes are zero-padded to exactly 2 digits
//! - Negative values carry a leading "-" (delays are reported this way)
//! - Seconds are truncated
//!
//! ## Examples
//!
//! ```rust
//! use shiftrep::libs::formatter::{format_duration, minutes_to_hhmm, ZERO_HHMM};
//! use chrono::Duration;
//!
//! assert_eq!(minutes_to_hhmm(90), "01:30");
//! assert_eq!(minutes_to_hhmm(-30), "-00:30");
//! assert_eq!(format_duration(&Duration::hours(9)), "09:00");
//! assert_eq!(ZERO_HHMM, "00:00");
//! ```

use chrono::Duration;

/// Zero-duration placeholder shown for totals before and without data.
pub const ZERO_HHMM: &str = "00:00";

/// Formats a signed number of minutes as "HH:MM".
///
/// The sign is kept: `-30` becomes `"-00:30"`. Hours grow past 24, so a
/// month of overtime still reads as e.g. `"126:15"`.
pub fn minutes_to_hhmm(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Formats a chrono::Duration as "HH:MM", truncating seconds.
pub fn format_duration(duration: &Duration) -> String {
    minutes_to_hhmm(duration.num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_to_hhmm_pads_both_parts() {
        assert_eq!(minutes_to_hhmm(0), "00:00");
        assert_eq!(minutes_to_hhmm(5), "00:05");
        assert_eq!(minutes_to_hhmm(540), "09:00");
    }

    #[test]
    fn test_minutes_to_hhmm_keeps_sign() {
        assert_eq!(minutes_to_hhmm(-1), "-00:01");
        assert_eq!(minutes_to_hhmm(-125), "-02:05");
    }

    #[test]
    fn test_format_duration_truncates_seconds() {
        let duration = Duration::minutes(30) + Duration::seconds(59);
        assert_eq!(format_duration(&duration), "00:30");
    }
}
