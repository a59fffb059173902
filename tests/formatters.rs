#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use shiftrep::libs::formatter::{format_duration, minutes_to_hhmm};
    use shiftrep::libs::workshift::{build_row, totalize, Shift, ShiftMetrics, STANDARD_SHIFT_MINUTES};

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_minutes_to_hhmm_large_values() {
        assert_eq!(minutes_to_hhmm(24 * 60), "24:00");
        assert_eq!(minutes_to_hhmm(100 * 60 + 7), "100:07");
        assert_eq!(minutes_to_hhmm(-(30 * 60 + 15)), "-30:15");
    }

    #[test]
    fn test_format_duration_negative_keeps_sign() {
        assert_eq!(format_duration(&Duration::minutes(-45)), "-00:45");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(45))), "08:45");
    }

    #[test]
    fn test_metrics_short_and_long_shifts() {
        let short = ShiftMetrics::from_duration(Some(420), STANDARD_SHIFT_MINUTES);
        assert_eq!(short.delay_minutes, Some(60));
        assert_eq!(short.extra_minutes, Some(0));

        let long = ShiftMetrics::from_duration(Some(500), STANDARD_SHIFT_MINUTES);
        assert_eq!(long.delay_minutes, Some(0));
        assert_eq!(long.extra_minutes, Some(20));

        let open = ShiftMetrics::from_duration(None, STANDARD_SHIFT_MINUTES);
        assert_eq!(open.duration_minutes, None);
        assert_eq!(open.delay_minutes, None);
    }

    #[test]
    fn test_row_strings() {
        let shift = Shift {
            employee: Some("ana@example.com".to_string()),
            start_time: at(8, 9, 5),
            end_time: Some(at(8, 16, 35)),
            adjusted_end_time: None,
            adjustment_reason: None,
        };
        let row = build_row(&shift, STANDARD_SHIFT_MINUTES);

        assert_eq!(row.date, "2024-01-08");
        assert_eq!(row.start_time, "09:05");
        assert_eq!(row.end_time.as_deref(), Some("16:35"));
        assert_eq!(row.duration.as_deref(), Some("07:30"));
        assert_eq!(row.delay.as_deref(), Some("-00:30"));
        assert_eq!(row.extra.as_deref(), Some("00:00"));
        assert!(!row.adjusted);
    }

    #[test]
    fn test_totals_skip_open_shifts() {
        let metrics = [
            ShiftMetrics::from_duration(Some(540), STANDARD_SHIFT_MINUTES),
            ShiftMetrics::from_duration(None, STANDARD_SHIFT_MINUTES),
            ShiftMetrics::from_duration(Some(480), STANDARD_SHIFT_MINUTES),
        ];
        let totals = totalize(&metrics);

        assert_eq!(totals.total_duration.as_deref(), Some("17:00"));
        assert_eq!(totals.total_delay.as_deref(), Some("00:00"));
        assert_eq!(totals.total_extra.as_deref(), Some("01:00"));
    }

    #[test]
    fn test_totals_of_nothing_are_zero() {
        let totals = totalize(&[]);
        assert_eq!(totals.total_duration.as_deref(), Some("00:00"));
        assert_eq!(totals.total_delay.as_deref(), Some("00:00"));
        assert_eq!(totals.total_extra.as_deref(), Some("00:00"));
    }
}
