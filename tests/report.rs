#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use punchlog::libs::formatter::{difference, format_day_duration, format_difference};
    use punchlog::libs::punch::parse_log;
    use punchlog::libs::report::{aggregate, BusinessWindow};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_clipped_to_business_window() {
        // 08:15 - 17:45 raw; realized clips the end to 17:30
        let records = parse_log("101 01/03/2024 08:15:00 D1\n101 01/03/2024 17:45:00 D1");
        let days = aggregate(&records, &BusinessWindow::default());

        assert_eq!(days.len(), 1);
        let day = &days[0];
        assert_eq!(day.date, date(2024, 3, 1));
        assert_eq!(format_day_duration(day.total), "9:30:00");
        assert_eq!(format_day_duration(day.realized), "9:15:00");
        assert_eq!(format_difference(difference(day.total, day.realized)), "0:15:00");
    }

    #[test]
    fn test_day_inside_business_window() {
        // Both punches inside the window; total and realized coincide
        let records = parse_log("101 01/03/2024 09:00:00 D1\n101 01/03/2024 17:00:00 D1");
        let days = aggregate(&records, &BusinessWindow::default());

        assert_eq!(days[0].total, Some(Duration::hours(8)));
        assert_eq!(days[0].realized, Some(Duration::hours(8)));
    }

    #[test]
    fn test_single_punch_is_invalid_but_kept() {
        let records = parse_log("101 01/03/2024 08:15:00 D1");
        let days = aggregate(&records, &BusinessWindow::default());

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].total, None);
        assert_eq!(days[0].realized, None);
        assert_eq!(format_day_duration(days[0].total), "Invalid");
    }

    #[test]
    fn test_identical_timestamps_are_invalid() {
        let records = parse_log("101 01/03/2024 08:15:00 D1\n102 01/03/2024 08:15:00 D2");
        let days = aggregate(&records, &BusinessWindow::default());

        assert_eq!(days[0].total, None);
        assert_eq!(days[0].realized, None);
    }

    #[test]
    fn test_day_entirely_before_window_realized_invalid() {
        // Valid raw span, but the clipped span collapses: realized stays
        // Invalid, never 0:00:00
        let records = parse_log("101 01/03/2024 06:00:00 D1\n101 01/03/2024 07:30:00 D1");
        let days = aggregate(&records, &BusinessWindow::default());

        assert_eq!(days[0].total, Some(Duration::minutes(90)));
        assert_eq!(days[0].realized, None);
    }

    #[test]
    fn test_day_entirely_after_window_realized_invalid() {
        let records = parse_log("101 01/03/2024 18:00:00 D1\n101 01/03/2024 21:00:00 D1");
        let days = aggregate(&records, &BusinessWindow::default());

        assert_eq!(days[0].total, Some(Duration::hours(3)));
        assert_eq!(days[0].realized, None);
    }

    #[test]
    fn test_intermediate_punches_ignored() {
        // Only the earliest and latest punches of a day define the span
        let input = "101 01/03/2024 12:00:00 D1\n101 01/03/2024 08:15:00 D1\n101 01/03/2024 13:30:00 D1\n101 01/03/2024 17:45:00 D1";
        let days = aggregate(&parse_log(input), &BusinessWindow::default());

        assert_eq!(format_day_duration(days[0].total), "9:30:00");
        assert_eq!(format_day_duration(days[0].realized), "9:15:00");
    }

    #[test]
    fn test_dates_sorted_ascending() {
        let input = "101 03/03/2024 08:00:00 D1\n101 03/03/2024 17:00:00 D1\n\
                     101 01/03/2024 08:00:00 D1\n101 01/03/2024 17:00:00 D1\n\
                     101 02/03/2024 08:00:00 D1\n101 02/03/2024 17:00:00 D1";
        let days = aggregate(&parse_log(input), &BusinessWindow::default());

        let dates: Vec<NaiveDate> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2024, 3, 1), date(2024, 3, 2), date(2024, 3, 3)]);
    }

    #[test]
    fn test_mixed_valid_and_invalid_days() {
        let input = "101 01/03/2024 08:00:00 D1\n101 01/03/2024 17:30:00 D1\n101 02/03/2024 09:00:00 D1";
        let days = aggregate(&parse_log(input), &BusinessWindow::default());

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].total, Some(Duration::hours(9) + Duration::minutes(30)));
        assert_eq!(days[1].total, None);
    }

    #[test]
    fn test_custom_business_window() {
        let window = BusinessWindow {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        };
        let records = parse_log("101 01/03/2024 08:00:00 D1\n101 01/03/2024 18:00:00 D1");
        let days = aggregate(&records, &window);

        assert_eq!(days[0].total, Some(Duration::hours(10)));
        assert_eq!(days[0].realized, Some(Duration::hours(8)));
    }
}
