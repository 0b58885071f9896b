#[cfg(test)]
mod tests {
    use chrono::Duration;
    use punchlog::libs::formatter::{
        difference, format_day_duration, format_difference, format_duration, parse_duration, INVALID, NOT_APPLICABLE,
    };

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "0:00:00");
    }

    #[test]
    fn test_format_duration_basic() {
        assert_eq!(format_duration(&Duration::seconds(3661)), "1:01:01");
        assert_eq!(format_duration(&(Duration::hours(9) + Duration::minutes(30))), "9:30:00");
        assert_eq!(format_duration(&Duration::minutes(45)), "0:45:00");
        assert_eq!(format_duration(&Duration::seconds(59)), "0:00:59");
    }

    #[test]
    fn test_format_duration_hours_unpadded_and_unbounded() {
        assert_eq!(format_duration(&Duration::hours(8)), "8:00:00");
        assert_eq!(format_duration(&Duration::hours(42)), "42:00:00");
        assert_eq!(format_duration(&Duration::hours(100)), "100:00:00");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::seconds(-1)), "0:00:00");
        assert_eq!(format_duration(&Duration::hours(-5)), "0:00:00");
    }

    #[test]
    fn test_format_duration_fractional_seconds_floored() {
        assert_eq!(format_duration(&Duration::milliseconds(1500)), "0:00:01");
        assert_eq!(format_duration(&Duration::milliseconds(999)), "0:00:00");
    }

    #[test]
    fn test_format_day_duration_invalid_marker() {
        assert_eq!(format_day_duration(None), INVALID);
        assert_eq!(format_day_duration(Some(Duration::hours(2))), "2:00:00");
    }

    #[test]
    fn test_parse_duration_full_form() {
        assert_eq!(parse_duration("2:30:00"), Some(Duration::hours(2) + Duration::minutes(30)));
        assert_eq!(parse_duration("0:00:00"), Some(Duration::zero()));
        assert_eq!(parse_duration("42:00:00"), Some(Duration::hours(42)));
    }

    #[test]
    fn test_parse_duration_short_forms() {
        // Two segments are hours:minutes, one segment is hours
        assert_eq!(parse_duration("2:30"), Some(Duration::hours(2) + Duration::minutes(30)));
        assert_eq!(parse_duration("3"), Some(Duration::hours(3)));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("Invalid"), None);
        assert_eq!(parse_duration("N/A"), None);
        assert_eq!(parse_duration("1:2:3:4"), None);
        assert_eq!(parse_duration("one:two"), None);
        assert_eq!(parse_duration("-1:00:00"), None);
    }

    #[test]
    fn test_parse_format_round_trip() {
        for text in ["0:00:00", "1:01:01", "9:30:00", "42:00:00", "0:15:00"] {
            let parsed = parse_duration(text).unwrap();
            assert_eq!(format_duration(&parsed), text);
        }
    }

    #[test]
    fn test_difference_basic() {
        let a = parse_duration("9:30:00");
        let b = parse_duration("9:15:00");
        assert_eq!(difference(a, b), Some(Duration::minutes(15)));
    }

    #[test]
    fn test_difference_negative_suppressed() {
        let a = parse_duration("2:00:00");
        let b = parse_duration("2:30:00");
        assert_eq!(difference(a, b), None);
        assert_eq!(format_difference(difference(a, b)), NOT_APPLICABLE);
    }

    #[test]
    fn test_difference_invalid_operand() {
        assert_eq!(difference(None, parse_duration("1:00:00")), None);
        assert_eq!(difference(parse_duration("1:00:00"), None), None);
        assert_eq!(difference(None, None), None);
    }

    #[test]
    fn test_difference_equal_operands_is_zero() {
        let a = parse_duration("8:00:00");
        assert_eq!(difference(a, a), Some(Duration::zero()));
        assert_eq!(format_difference(difference(a, a)), "0:00:00");
    }
}
