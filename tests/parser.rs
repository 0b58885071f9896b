#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Timelike};
    use punchlog::libs::punch::{parse_log, PunchRecord};

    #[test]
    fn test_parse_line_valid() {
        let record = PunchRecord::parse_line(&["101", "01/03/2024", "08:15:00", "D1"]).unwrap();

        assert_eq!(record.employee_id, "101");
        assert_eq!(record.device_id, "D1");
        assert_eq!(record.timestamp.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(record.timestamp.time().hour(), 8);
        assert_eq!(record.timestamp.time().minute(), 15);
    }

    #[test]
    fn test_parse_line_round_trip() {
        // Re-splitting the produced timestamp yields back the original parts.
        let record = PunchRecord::parse_line(&["7", "29/02/2024", "23:59:59", "D9"]).unwrap();

        assert_eq!(record.timestamp.date().day(), 29);
        assert_eq!(record.timestamp.date().month(), 2);
        assert_eq!(record.timestamp.date().year(), 2024);
        assert_eq!(record.timestamp.time().hour(), 23);
        assert_eq!(record.timestamp.time().minute(), 59);
        assert_eq!(record.timestamp.time().second(), 59);
    }

    #[test]
    fn test_parse_line_extra_tokens_ignored() {
        let record = PunchRecord::parse_line(&["101", "01/03/2024", "08:15:00", "D1", "extra", "junk"]);
        assert!(record.is_some());
    }

    #[test]
    fn test_parse_line_missing_tokens() {
        assert!(PunchRecord::parse_line(&[]).is_none());
        assert!(PunchRecord::parse_line(&["101"]).is_none());
        assert!(PunchRecord::parse_line(&["101", "01/03/2024", "08:15:00"]).is_none());
    }

    #[test]
    fn test_parse_line_invalid_calendar_date() {
        // Day 32 and month 13 do not resolve to real dates
        assert!(PunchRecord::parse_line(&["101", "32/01/2024", "08:00:00", "D1"]).is_none());
        assert!(PunchRecord::parse_line(&["101", "01/13/2024", "08:00:00", "D1"]).is_none());
        // February 30th does not exist
        assert!(PunchRecord::parse_line(&["101", "30/02/2024", "08:00:00", "D1"]).is_none());
    }

    #[test]
    fn test_parse_line_malformed_date_or_time() {
        assert!(PunchRecord::parse_line(&["101", "01-03-2024", "08:00:00", "D1"]).is_none());
        assert!(PunchRecord::parse_line(&["101", "//", "08:00:00", "D1"]).is_none());
        assert!(PunchRecord::parse_line(&["101", "01/03/2024", "junk", "D1"]).is_none());
        assert!(PunchRecord::parse_line(&["101", "01/03/2024", "", "D1"]).is_none());
    }

    #[test]
    fn test_parse_log_header_skipped() {
        let input = "EMP_NMBR DATE TIME DEVICE\n101 01/03/2024 08:15:00 D1\n101 01/03/2024 17:45:00 D1";
        let records = parse_log(input);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_log_header_case_insensitive() {
        let lower = parse_log("emp_nmbr date time device\n101 01/03/2024 08:15:00 D1");
        let mixed = parse_log("Emp_Nmbr date time device\n101 01/03/2024 08:15:00 D1");
        assert_eq!(lower.len(), 1);
        assert_eq!(mixed.len(), 1);
    }

    #[test]
    fn test_parse_log_header_only_first_line() {
        // A header-looking line past the first position is just a bad line,
        // dropped like any other malformed entry.
        let input = "101 01/03/2024 08:15:00 D1\nEMP_NMBR DATE TIME DEVICE\n101 01/03/2024 17:45:00 D1";
        let records = parse_log(input);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_log_drops_malformed_lines_silently() {
        let input = "101 01/03/2024 08:15:00 D1\ngarbage\n101 bad-date 09:00:00 D1\n101 01/03/2024 17:45:00 D1";
        let records = parse_log(input);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_log_empty_and_blank_lines() {
        assert!(parse_log("").is_empty());
        assert!(parse_log("\n\n  \n").is_empty());

        let records = parse_log("101 01/03/2024 08:15:00 D1\n\n101 01/03/2024 17:45:00 D1\n");
        assert_eq!(records.len(), 2);
    }
}
