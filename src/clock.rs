use chrono::{DateTime, FixedOffset, Utc};

/// Format used for every timestamp the probe prints.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const BEIJING_OFFSET_SECS: i32 = 8 * 3600;

/// Fixed UTC+8 offset ("Beijing time"), independent of the host timezone.
pub fn beijing_offset() -> FixedOffset {
    FixedOffset::east_opt(BEIJING_OFFSET_SECS).expect("UTC+8 is within the valid offset range")
}

pub fn to_beijing(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    instant.with_timezone(&beijing_offset())
}

pub fn format_timestamp(time: &DateTime<FixedOffset>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_beijing_offset_is_eight_hours_east() {
        assert_eq!(beijing_offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn test_to_beijing_shifts_wall_clock_by_eight_hours() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 15, 6, 30, 0).unwrap();
        let beijing = to_beijing(utc);

        assert_eq!(format_timestamp(&beijing), "2024-03-15 14:30:00");
        // Same instant, different wall clock
        assert_eq!(beijing.timestamp(), utc.timestamp());
    }

    #[test]
    fn test_to_beijing_crosses_date_boundary() {
        let utc = Utc.with_ymd_and_hms(2023, 12, 31, 20, 5, 9).unwrap();
        assert_eq!(format_timestamp(&to_beijing(utc)), "2024-01-01 04:05:09");
    }

    #[test]
    fn test_formatted_time_matches_utc_plus_eight() {
        let utc = Utc::now();
        let expected = (utc + Duration::hours(8)).format(TIMESTAMP_FORMAT).to_string();
        assert_eq!(format_timestamp(&to_beijing(utc)), expected);
    }

    #[test]
    fn test_current_time_keeps_fixed_offset() {
        let now = to_beijing(Utc::now());
        assert_eq!(now.offset().local_minus_utc(), 8 * 3600);
        assert_eq!(format_timestamp(&now).len(), "YYYY-MM-DD HH:MM:SS".len());
    }
}
