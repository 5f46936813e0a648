use chrono::{DateTime, TimeZone};

/// Format a timestamp as 12-hour clock time with seconds, e.g. `09:05:07 PM`
pub fn format_call_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%I:%M:%S %p").to_string()
}

/// Pluralize a count with its noun ("1 entry", "3 entries")
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_afternoon_time_uses_pm() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 21, 5, 7).unwrap();
        assert_eq!(format_call_time(&time), "09:05:07 PM");
    }

    #[test]
    fn test_midnight_is_twelve_am() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 9).unwrap();
        assert_eq!(format_call_time(&time), "12:00:09 AM");
    }

    #[test]
    fn test_offset_is_respected() {
        let dhaka = FixedOffset::east_opt(6 * 3600).unwrap();
        let time = dhaka.with_ymd_and_hms(2024, 3, 1, 11, 30, 0).unwrap();
        assert_eq!(format_call_time(&time), "11:30:00 AM");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1, "entry", "entries"), "1 entry");
        assert_eq!(count_label(0, "entry", "entries"), "0 entries");
        assert_eq!(count_label(4, "entry", "entries"), "4 entries");
    }
}
