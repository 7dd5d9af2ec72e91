//! Formatting utilities used for CLI outputs.

use chrono::NaiveDate;

use crate::models::TimeRecord;
use crate::utils::colors::colorize_optional;
use crate::utils::time::format_time;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// `08:25 - 09:52`, or `16:45 - --:--` while open.
pub fn format_interval(record: &TimeRecord) -> String {
    let stop = record
        .stop
        .map(format_time)
        .unwrap_or_else(|| "--:--".to_string());
    format!("{} - {}", format_time(record.start), colorize_optional(&stop))
}

/// `2023-08-16 (Wed)`
pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d (%a)").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn closed_and_open_intervals() {
        let start = NaiveTime::from_hms_opt(8, 25, 0).unwrap();
        let stop = NaiveTime::from_hms_opt(9, 52, 0).unwrap();

        assert_eq!(format_interval(&TimeRecord::closed(start, stop)), "08:25 - 09:52");
        assert!(format_interval(&TimeRecord::open(start)).contains("--:--"));
    }

    #[test]
    fn day_with_weekday() {
        let d = NaiveDate::from_ymd_opt(2023, 8, 16).unwrap();
        assert_eq!(format_day(d), "2023-08-16 (Wed)");
    }
}
