use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

use crate::models::{MonthDay, MonthlyRecording, YearMonth};
use crate::utils::time::truncate_to_minute;

/// Worked minutes per recorded day, keyed by full date.
///
/// If the last recorded day is the reference date, its trailing open record
/// counts up to the reference time, so a running session shows up without a
/// punch-out. The recording itself is only read.
pub fn minutes_per_day(monthly: &MonthlyRecording, now: NaiveDateTime) -> BTreeMap<NaiveDate, i64> {
    let is_current_month = monthly.month == YearMonth::from_date(&now);
    let today = MonthDay::from_date(&now);
    let last = monthly.days.len().checked_sub(1);

    monthly
        .days
        .iter()
        .enumerate()
        .filter_map(|(i, daily)| {
            let date = monthly.month.at_day(daily.day)?;
            let minutes = if is_current_month && Some(i) == last && daily.day == today {
                daily.duration_until(truncate_to_minute(now.time()))
            } else {
                daily.daily_duration()
            };
            Some((date, minutes))
        })
        .collect()
}
