use chrono::{Datelike, NaiveDate, Weekday};

/// Monday to Friday. No holiday calendar is applied.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// All business days in `[start, end]`, ascending.
pub fn business_days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_business_day(*d))
        .collect()
}

/// Business days from the Monday on or before `reference` up to `reference`.
pub fn business_days_of_week_until(reference: NaiveDate) -> Vec<NaiveDate> {
    let offset = reference.weekday().num_days_from_monday() as u64;
    let monday = reference
        .checked_sub_days(chrono::Days::new(offset))
        .unwrap_or(reference);
    business_days_in_range(monday, reference)
}
