//! Minute to hour conversion with the fixed accounting policy: two fraction
//! digits, always rounded toward positive infinity.

use rust_decimal::{Decimal, RoundingStrategy};

pub const BUSINESS_DAYS_PER_WEEK: u32 = 5;
const MINUTES_PER_HOUR: i64 = 60;
const SCALE: u32 = 2;

/// Rounds up at the second decimal and pins the scale to two digits.
pub fn round_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::ToPositiveInfinity);
    rounded.rescale(SCALE);
    rounded
}

pub fn minutes_to_hours(minutes: i64) -> Decimal {
    if minutes == 0 {
        return round_up(Decimal::ZERO);
    }
    round_up(Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR))
}

/// Planned hours per business day for a weekly target.
pub fn daily_rate(weekly_hours: u32) -> Decimal {
    round_up(Decimal::from(weekly_hours) / Decimal::from(BUSINESS_DAYS_PER_WEEK))
}

/// Planned hours for `workdays` business days.
pub fn planned_hours(workdays: usize, weekly_hours: u32) -> Decimal {
    round_up(Decimal::from(workdays as u64) * daily_rate(weekly_hours))
}
