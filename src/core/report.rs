use chrono::NaiveDateTime;

use crate::config::Config;
use crate::core::calculator::hours::{minutes_to_hours, planned_hours, round_up};
use crate::core::calculator::minutes::minutes_per_day;
use crate::models::{IntermediateReport, MonthlyRecording, YearMonth};
use crate::utils::date::{business_days_in_range, business_days_of_week_until};
use rust_decimal::Decimal;

pub struct ReportLogic;

impl ReportLogic {
    /// Computes the figures for `now` from a recording snapshot.
    ///
    /// The month used for planned hours is the month of `now`, which is
    /// normally also the month of `monthly`.
    pub fn generate(cfg: &Config, monthly: &MonthlyRecording, now: NaiveDateTime) -> IntermediateReport {
        let today = now.date();
        let month = YearMonth::from_date(&today);
        let daily_minutes = minutes_per_day(monthly, now);

        // month
        let monthly_minutes: i64 = daily_minutes.values().sum();
        let monthly_actual_hours = minutes_to_hours(monthly_minutes);
        let monthly_workdays = business_days_in_range(month.first_day(), month.last_day()).len();
        let monthly_planned_hours = planned_hours(monthly_workdays, cfg.irwaz);

        // week so far
        let week_days = business_days_of_week_until(today);
        let weekly_minutes: i64 = week_days
            .iter()
            .filter_map(|d| daily_minutes.get(d))
            .sum();
        let weekly_actual_hours = minutes_to_hours(weekly_minutes);

        // today
        let daily_actual_hours = minutes_to_hours(daily_minutes.get(&today).copied().unwrap_or(0));

        IntermediateReport {
            daily_actual_hours,
            weekly_actual_hours,
            weekly_overtime: round_up(weekly_actual_hours - Decimal::from(cfg.irwaz)),
            monthly_planned_hours,
            monthly_actual_hours,
            monthly_overtime: round_up(monthly_actual_hours - monthly_planned_hours),
        }
    }
}
