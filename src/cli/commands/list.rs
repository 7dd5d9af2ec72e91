use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::calculator::hours::minutes_to_hours;
use crate::core::calculator::minutes::minutes_per_day;
use crate::errors::AppResult;
use crate::models::{MonthlyRecording, YearMonth};
use crate::ui::messages::{info, section};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::formatting::{format_day, format_interval, pad_right};

const DAY_WIDTH: usize = 18;
const INTERVALS_WIDTH: usize = 48;

/// Handle the `list` command: show the recorded days of one month.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let month = match month {
            Some(m) => m.parse::<YearMonth>()?,
            None => YearMonth::from_date(&ctx.now),
        };

        match ctx.store().load_if_exists(month)? {
            Some(monthly) if !monthly.days.is_empty() => print_month(&monthly, ctx),
            _ => info(format!("No records for {}", month)),
        }
    }
    Ok(())
}

fn print_month(monthly: &MonthlyRecording, ctx: &AppContext) {
    let minutes = minutes_per_day(monthly, ctx.now);

    section(format!("Recorded days of {}", monthly.month));

    for daily in &monthly.days {
        let Some(date) = monthly.month.at_day(daily.day) else {
            continue;
        };
        let intervals: Vec<String> = daily.records.iter().map(format_interval).collect();
        let day_minutes = minutes.get(&date).copied().unwrap_or(0);

        println!(
            "{}{}{}{}  {} h",
            CYAN,
            pad_right(&format_day(date), DAY_WIDTH),
            RESET,
            pad_right(&intervals.join(", "), INTERVALS_WIDTH),
            minutes_to_hours(day_minutes)
        );
    }

    let total: i64 = minutes.values().sum();
    println!();
    println!("Total: {} h", minutes_to_hours(total));
}
